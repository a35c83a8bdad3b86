//! Ad search handlers.
//!
//! ```text
//! GET  /api/v1/search/{title}
//! POST /api/v1/search {"author_id":1,"published":true}
//! ```
//!
//! The POST body uses the wire's zero values as "not set": a zero `id` or
//! `author_id`, an empty `title`, and an absent or zero-time
//! (`0001-01-01T00:00:00Z`) timestamp impose nothing.

use actix_web::{get, post, web};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AdFilter, AdId, Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ads::{AdResponse, ad_list};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/search`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SearchAdsBody {
    pub id: i64,
    pub title: String,
    /// Accepted for compatibility; not matched.
    pub text: String,
    pub author_id: i64,
    /// `false` requests hidden ads; carried on the filter but not enforced.
    pub published: bool,
    pub created_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
}

/// Clients send `0001-01-01T00:00:00Z` for a timestamp they do not filter on.
fn is_zero_time(at: &DateTime<Utc>) -> bool {
    at.year() == 1
        && at.ordinal() == 1
        && at.num_seconds_from_midnight() == 0
        && at.nanosecond() == 0
}

fn set_timestamp(at: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    at.filter(|at| !is_zero_time(at))
}

impl From<SearchAdsBody> for AdFilter {
    fn from(body: SearchAdsBody) -> Self {
        Self {
            id: (body.id != 0).then_some(AdId::new(body.id)),
            title: Some(body.title).filter(|title| !title.is_empty()),
            author_id: (body.author_id != 0).then_some(UserId::new(body.author_id)),
            created: set_timestamp(body.created_time),
            modified: set_timestamp(body.modified_time),
            hidden: !body.published,
        }
    }
}

/// Ads whose title equals the path segment exactly.
#[utoipa::path(
    get,
    path = "/api/v1/search/{title}",
    params(("title" = String, Path, description = "Exact title")),
    responses(
        (status = 200, description = "Matching ads", body = [AdResponse]),
        (status = 404, description = "No ad has this title", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "searchAdsByTitle"
)]
#[get("/search/{title}")]
pub async fn search_by_title(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<AdResponse>>> {
    let title = path.into_inner();
    let ads = state
        .ads_query
        .find_ads(AdFilter::default().with_title(title.as_str()))
        .await?;
    if ads.is_empty() {
        return Err(Error::not_found(format!("no ad titled {title:?}")));
    }
    Ok(web::Json(ad_list(ads)))
}

/// Ads matching every predicate set in the body.
#[utoipa::path(
    post,
    path = "/api/v1/search",
    request_body = SearchAdsBody,
    responses(
        (status = 200, description = "Matching ads, possibly none", body = [AdResponse]),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "searchAds"
)]
#[post("/search")]
pub async fn search_ads(
    state: web::Data<HttpState>,
    payload: web::Json<SearchAdsBody>,
) -> ApiResult<web::Json<Vec<AdResponse>>> {
    let ads = state.ads_query.find_ads(payload.into_inner().into()).await?;
    Ok(web::Json(ad_list(ads)))
}
