//! Ads API handlers.
//!
//! ```text
//! GET    /api/v1/ads
//! POST   /api/v1/ads               {"title":"Bike","text":"Red","user_id":0}
//! GET    /api/v1/ads/{ad_id}
//! PUT    /api/v1/ads/{ad_id}        {"title":"Bike","text":"Blue","user_id":0}
//! PUT    /api/v1/ads/{ad_id}/status {"published":true,"user_id":0}
//! DELETE /api/v1/ads/{ad_id}        {"user_id":0}
//! ```
//!
//! Every mutation first checks that the acting user exists, so an unknown
//! `user_id` answers 404 before any ownership or validation check.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateAdRequest, DeleteAdRequest, UpdateAdRequest, UpdateAdStatusRequest};
use crate::domain::{Ad, AdId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate_ad_content;

/// Ad representation returned by every ad endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_id: i64,
    pub published: bool,
    pub created_time: DateTime<Utc>,
    pub modified_time: DateTime<Utc>,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id().get(),
            author_id: ad.author_id().get(),
            published: ad.is_published(),
            created_time: ad.created(),
            modified_time: ad.modified(),
            title: ad.title().to_owned(),
            text: ad.text().to_owned(),
        }
    }
}

pub(crate) fn ad_list(ads: Vec<Ad>) -> Vec<AdResponse> {
    ads.into_iter().map(AdResponse::from).collect()
}

/// Request body for `POST /api/v1/ads`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAdBody {
    pub title: String,
    pub text: String,
    /// Author of the new ad.
    pub user_id: i64,
}

/// Request body for `PUT /api/v1/ads/{ad_id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateAdBody {
    pub title: String,
    pub text: String,
    /// Acting user; must be the author.
    pub user_id: i64,
}

/// Request body for `PUT /api/v1/ads/{ad_id}/status`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangeAdStatusBody {
    pub published: bool,
    /// Acting user; must be the author.
    pub user_id: i64,
}

/// Request body for `DELETE /api/v1/ads/{ad_id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteAdBody {
    /// Acting user; must be the author.
    pub user_id: i64,
}

async fn require_user(state: &HttpState, user_id: i64) -> ApiResult<UserId> {
    let user = state.users_query.get_user(UserId::new(user_id)).await?;
    Ok(user.id())
}

/// List published ads.
#[utoipa::path(
    get,
    path = "/api/v1/ads",
    responses(
        (status = 200, description = "Published ads", body = [AdResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "listPublishedAds"
)]
#[get("/ads")]
pub async fn list_published_ads(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AdResponse>>> {
    let ads = state.ads_query.list_published_ads().await?;
    Ok(web::Json(ad_list(ads)))
}

/// Create an unpublished ad.
#[utoipa::path(
    post,
    path = "/api/v1/ads",
    request_body = CreateAdBody,
    responses(
        (status = 200, description = "Created ad", body = AdResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "createAd"
)]
#[post("/ads")]
pub async fn create_ad(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAdBody>,
) -> ApiResult<web::Json<AdResponse>> {
    let CreateAdBody {
        title,
        text,
        user_id,
    } = payload.into_inner();
    let author_id = require_user(&state, user_id).await?;
    validate_ad_content(&title, &text)?;

    let ad = state
        .ads
        .create_ad(CreateAdRequest {
            title,
            text,
            author_id,
        })
        .await?;
    Ok(web::Json(ad.into()))
}

/// Fetch one ad, published or not.
#[utoipa::path(
    get,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identifier")),
    responses(
        (status = 200, description = "Ad", body = AdResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown ad", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "getAd"
)]
#[get("/ads/{ad_id}")]
pub async fn get_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<AdResponse>> {
    let ad = state.ads_query.get_ad(AdId::new(path.into_inner())).await?;
    Ok(web::Json(ad.into()))
}

/// Publish or withdraw an ad.
#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}/status",
    params(("ad_id" = i64, Path, description = "Ad identifier")),
    request_body = ChangeAdStatusBody,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "Unknown user or ad", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "updateAdStatus"
)]
#[put("/ads/{ad_id}/status")]
pub async fn update_ad_status(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ChangeAdStatusBody>,
) -> ApiResult<web::Json<AdResponse>> {
    let ChangeAdStatusBody { published, user_id } = payload.into_inner();
    let author_id = require_user(&state, user_id).await?;

    let ad = state
        .ads
        .update_ad_status(UpdateAdStatusRequest {
            ad_id: AdId::new(path.into_inner()),
            published,
            author_id,
        })
        .await?;
    Ok(web::Json(ad.into()))
}

/// Replace an ad's title and text.
#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identifier")),
    request_body = UpdateAdBody,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "Unknown user or ad", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "updateAd"
)]
#[put("/ads/{ad_id}")]
pub async fn update_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAdBody>,
) -> ApiResult<web::Json<AdResponse>> {
    let UpdateAdBody {
        title,
        text,
        user_id,
    } = payload.into_inner();
    let author_id = require_user(&state, user_id).await?;
    validate_ad_content(&title, &text)?;

    let ad = state
        .ads
        .update_ad(UpdateAdRequest {
            ad_id: AdId::new(path.into_inner()),
            title,
            text,
            author_id,
        })
        .await?;
    Ok(web::Json(ad.into()))
}

/// Delete an ad.
#[utoipa::path(
    delete,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identifier")),
    request_body = DeleteAdBody,
    responses(
        (status = 204, description = "Ad deleted"),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "Unknown user or ad", body = ErrorSchema)
    ),
    tags = ["ads"],
    operation_id = "deleteAd"
)]
#[delete("/ads/{ad_id}")]
pub async fn delete_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<DeleteAdBody>,
) -> ApiResult<HttpResponse> {
    let user_id = require_user(&state, payload.user_id).await?;
    state
        .ads
        .delete_ad(DeleteAdRequest {
            ad_id: AdId::new(path.into_inner()),
            user_id,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "ads_tests.rs"]
mod tests;
