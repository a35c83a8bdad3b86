//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers translate JSON bodies into driving-port requests and map domain
//! errors back through [`error`]. Nothing here touches storage directly.

use actix_web::{Scope, web};

pub mod ads;
pub mod error;
pub mod health;
pub mod schemas;
pub mod search;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Every classifieds endpoint, mounted under `/api/v1`.
///
/// Malformed JSON bodies and non-numeric path identifiers answer with the
/// standard `invalid_request` payload instead of actix's plain-text default.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(
            web::JsonConfig::default().error_handler(|err, req| error::extractor_error(&err, req)),
        )
        .app_data(
            web::PathConfig::default().error_handler(|err, req| error::extractor_error(&err, req)),
        )
        .service(ads::list_published_ads)
        .service(ads::create_ad)
        .service(ads::update_ad_status)
        .service(ads::update_ad)
        .service(ads::get_ad)
        .service(ads::delete_ad)
        .service(search::search_by_title)
        .service(search::search_ads)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
}

/// Fallback route answering 404 with the standard error payload.
pub fn not_found_service() -> actix_web::Route {
    web::to(error::route_not_found)
}
