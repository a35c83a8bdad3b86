//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (ads, search,
//!   users, health)
//! - **Schemas**: the wire DTOs plus [`ErrorSchema`] and [`ErrorCodeSchema`],
//!   which describe domain errors without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::ads::{
    AdResponse, ChangeAdStatusBody, CreateAdBody, DeleteAdBody, UpdateAdBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::search::SearchAdsBody;
use crate::inbound::http::users::{CreateUserBody, UpdateUserBody, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classifieds API",
        description = "Ads and users with author-only mutation rules, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::ads::list_published_ads,
        crate::inbound::http::ads::create_ad,
        crate::inbound::http::ads::get_ad,
        crate::inbound::http::ads::update_ad_status,
        crate::inbound::http::ads::update_ad,
        crate::inbound::http::ads::delete_ad,
        crate::inbound::http::search::search_by_title,
        crate::inbound::http::search::search_ads,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AdResponse,
        CreateAdBody,
        UpdateAdBody,
        ChangeAdStatusBody,
        DeleteAdBody,
        SearchAdsBody,
        UserResponse,
        CreateUserBody,
        UpdateUserBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "ads", description = "Creating, publishing and editing ads"),
        (name = "search", description = "Filtering ads by title or attributes"),
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
