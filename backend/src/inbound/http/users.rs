//! Users API handlers.
//!
//! ```text
//! POST   /api/v1/users           {"nickname":"ada","email":"ada@example.com"}
//! GET    /api/v1/users/{user_id}
//! PUT    /api/v1/users/{user_id} {"nickname":"ada","email":"ada@example.org","user_id":0}
//! DELETE /api/v1/users/{user_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// User representation returned by every user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            nickname: user.nickname().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    pub nickname: String,
    pub email: String,
}

/// Request body for `PUT /api/v1/users/{user_id}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserBody {
    pub nickname: String,
    pub email: String,
    /// Acting user; must match the path.
    pub user_id: i64,
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let CreateUserBody { nickname, email } = payload.into_inner();
    let user = state
        .users
        .create_user(CreateUserRequest { nickname, email })
        .await?;
    Ok(web::Json(user.into()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_query
        .get_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(user.into()))
}

/// Replace a user's own profile.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User being updated")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 403, description = "Acting user differs from target", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let UpdateUserBody {
        nickname,
        email,
        user_id,
    } = payload.into_inner();
    let updater = state.users_query.get_user(UserId::new(user_id)).await?;

    let user = state
        .users
        .update_user(UpdateUserRequest {
            user_id: UserId::new(path.into_inner()),
            nickname,
            email,
            updater_id: updater.id(),
        })
        .await?;
    Ok(web::Json(user.into()))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users
        .delete_user(UserId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
