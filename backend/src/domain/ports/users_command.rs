//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Request to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Public nickname.
    pub nickname: String,
    /// Contact email address.
    pub email: String,
}

/// Request to replace a user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// User being updated.
    pub user_id: UserId,
    /// New nickname.
    pub nickname: String,
    /// New email address.
    pub email: String,
    /// Acting user; users may only update themselves.
    pub updater_id: UserId,
}

/// Domain use-case port for user mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Replace the profile of the acting user.
    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Delete an existing user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
