//! Port abstraction for user storage adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// No user is stored under the identifier.
        NotFound { id: UserId } => "user {id} not found",
        /// Storage failed for a reason unrelated to the request.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Keyed user storage with the same identifier rules as
/// [`AdRepository`](super::AdRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return the identifier it was given.
    async fn add(&self, draft: UserDraft) -> Result<UserId, UserRepositoryError>;

    /// Fetch one user; [`UserRepositoryError::NotFound`] when absent.
    async fn get_by_id(&self, id: UserId) -> Result<User, UserRepositoryError>;

    /// Replace the stored user in full; [`UserRepositoryError::NotFound`] when absent.
    async fn update(&self, id: UserId, user: User) -> Result<(), UserRepositoryError>;

    /// Remove a user. Removing an absent identifier succeeds.
    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
