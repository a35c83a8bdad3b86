//! Driving port for user reads.
//!
//! Adapters also use this port to check that an acting user exists before
//! calling an ad mutation.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user; `NotFound` when absent.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
