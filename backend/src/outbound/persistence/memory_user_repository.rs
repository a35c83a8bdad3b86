//! In-memory implementation of the user repository port.

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId};

use super::memory_table::MemoryTable;

/// Process-local user store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: MemoryTable<UserId, User>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, draft: UserDraft) -> Result<UserId, UserRepositoryError> {
        self.table
            .insert_with(|id| draft.into_user(id))
            .await
            .map_err(|error| UserRepositoryError::query(error.to_string()))
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, UserRepositoryError> {
        self.table
            .get(id)
            .await
            .ok_or_else(|| UserRepositoryError::not_found(id))
    }

    async fn update(&self, id: UserId, user: User) -> Result<(), UserRepositoryError> {
        if self.table.replace(id, user.with_id(id)).await {
            Ok(())
        } else {
            Err(UserRepositoryError::not_found(id))
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        self.table.remove(id).await;
        Ok(())
    }
}
