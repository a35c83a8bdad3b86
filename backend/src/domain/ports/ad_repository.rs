//! Port abstraction for ad storage adapters and their errors.
//!
//! The classifieds service is the only caller. Adapters hand out clones and
//! take ownership of what they are given, so no caller can reach stored state
//! except through [`AdRepository::update`].

use async_trait::async_trait;

use crate::domain::{Ad, AdDraft, AdId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ad repository adapters.
    pub enum AdRepositoryError {
        /// No ad is stored under the identifier.
        NotFound { id: AdId } => "ad {id} not found",
        /// Storage failed for a reason unrelated to the request.
        Query { message: String } => "ad repository query failed: {message}",
    }
}

/// Keyed ad storage.
///
/// # Identifier semantics
///
/// - [`add`](Self::add) mints `last assigned + 1`, starting at 0.
/// - Identifiers are never reused, even after [`delete`](Self::delete).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Store a new ad and return the identifier it was given.
    async fn add(&self, draft: AdDraft) -> Result<AdId, AdRepositoryError>;

    /// Fetch one ad.
    ///
    /// Fails with [`AdRepositoryError::NotFound`] when absent.
    async fn get_by_id(&self, id: AdId) -> Result<Ad, AdRepositoryError>;

    /// Replace the stored ad in full.
    ///
    /// Fails with [`AdRepositoryError::NotFound`] when absent.
    async fn update(&self, id: AdId, ad: Ad) -> Result<(), AdRepositoryError>;

    /// Remove an ad. Removing an absent identifier succeeds.
    async fn delete(&self, id: AdId) -> Result<(), AdRepositoryError>;

    /// Snapshot of every stored ad, in no particular order.
    async fn list_all(&self) -> Result<Vec<Ad>, AdRepositoryError>;

    /// Snapshot of the published ads, in no particular order.
    async fn list_published(&self) -> Result<Vec<Ad>, AdRepositoryError>;
}
