//! Driving port for ad reads.

use async_trait::async_trait;

use crate::domain::{Ad, AdFilter, AdId, Error};

/// Domain use-case port for reading ads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdsQuery: Send + Sync {
    /// Fetch one ad regardless of its publication state.
    async fn get_ad(&self, id: AdId) -> Result<Ad, Error>;

    /// Every published ad, in no particular order.
    async fn list_published_ads(&self) -> Result<Vec<Ad>, Error>;

    /// Every ad satisfying all predicates set on `filter`, in no particular order.
    async fn find_ads(&self, filter: AdFilter) -> Result<Vec<Ad>, Error>;
}
