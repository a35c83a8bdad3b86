//! Driving port for ad mutations.
//!
//! Every mutation of an existing ad names the acting user; only the ad's
//! author gets through. The author's existence is the caller's concern: the
//! HTTP adapter looks the user up before calling in.

use async_trait::async_trait;

use crate::domain::{Ad, AdId, Error, UserId};

/// Request to publish a new ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAdRequest {
    /// Headline.
    pub title: String,
    /// Body text.
    pub text: String,
    /// Author of the new ad.
    pub author_id: UserId,
}

/// Request to publish or withdraw an ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAdStatusRequest {
    /// Target ad.
    pub ad_id: AdId,
    /// Requested publication flag.
    pub published: bool,
    /// Acting user; must be the author.
    pub author_id: UserId,
}

/// Request to replace an ad's title and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAdRequest {
    /// Target ad.
    pub ad_id: AdId,
    /// New headline.
    pub title: String,
    /// New body text.
    pub text: String,
    /// Acting user; must be the author.
    pub author_id: UserId,
}

/// Request to delete an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAdRequest {
    /// Target ad.
    pub ad_id: AdId,
    /// Acting user; must be the author.
    pub user_id: UserId,
}

/// Domain use-case port for ad mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdsCommand: Send + Sync {
    /// Create an unpublished ad stamped with the current time.
    async fn create_ad(&self, request: CreateAdRequest) -> Result<Ad, Error>;

    /// Set the publication flag of an ad the actor authored.
    async fn update_ad_status(&self, request: UpdateAdStatusRequest) -> Result<Ad, Error>;

    /// Replace title and text of an ad the actor authored.
    async fn update_ad(&self, request: UpdateAdRequest) -> Result<Ad, Error>;

    /// Delete an ad the actor authored.
    async fn delete_ad(&self, request: DeleteAdRequest) -> Result<(), Error>;
}
