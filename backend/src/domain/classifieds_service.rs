//! Classifieds domain service.
//!
//! [`ClassifiedsService`] implements every driving port over one ad store and
//! one user store. It is the only place ownership is checked: an ad can be
//! published, edited or deleted by its author alone, and a user profile only
//! by that user.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::ports::{
    AdRepository, AdRepositoryError, AdsCommand, AdsQuery, CreateAdRequest, CreateUserRequest,
    DeleteAdRequest, UpdateAdRequest, UpdateAdStatusRequest, UpdateUserRequest, UserRepository,
    UserRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::{Ad, AdDraft, AdFilter, AdId, Error, User, UserDraft, UserId};

fn map_ad_repository_error(error: AdRepositoryError) -> Error {
    match error {
        AdRepositoryError::NotFound { id } => Error::not_found(format!("ad {id} not found")),
        AdRepositoryError::Query { message } => {
            Error::internal(format!("ad repository error: {message}"))
        }
    }
}

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::NotFound { id } => Error::not_found(format!("user {id} not found")),
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// Service implementing the ad and user driving ports.
///
/// Holds no mutable state of its own, so one instance is shared behind an
/// `Arc` by every request handler.
#[derive(Clone)]
pub struct ClassifiedsService<A, U> {
    ads: Arc<A>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<A, U> ClassifiedsService<A, U> {
    /// Create a service over the given stores.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use classifieds::domain::ClassifiedsService;
    /// # use classifieds::outbound::persistence::{InMemoryAdRepository, InMemoryUserRepository};
    /// # use mockable::DefaultClock;
    /// let service = ClassifiedsService::new(
    ///     Arc::new(InMemoryAdRepository::default()),
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(ads: Arc<A>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { ads, users, clock }
    }
}

impl<A, U> ClassifiedsService<A, U>
where
    A: AdRepository,
{
    async fn load_ad(&self, id: AdId) -> Result<Ad, Error> {
        self.ads
            .get_by_id(id)
            .await
            .map_err(map_ad_repository_error)
    }

    /// Load an ad and check `actor` is its author.
    async fn load_owned_ad(&self, id: AdId, actor: UserId) -> Result<Ad, Error> {
        let ad = self.load_ad(id).await?;
        if ad.is_authored_by(actor) {
            Ok(ad)
        } else {
            warn!(ad_id = %id, actor = %actor, author = %ad.author_id(), "ad access denied");
            Err(Error::forbidden(format!(
                "user {actor} is not the author of ad {id}"
            )))
        }
    }

    async fn store_ad(&self, ad: Ad) -> Result<Ad, Error> {
        self.ads
            .update(ad.id(), ad.clone())
            .await
            .map_err(map_ad_repository_error)?;
        Ok(ad)
    }
}

#[async_trait]
impl<A, U> AdsCommand for ClassifiedsService<A, U>
where
    A: AdRepository,
    U: UserRepository,
{
    async fn create_ad(&self, request: CreateAdRequest) -> Result<Ad, Error> {
        let draft = AdDraft::new(
            request.title,
            request.text,
            request.author_id,
            self.clock.utc(),
        );
        let id = self
            .ads
            .add(draft.clone())
            .await
            .map_err(map_ad_repository_error)?;
        debug!(ad_id = %id, author = %request.author_id, "ad created");
        Ok(draft.into_ad(id))
    }

    async fn update_ad_status(&self, request: UpdateAdStatusRequest) -> Result<Ad, Error> {
        let ad = self
            .load_owned_ad(request.ad_id, request.author_id)
            .await?
            .with_publication(request.published);
        let ad = self.store_ad(ad).await?;
        debug!(ad_id = %request.ad_id, published = request.published, "ad status updated");
        Ok(ad)
    }

    async fn update_ad(&self, request: UpdateAdRequest) -> Result<Ad, Error> {
        let ad = self
            .load_owned_ad(request.ad_id, request.author_id)
            .await?
            .with_content(request.title, request.text, self.clock.utc());
        let ad = self.store_ad(ad).await?;
        debug!(ad_id = %request.ad_id, "ad content updated");
        Ok(ad)
    }

    async fn delete_ad(&self, request: DeleteAdRequest) -> Result<(), Error> {
        self.load_owned_ad(request.ad_id, request.user_id).await?;
        self.ads
            .delete(request.ad_id)
            .await
            .map_err(map_ad_repository_error)?;
        debug!(ad_id = %request.ad_id, "ad deleted");
        Ok(())
    }
}

#[async_trait]
impl<A, U> AdsQuery for ClassifiedsService<A, U>
where
    A: AdRepository,
    U: UserRepository,
{
    async fn get_ad(&self, id: AdId) -> Result<Ad, Error> {
        self.load_ad(id).await
    }

    async fn list_published_ads(&self) -> Result<Vec<Ad>, Error> {
        self.ads
            .list_published()
            .await
            .map_err(map_ad_repository_error)
    }

    async fn find_ads(&self, filter: AdFilter) -> Result<Vec<Ad>, Error> {
        let ads = self.ads.list_all().await.map_err(map_ad_repository_error)?;
        Ok(ads.into_iter().filter(|ad| filter.matches(ad)).collect())
    }
}

#[async_trait]
impl<A, U> UsersCommand for ClassifiedsService<A, U>
where
    A: AdRepository,
    U: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let draft = UserDraft::new(request.nickname, request.email);
        let id = self
            .users
            .add(draft.clone())
            .await
            .map_err(map_user_repository_error)?;
        debug!(user_id = %id, "user created");
        Ok(draft.into_user(id))
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let user = self.get_user(request.user_id).await?;
        if request.user_id != request.updater_id {
            warn!(
                user_id = %request.user_id,
                actor = %request.updater_id,
                "user update denied"
            );
            return Err(Error::forbidden(format!(
                "user {} may not update user {}",
                request.updater_id, request.user_id
            )));
        }

        let user = user.with_profile(request.nickname, request.email);
        self.users
            .update(request.user_id, user.clone())
            .await
            .map_err(map_user_repository_error)?;
        debug!(user_id = %request.user_id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.get_user(id).await?;
        self.users
            .delete(id)
            .await
            .map_err(map_user_repository_error)?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<A, U> UsersQuery for ClassifiedsService<A, U>
where
    A: AdRepository,
    U: UserRepository,
{
    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .get_by_id(id)
            .await
            .map_err(map_user_repository_error)
    }
}

#[cfg(test)]
#[path = "classifieds_service_tests.rs"]
mod tests;
