//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AdsCommand, AdsQuery, UsersCommand, UsersQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub ads: Arc<dyn AdsCommand>,
    pub ads_query: Arc<dyn AdsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ads: Arc<dyn AdsCommand>,
    pub ads_query: Arc<dyn AdsQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use classifieds::domain::ClassifiedsService;
    /// use classifieds::inbound::http::state::{HttpState, HttpStatePorts};
    /// use classifieds::outbound::persistence::{InMemoryAdRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(ClassifiedsService::new(
    ///     Arc::new(InMemoryAdRepository::default()),
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     ads: service.clone(),
    ///     ads_query: service.clone(),
    ///     users: service.clone(),
    ///     users_query: service,
    /// });
    /// let _ads = state.ads.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            ads,
            ads_query,
            users,
            users_query,
        } = ports;
        Self {
            ads,
            ads_query,
            users,
            users_query,
        }
    }

    /// Route every port to one service implementing all of them.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: AdsCommand + AdsQuery + UsersCommand + UsersQuery + 'static,
    {
        Self::new(HttpStatePorts {
            ads: service.clone(),
            ads_query: service.clone(),
            users: service.clone(),
            users_query: service,
        })
    }
}
