//! Domain primitives, aggregates and use cases.
//!
//! Purpose: define the classifieds entities, the ports adapters plug into,
//! and the service that enforces the ownership rules. Nothing in here knows
//! about HTTP or how records are stored.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Ad, AdDraft, AdId: classified ads and their identifiers.
//! - AdFilter: conjunctive search predicate over ads.
//! - User, UserDraft, UserId: registered users.
//! - ClassifiedsService: implementation of every driving port.
//! - TraceId: request correlation identifier.

pub mod ad;
pub mod ad_filter;
pub mod classifieds_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::ad::{Ad, AdDraft, AdId};
pub use self::ad_filter::AdFilter;
pub use self::classifieds_service::ClassifiedsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use classifieds::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
