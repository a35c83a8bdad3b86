//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe the storage the domain needs; each
//! exposes a typed error so adapters map their failures into predictable
//! variants. Driving ports (`*Command`, `*Query`) are what inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod ad_repository;
mod ads_command;
mod ads_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use ad_repository::MockAdRepository;
pub use ad_repository::{AdRepository, AdRepositoryError};
#[cfg(test)]
pub use ads_command::MockAdsCommand;
pub use ads_command::{
    AdsCommand, CreateAdRequest, DeleteAdRequest, UpdateAdRequest, UpdateAdStatusRequest,
};
#[cfg(test)]
pub use ads_query::MockAdsQuery;
pub use ads_query::AdsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{CreateUserRequest, UpdateUserRequest, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
