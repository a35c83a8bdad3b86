//! In-memory persistence adapters.
//!
//! Each repository wraps a `MemoryTable` keyed by a
//! store-minted integer identifier. Adapters only translate between the table
//! and the domain port; ownership and validation rules live in the domain.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use classifieds::outbound::persistence::{InMemoryAdRepository, InMemoryUserRepository};
//!
//! let ads = Arc::new(InMemoryAdRepository::default());
//! let users = Arc::new(InMemoryUserRepository::default());
//! # let _ = (ads, users);
//! ```

mod memory_ad_repository;
mod memory_table;
mod memory_user_repository;

pub use memory_ad_repository::InMemoryAdRepository;
pub use memory_user_repository::InMemoryUserRepository;
