//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: process-local stores behind `tokio::sync::RwLock`
//!
//! Adapters are thin translators between domain types and storage. They
//! contain no business logic.

pub mod persistence;
