//! Inbound adapters (driving side).
//!
//! Purpose: translate transport requests into domain port calls. Only the
//! HTTP adapter exists today.

pub mod http;
