//! # loca_core
//!
//! Core domain logic for Loca: credentials and tokens, rental ownership,
//! persistence interfaces, and scoped picture storage.

pub mod auth;
pub mod migrate;
pub mod models;
pub mod ownership;
pub mod storage;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
