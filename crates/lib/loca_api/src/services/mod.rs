//! Business logic between handlers and the stores.

pub mod auth;
pub mod messages;
pub mod rentals;
