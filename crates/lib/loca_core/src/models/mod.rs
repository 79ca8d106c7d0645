//! Domain models.
//!
//! These are internal domain models, distinct from the API wire models
//! in `loca_api` (which fix the JSON field names the front end expects).

pub mod message;
pub mod rental;
pub mod user;
