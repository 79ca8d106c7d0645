//! Persistence interfaces for users, rentals, and messages.
//!
//! Handlers depend on these traits only. [`postgres`] binds them to the
//! real database; [`memory`] is a self-contained implementation used by
//! tests and local experiments.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::message::{Message, NewMessage};
use crate::models::rental::{NewRental, Rental};
use crate::models::user::{Credential, NewUser, User};

/// Store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-constraint violation, e.g. a duplicate email.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The row disappeared between lookup and write.
    #[error("Row not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// User lookup and registration.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the credential registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with [`StoreError::Conflict`] when the email
    /// is already taken.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;
}

/// Rental persistence.
#[async_trait]
pub trait RentalStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, StoreError>;

    /// All rentals, oldest first.
    async fn list(&self) -> Result<Vec<Rental>, StoreError>;

    async fn create(&self, new: NewRental) -> Result<Rental, StoreError>;

    /// Persist the mutable fields (name, surface, price, description) of an
    /// existing rental; owner and picture are untouched.
    async fn save(&self, rental: &Rental) -> Result<Rental, StoreError>;

    /// Record the public URL of a rental's stored picture.
    async fn set_picture(&self, id: i64, picture: &str) -> Result<(), StoreError>;
}

/// Message persistence.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError>;
}
