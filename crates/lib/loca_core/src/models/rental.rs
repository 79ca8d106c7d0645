//! Rental domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ownership::Owned;

/// A rental listing.
///
/// `owner_id` is fixed at creation from the authenticated user and never
/// changes afterwards; `picture` holds the public URL of the stored image,
/// if one was uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rental {
    pub id: i64,
    pub name: String,
    pub surface: f64,
    pub price: f64,
    pub picture: Option<String>,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Rental {
    fn owner_id(&self) -> i64 {
        self.owner_id
    }
}

/// Data for a rental insert. The picture is attached separately, after the
/// row exists and the file has an id-scoped home on disk.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub name: String,
    pub surface: f64,
    pub price: f64,
    pub description: String,
    pub owner_id: i64,
}
