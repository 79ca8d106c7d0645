//! Message domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message left by a user about a rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub user_id: i64,
    pub rental_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for a message insert. Both referents must exist; the stores
/// enforce this with foreign keys, the service checks it up front to
/// answer with a clean validation error instead.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub user_id: i64,
    pub rental_id: i64,
    pub message: String,
}
