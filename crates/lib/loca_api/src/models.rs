//! API wire models.
//!
//! These fix the JSON contract the front end was built against: snake_case
//! field names and RFC 3339 timestamps. Domain models live in `loca_core`
//! and are mapped here at the handler boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loca_core::models::rental::Rental;
use loca_core::models::user::User;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Simple acknowledgement body.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fresh access token, returned by both login and register.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of a user.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Rentals
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct RentalResponse {
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

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            name: rental.name,
            surface: rental.surface,
            price: rental.price,
            picture: rental.picture,
            description: rental.description,
            owner_id: rental.owner_id,
            created_at: rental.created_at,
            updated_at: rental.updated_at,
        }
    }
}

/// Listing wrapper; the front end expects the array under a `rentals` key.
#[derive(Debug, Serialize, Deserialize)]
pub struct RentalListResponse {
    pub rentals: Vec<RentalResponse>,
}

/// Decoded multipart rental form. Field-level validation happens in the
/// service, so partial forms survive parsing.
#[derive(Debug, Default)]
pub struct RentalForm {
    pub name: Option<String>,
    pub surface: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub picture: Option<UploadedFile>,
}

/// An uploaded file part, held in memory until it lands in the file store.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRequest {
    pub rental_id: i64,
    pub user_id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rental_response_uses_snake_case_and_rfc3339() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("ts");
        let rental = Rental {
            id: 3,
            name: "Cabin".into(),
            surface: 42.5,
            price: 900.0,
            picture: Some("/files/rentalpicture/3/a.jpg".into()),
            description: "nice".into(),
            owner_id: 1,
            created_at: created,
            updated_at: created,
        };
        let value = serde_json::to_value(RentalResponse::from(rental)).expect("serialize");
        assert_eq!(value["owner_id"], 1);
        assert_eq!(value["picture"], "/files/rentalpicture/3/a.jpg");
        assert_eq!(value["created_at"], "2024-05-01T12:00:00Z");
    }
}
