//! Postgres-backed store.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::message::{Message, NewMessage};
use crate::models::rental::{NewRental, Rental};
use crate::models::user::{Credential, NewUser, User};

use super::{MessageStore, RentalStore, StoreError, UserStore};

/// Store over a shared connection pool, implementing every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map unique-constraint violations to [`StoreError::Conflict`].
fn map_insert_error(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(db.message().to_string())
        }
        _ => StoreError::Database(e),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT id, email, name, password_hash, created_at, updated_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(credential)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, email, name, created_at, updated_at",
        )
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }
}

#[async_trait]
impl RentalStore for PgStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, StoreError> {
        let rental = sqlx::query_as::<_, Rental>(
            "SELECT id, name, surface, price, picture, description, owner_id, \
             created_at, updated_at FROM rentals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(rental)
    }

    async fn list(&self) -> Result<Vec<Rental>, StoreError> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT id, name, surface, price, picture, description, owner_id, \
             created_at, updated_at FROM rentals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rentals)
    }

    async fn create(&self, new: NewRental) -> Result<Rental, StoreError> {
        let rental = sqlx::query_as::<_, Rental>(
            "INSERT INTO rentals (name, surface, price, description, owner_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, surface, price, picture, description, owner_id, \
             created_at, updated_at",
        )
        .bind(&new.name)
        .bind(new.surface)
        .bind(new.price)
        .bind(&new.description)
        .bind(new.owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(rental)
    }

    async fn save(&self, rental: &Rental) -> Result<Rental, StoreError> {
        sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET name = $2, surface = $3, price = $4, description = $5, \
             updated_at = now() WHERE id = $1 \
             RETURNING id, name, surface, price, picture, description, owner_id, \
             created_at, updated_at",
        )
        .bind(rental.id)
        .bind(&rental.name)
        .bind(rental.surface)
        .bind(rental.price)
        .bind(&rental.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn set_picture(&self, id: i64, picture: &str) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE rentals SET picture = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(picture)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (user_id, rental_id, message) VALUES ($1, $2, $3) \
             RETURNING id, user_id, rental_id, message, created_at, updated_at",
        )
        .bind(new.user_id)
        .bind(new.rental_id)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }
}
