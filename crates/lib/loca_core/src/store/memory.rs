//! In-memory store.
//!
//! One struct implements all three store traits so a single instance can
//! back a whole application state. Ids are handed out per table, starting
//! at 1, like the database sequences would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::message::{Message, NewMessage};
use crate::models::rental::{NewRental, Rental};
use crate::models::user::{Credential, NewUser, User};

use super::{MessageStore, RentalStore, StoreError, UserStore};

/// In-memory implementation of every store trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<i64, Credential>>,
    rentals: RwLock<HashMap<i64, Rental>>,
    messages: RwLock<HashMap<i64, Message>>,
    next_user_id: AtomicI64,
    next_rental_id: AtomicI64,
    next_message_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(|c| c.clone().into_user()))
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        // Write lock held across the uniqueness check and the insert.
        let mut users = self.users.write().await;
        if users.values().any(|c| c.email == new.email) {
            return Err(StoreError::Conflict(format!(
                "email '{}' is already registered",
                new.email
            )));
        }
        let now = Utc::now();
        let credential = Credential {
            id: Self::next(&self.next_user_id),
            email: new.email,
            name: new.name,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        let user = credential.clone().into_user();
        users.insert(credential.id, credential);
        Ok(user)
    }
}

#[async_trait]
impl RentalStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, StoreError> {
        let rentals = self.rentals.read().await;
        Ok(rentals.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Rental>, StoreError> {
        let rentals = self.rentals.read().await;
        let mut all: Vec<Rental> = rentals.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn create(&self, new: NewRental) -> Result<Rental, StoreError> {
        let mut rentals = self.rentals.write().await;
        let now = Utc::now();
        let rental = Rental {
            id: Self::next(&self.next_rental_id),
            name: new.name,
            surface: new.surface,
            price: new.price,
            picture: None,
            description: new.description,
            owner_id: new.owner_id,
            created_at: now,
            updated_at: now,
        };
        rentals.insert(rental.id, rental.clone());
        Ok(rental)
    }

    async fn save(&self, rental: &Rental) -> Result<Rental, StoreError> {
        let mut rentals = self.rentals.write().await;
        let stored = rentals.get_mut(&rental.id).ok_or(StoreError::NotFound)?;
        stored.name = rental.name.clone();
        stored.surface = rental.surface;
        stored.price = rental.price;
        stored.description = rental.description.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn set_picture(&self, id: i64, picture: &str) -> Result<(), StoreError> {
        let mut rentals = self.rentals.write().await;
        let stored = rentals.get_mut(&id).ok_or(StoreError::NotFound)?;
        stored.picture = Some(picture.to_string());
        stored.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn create(&self, new: NewMessage) -> Result<Message, StoreError> {
        let mut messages = self.messages.write().await;
        let now = Utc::now();
        let message = Message {
            id: Self::next(&self.next_message_id),
            user_id: new.user_id,
            rental_id: new.rental_id,
            message: new.message,
            created_at: now,
            updated_at: now,
        };
        messages.insert(message.id, message.clone());
        Ok(message)
    }
}
