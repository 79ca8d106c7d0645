//! Message service — referent validation and persistence.

use loca_core::models::message::{Message, NewMessage};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::MessageRequest;

/// Persist a message after checking that both referents exist.
///
/// The foreign keys would catch a dangling id anyway; checking up front
/// turns it into a clean validation error instead of a database error.
pub async fn send(state: &AppState, req: MessageRequest) -> ApiResult<Message> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("Message must not be empty".into()));
    }
    if state.users.find_by_id(req.user_id).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "User {} does not exist",
            req.user_id
        )));
    }
    if state.rentals.find_by_id(req.rental_id).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "Rental {} does not exist",
            req.rental_id
        )));
    }
    let message = state
        .messages
        .create(NewMessage {
            user_id: req.user_id,
            rental_id: req.rental_id,
            message: req.message,
        })
        .await?;
    Ok(message)
}
