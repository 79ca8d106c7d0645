//! Message request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::auth::CurrentUser;
use crate::models::{MessageRequest, StatusMessage};
use crate::services::messages;

/// `POST /messages` — record a message from a user about a rental.
pub async fn create_message_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(body): Json<MessageRequest>,
) -> ApiResult<Json<StatusMessage>> {
    messages::send(&state, body).await?;
    Ok(Json(StatusMessage {
        message: "Message sent successfully".into(),
    }))
}
