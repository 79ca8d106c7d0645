//! User request handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::models::UserProfile;

/// `GET /user/{id}` — profile of any registered user.
pub async fn get_user_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserProfile>> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;
    Ok(Json(UserProfile::from(user)))
}
