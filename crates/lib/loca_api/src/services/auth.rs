//! Authentication service — login/register flows delegating to `loca_core::auth`.

use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::TokenResponse;

/// Authenticate with email + password.
pub async fn login(state: &AppState, email: &str, password: &str) -> ApiResult<TokenResponse> {
    let token =
        loca_core::auth::authenticate(state.users.as_ref(), &state.jwt, email, password).await?;
    Ok(TokenResponse { token })
}

/// Register a new account; the response doubles as a successful login.
pub async fn register(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> ApiResult<TokenResponse> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "name, email and password are required".into(),
        ));
    }
    let (user, token) =
        loca_core::auth::register(state.users.as_ref(), &state.jwt, name, email, password).await?;
    info!(user_id = user.id, "registered new user");
    Ok(TokenResponse { token })
}
