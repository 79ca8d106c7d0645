//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::auth::CurrentUser;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use crate::services::auth;

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let resp = auth::login(&state, &body.email, &body.password).await?;
    Ok(Json(resp))
}

/// `POST /auth/register` — create a new account and log it straight in.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let resp = auth::register(&state, &body.name, &body.email, &body.password).await?;
    Ok(Json(resp))
}

/// `GET /auth/me` — profile of the authenticated user.
pub async fn me_handler(user: CurrentUser) -> ApiResult<Json<UserProfile>> {
    Ok(Json(UserProfile::from(user.0)))
}
