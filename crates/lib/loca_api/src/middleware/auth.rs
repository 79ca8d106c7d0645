//! Authentication middleware — Bearer token extraction, JWT verification,
//! and per-request identity.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use loca_core::models::user::User;

use crate::AppState;
use crate::error::ApiError;

/// Verified identity of the current request, stored in request extensions.
///
/// Carries the resolved user row, not just token claims, so handlers can
/// use the stable id without another lookup. The password hash is already
/// stripped at this point.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("No authenticated user".into()))
    }
}

/// Axum middleware applied to the whole router: authenticates the request
/// when a Bearer token is present.
///
/// Public paths pass through untouched. A missing or non-Bearer header also
/// passes through, unauthenticated; endpoints that need an identity reject
/// later via the [`CurrentUser`] extractor. A token that is present but
/// fails verification, or names an unknown subject, short-circuits with 401
/// before any handler runs.
pub async fn authenticate_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.config.is_public_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let Some(token) = bearer_token(&request) else {
        return Ok(next.run(request).await);
    };

    let claims = state.jwt.verify(&token)?;

    // When the middleware runs twice (nested routers), the first pass wins.
    if request.extensions().get::<CurrentUser>().is_none() {
        let credential = state
            .users
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(format!("Unknown subject '{}'", claims.sub)))?;
        tracing::debug!(user_id = credential.id, "authenticated request");
        request
            .extensions_mut()
            .insert(CurrentUser(credential.into_user()));
    }

    Ok(next.run(request).await)
}

/// Token from an `Authorization: Bearer <token>` header, if present.
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
