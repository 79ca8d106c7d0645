//! Authentication and authorization logic.
//!
//! Provides password hashing, JWT management, and the credential flows
//! shared between the HTTP layer and tests.

pub mod jwt;
pub mod password;

use thiserror::Error;

use crate::models::user::{NewUser, User};
use crate::store::{StoreError, UserStore};

use self::jwt::JwtCodec;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; callers cannot tell which.
    #[error("Invalid credentials")]
    CredentialError,

    #[error("Email '{0}' is already registered")]
    EmailConflict(String),

    #[error(transparent)]
    Token(#[from] jwt::TokenError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Authenticate with email + password, minting a fresh token on success.
pub async fn authenticate(
    users: &dyn UserStore,
    codec: &JwtCodec,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let Some(credential) = users.find_by_email(email).await? else {
        return Err(AuthError::CredentialError);
    };
    if !password::verify_password(password, &credential.password_hash)? {
        return Err(AuthError::CredentialError);
    }
    Ok(codec.issue(email)?)
}

/// Register a new account and log it straight in.
pub async fn register(
    users: &dyn UserStore,
    codec: &JwtCodec,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(User, String), AuthError> {
    if users.find_by_email(email).await?.is_some() {
        return Err(AuthError::EmailConflict(email.to_string()));
    }
    let password_hash = password::hash_password(password)?;
    let user = match users
        .create(NewUser {
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
        })
        .await
    {
        Ok(user) => user,
        // Lost a race against a concurrent registration of the same email.
        Err(StoreError::Conflict(_)) => return Err(AuthError::EmailConflict(email.to_string())),
        Err(e) => return Err(e.into()),
    };
    let token = codec.issue(email)?;
    Ok((user, token))
}
