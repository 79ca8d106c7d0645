//! # loca_api
//!
//! HTTP API library for Loca.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use loca_core::auth::jwt::JwtCodec;
use loca_core::storage::FileStore;
use loca_core::store::{MessageStore, RentalStore, UserStore};

use crate::config::ApiConfig;
use crate::handlers::{auth, files, messages, rentals, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential lookup and registration.
    pub users: Arc<dyn UserStore>,
    /// Rental persistence.
    pub rentals: Arc<dyn RentalStore>,
    /// Message persistence.
    pub messages: Arc<dyn MessageStore>,
    /// Rental picture storage.
    pub files: Arc<FileStore>,
    /// Token codec; secret checked once at construction.
    pub jwt: Arc<JwtCodec>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
///
/// The authentication middleware wraps the whole router. It forwards public
/// paths and token-less requests; handlers that need an identity enforce it
/// through the `CurrentUser` extractor, so "not logged in" is decided per
/// endpoint rather than per route group.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/me", get(auth::me_handler))
        .route(
            "/rentals",
            get(rentals::list_rentals_handler).post(rentals::create_rental_handler),
        )
        .route(
            "/rentals/{id}",
            get(rentals::get_rental_handler).put(rentals::update_rental_handler),
        )
        .route("/messages", post(messages::create_message_handler))
        .route("/user/{id}", get(users::get_user_handler))
        .route(
            "/files/rentalpicture/{id}/{filename}",
            get(files::get_rental_picture_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate_request,
        ))
        .layer(cors)
        .with_state(state)
}
