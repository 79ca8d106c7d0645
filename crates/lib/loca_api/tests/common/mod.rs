//! Shared test harness: the full router over in-memory stores, a temp
//! upload directory, and a fixed signing secret.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use tower::ServiceExt;

use loca_api::config::{ApiConfig, default_public_paths};
use loca_api::{AppState, router};
use loca_core::auth::jwt::JwtCodec;
use loca_core::storage::FileStore;
use loca_core::store::memory::MemoryStore;

/// Signing secret used by every test app (comfortably over the 32-byte floor).
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub const BOUNDARY: &str = "loca-test-boundary-4aa91c";

/// A router plus the state behind it, with the upload dir kept alive.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _upload_dir: tempfile::TempDir,
}

pub fn test_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("tempdir");
    let state = test_state(upload_dir.path());
    TestApp {
        router: router(state.clone()),
        state,
        _upload_dir: upload_dir,
    }
}

/// State over a fresh in-memory store and the given upload directory.
pub fn test_state(upload_dir: &Path) -> AppState {
    let store = Arc::new(MemoryStore::new());
    AppState {
        users: store.clone(),
        rentals: store.clone(),
        messages: store,
        files: Arc::new(FileStore::new(upload_dir)),
        jwt: Arc::new(JwtCodec::new(TEST_SECRET).expect("codec")),
        config: ApiConfig {
            bind_addr: String::new(),
            public_paths: default_public_paths(),
        },
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.expect("infallible")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    authorized(Request::builder().method("GET").uri(uri), token)
        .body(Body::empty())
        .expect("request")
}

pub fn post_json(uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    authorized(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .expect("request")
}

/// Multipart request in the shape the rental endpoints take: text fields
/// plus an optional `picture` file part.
pub fn multipart(
    method: &str,
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    picture: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = picture {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"picture\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    authorized(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}")),
        token,
    )
    .body(Body::from(body))
    .expect("request")
}

fn authorized(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Register an account through the API and return its access token.
pub async fn register(router: &Router, name: &str, email: &str) -> String {
    let response = send(
        router,
        post_json(
            "/auth/register",
            None,
            &serde_json::json!({ "name": name, "email": email, "password": "pw-123456" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .expect("token")
        .to_string()
}

/// Log in through the API and return the fresh token.
pub async fn login(router: &Router, email: &str, password: &str) -> Response<Body> {
    send(
        router,
        post_json(
            "/auth/login",
            None,
            &serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await
}
