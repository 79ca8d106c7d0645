//! Authentication flow over the full router: registration, login, token
//! verification in the middleware, and the identity extractor.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use loca_core::auth::jwt::JwtCodec;
use serde_json::json;

#[tokio::test]
async fn register_then_me_roundtrips() {
    let app = common::test_app();
    let token = common::register(&app.router, "Alice", "alice@example.test").await;

    let response = common::send(&app.router, common::get("/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.test");
}

#[tokio::test]
async fn login_issues_a_working_token() {
    let app = common::test_app();
    common::register(&app.router, "Alice", "alice@example.test").await;

    let response = common::login(&app.router, "alice@example.test", "pw-123456").await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = common::body_json(response).await["token"]
        .as_str()
        .expect("token")
        .to_string();

    let me = common::send(&app.router, common::get("/auth/me", Some(&token))).await;
    assert_eq!(me.status(), StatusCode::OK);
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = common::test_app();
    common::register(&app.router, "Alice", "alice@example.test").await;

    let wrong_password = common::login(&app.router, "alice@example.test", "nope").await;
    let unknown_email = common::login(&app.router, "ghost@example.test", "pw-123456").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let a = common::body_json(wrong_password).await;
    let b = common::body_json(unknown_email).await;
    assert_eq!(a, b, "both failures must produce the same body");
    assert_eq!(a["message"], "Invalid credentials");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = common::test_app();
    common::register(&app.router, "Alice", "alice@example.test").await;

    let response = common::send(
        &app.router,
        common::post_json(
            "/auth/register",
            None,
            &json!({ "name": "Imposter", "email": "alice@example.test", "password": "x-123456" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(common::body_json(response).await["error"], "conflict");
}

#[tokio::test]
async fn missing_token_reaches_the_endpoint_and_is_rejected_there() {
    let app = common::test_app();

    let response = common::send(&app.router, common::get("/auth/me", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(response).await["message"],
        "No authenticated user"
    );
}

#[tokio::test]
async fn malformed_token_is_rejected_by_the_middleware() {
    let app = common::test_app();

    let response = common::send(&app.router, common::get("/auth/me", Some("garbage"))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::body_json(response).await["message"], "Malformed token");
}

#[tokio::test]
async fn foreign_signed_token_is_rejected() {
    let app = common::test_app();
    common::register(&app.router, "Alice", "alice@example.test").await;

    let foreign = JwtCodec::new("some-other-service-secret-0123456789")
        .expect("codec")
        .issue("alice@example.test")
        .expect("issue");

    let response = common::send(&app.router, common::get("/auth/me", Some(&foreign))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(response).await["message"],
        "Invalid token signature"
    );
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = common::test_app();
    common::register(&app.router, "Alice", "alice@example.test").await;

    let expired = JwtCodec::new(common::TEST_SECRET)
        .expect("codec")
        .issue_at("alice@example.test", Utc::now() - Duration::hours(2))
        .expect("issue");

    let response = common::send(&app.router, common::get("/auth/me", Some(&expired))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::body_json(response).await["message"], "Token expired");
}

#[tokio::test]
async fn valid_token_for_unknown_subject_is_rejected() {
    let app = common::test_app();

    let token = JwtCodec::new(common::TEST_SECRET)
        .expect("codec")
        .issue("ghost@example.test")
        .expect("issue");

    let response = common::send(&app.router, common::get("/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_json(response).await["message"],
        "Unknown subject 'ghost@example.test'"
    );
}

#[tokio::test]
async fn public_paths_skip_token_verification() {
    let app = common::test_app();

    // A garbage bearer token on a public path must not short-circuit: login
    // still runs and fails on credentials, not on the token.
    let request = common::post_json(
        "/auth/login",
        Some("garbage"),
        &json!({ "email": "ghost@example.test", "password": "pw" }),
    );
    let response = common::send(&app.router, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(common::body_json(response).await["message"], "Invalid credentials");

    // Same for stored pictures: the miss is a 404, not a 401.
    let response = common::send(
        &app.router,
        common::get("/files/rentalpicture/1/none.jpg", Some("garbage")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stacked_authentication_layers_agree_on_one_identity() {
    let upload_dir = tempfile::tempdir().expect("tempdir");
    let state = common::test_state(upload_dir.path());
    // Wrap the router in a second copy of the same middleware.
    let router = loca_api::router(state.clone()).layer(axum::middleware::from_fn_with_state(
        state,
        loca_api::middleware::auth::authenticate_request,
    ));

    let token = common::register(&router, "Alice", "alice@example.test").await;
    let response = common::send(&router, common::get("/auth/me", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await["email"],
        "alice@example.test"
    );
}
