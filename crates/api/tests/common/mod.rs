//! Shared helpers for API integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use agora_api::auth::jwt::JwtConfig;
use agora_api::config::ServerConfig;
use agora_api::router::build_app_router;
use agora_api::state::AppState;

/// Build a test `ServerConfig` with a fixed JWT secret and safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 30,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Credentials returned by login: the bare access token and the refresh token.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

/// Send a request and return the raw response.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    session: Option<&Session>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder
            .header("authorization", format!("Bearer {}", session.access_token))
            .header("refresh-token", &session.refresh_token);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, session: &Session) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(session)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    session: &Session,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(session)).await
}

pub async fn post_auth(app: Router, uri: &str, session: &Session) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(session)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    session: &Session,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(session)).await
}

pub async fn delete_auth(app: Router, uri: &str, session: &Session) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(session)).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Sign up a member through the API and log them in, returning the session
/// credentials extracted from the login response headers.
pub async fn signup_and_login(pool: &PgPool, nickname: &str) -> Session {
    let password = "test-password-123";

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/members/signup",
        serde_json::json!({
            "nickname": nickname,
            "password": password,
            "password_confirm": password,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "signup should succeed");

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/members/login",
        serde_json::json!({ "nickname": nickname, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    session_from_headers(&response)
}

/// Extract a [`Session`] from the credential headers of a login or refresh
/// response.
pub fn session_from_headers(response: &Response<Body>) -> Session {
    let authorization = response
        .headers()
        .get("authorization")
        .expect("response must carry an Authorization header")
        .to_str()
        .unwrap();
    let access_token = authorization
        .strip_prefix("Bearer ")
        .expect("Authorization header must use the Bearer scheme")
        .to_string();
    let refresh_token = response
        .headers()
        .get("refresh-token")
        .expect("response must carry a Refresh-Token header")
        .to_str()
        .unwrap()
        .to_string();
    Session {
        access_token,
        refresh_token,
    }
}
