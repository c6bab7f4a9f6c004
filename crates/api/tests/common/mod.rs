#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use scribe_api::auth::jwt::{issue_token, JwtConfig};
use scribe_api::config::ServerConfig;
use scribe_api::router::{build_blogs_app, build_users_app};
use scribe_api::state::AppState;
use scribe_core::roles::Role;
use scribe_db::DbPool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-shared-by-both-services";

/// Build a test `ServerConfig` with safe defaults and a fixed signing secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 24,
        },
    }
}

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> DbPool {
    scribe_db::create_memory_pool()
        .await
        .expect("in-memory pool should open")
}

pub fn test_state(pool: DbPool) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
    }
}

/// Users service router over `pool`, with the production middleware stack.
pub fn users_app(pool: DbPool) -> Router {
    build_users_app(test_state(pool)).expect("users app should build")
}

/// Blogs service router over `pool`, with the production middleware stack.
pub fn blogs_app(pool: DbPool) -> Router {
    build_blogs_app(test_state(pool)).expect("blogs app should build")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request("POST", uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request("POST", uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request("PUT", uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request("PUT", uri, Some(token), body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// Send a request with a raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, value: &str) -> Response {
    let req = Request::builder()
        .uri(uri)
        .header("authorization", value)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register `username` through the API and assert 201.
pub async fn register(app: Router, username: &str, password: &str, full_name: &str) {
    let body = serde_json::json!({
        "username": username,
        "password": password,
        "full_name": full_name,
    });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Log in through the API and return the bearer token.
pub async fn login(app: Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Register then log in, returning the token.
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    register(app.clone(), username, password, username).await;
    login(app.clone(), username, password).await
}

/// Mint a token directly, as the users service would after a login.
pub fn token_for(username: &str, role: Role) -> String {
    issue_token(username, role, &test_config().jwt).expect("token should sign")
}
