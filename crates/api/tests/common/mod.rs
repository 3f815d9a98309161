#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use studio_api::auth::jwt::JwtConfig;
use studio_api::bootstrap::{seed_demo_data, ADMIN_EMAIL, ADMIN_PASSWORD};
use studio_api::config::ServerConfig;
use studio_api::router::build_app_router;
use studio_api::state::AppState;
use studio_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: true,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// A seeded store plus the router serving it.
///
/// The router is cheap to clone, so each request takes its own copy.
pub struct TestApp {
    pub pool: DbPool,
    pub router: Router,
}

/// Build the full application router over a freshly seeded store.
pub async fn build_test_app() -> TestApp {
    let pool = studio_db::create_pool();
    seed_demo_data(&pool).await.expect("seeding should succeed");

    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        pool,
        router: build_app_router(state, &config),
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in through the API and return the login response body.
pub async fn login(app: &Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

/// Token of the seeded admin account.
pub async fn admin_token(app: &Router) -> String {
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Register a non-admin and return `(id, token)`.
pub async fn register_member(app: &Router, email: &str) -> (i64, String) {
    let body = serde_json::json!({
        "email": email,
        "firstName": "Toto",
        "lastName": "Toto",
        "password": "test!1234",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = login(app, email, "test!1234").await;
    (
        json["id"].as_i64().unwrap(),
        json["token"].as_str().unwrap().to_string(),
    )
}

pub fn session_body(name: &str, teacher_id: i64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "date": "2024-06-12",
        "teacher_id": teacher_id,
        "description": "Morning flow",
    })
}
