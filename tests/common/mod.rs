//! Shared helpers for integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use users_api::{app, ensure_schema, AppState};

pub const BODY_LIMIT: usize = 64 * 1024;

/// State whose pool never connects: nothing listens on port 1. Good for paths that must not reach the store.
pub fn unreachable_state() -> AppState {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://postgres@127.0.0.1:1/users_test")
        .unwrap();
    AppState::new(pool)
}

pub fn database_url() -> String {
    std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a PostgreSQL database for --ignored tests")
}

/// State backed by the database in `TEST_DATABASE_URL`, with the table ensured.
pub async fn database_state() -> AppState {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url())
        .await
        .expect("failed to connect to TEST_DATABASE_URL");
    ensure_schema(&pool).await.expect("failed to create users table");
    AppState::new(pool)
}

pub fn router(state: AppState) -> Router {
    app(state, BODY_LIMIT)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
