//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use user_crud::api::{create_router, AppState};
use user_crud::config::Config;
use user_crud::infra::Database;

/// Config pointing at a private in-memory SQLite database.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    }
}

/// Connect to a fresh, migrated database.
pub async fn test_database() -> Database {
    Database::connect(&test_config())
        .await
        .expect("in-memory database should connect")
}

/// Full application router over a fresh database.
pub async fn test_app() -> Router {
    let config = test_config();
    let db = test_database().await;
    create_router(AppState::from_database(db), &config)
}

/// Send a request and decode the JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
