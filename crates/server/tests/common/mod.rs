//! Shared helpers for the server integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use healthspeak_core::{Document, HistoryError, RecordId, StoredRecord};
use healthspeak_server::config::Config;
use healthspeak_server::db::{HistoryStore, MemoryHistoryStore, SharedStore};

/// Configuration with a rate limit high enough to never trigger.
pub fn test_config() -> Config {
    Config {
        rate_limit_rps: 1000,
        ..Config::default()
    }
}

/// App backed by a fresh in-memory store.
pub fn memory_app() -> Router {
    healthspeak_server::build_app(Arc::new(MemoryHistoryStore::new()), &test_config())
}

pub fn app_with(store: SharedStore, config: &Config) -> Router {
    healthspeak_server::build_app(store, config)
}

/// Send a request to the app and return (status, headers, body as JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, JsonValue) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };

    (status, headers, body)
}

/// Send a request to the app and return (status, body as text).
pub async fn request_text(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Send a request to the app and return (status, body as JSON).
pub async fn request(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let (status, _, body) = send(app, req).await;
    (status, body)
}

/// Build a GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a POST request with JSON body.
pub fn post(uri: &str, body: JsonValue) -> Request<Body> {
    post_raw(uri, serde_json::to_vec(&body).unwrap())
}

/// Build a POST request with an arbitrary body.
pub fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Sample history record JSON for tests.
pub fn sample_record(name: &str, category: &str) -> JsonValue {
    serde_json::json!({
        "documentType": "Prescription",
        "documentName": name,
        "dateTranslated": "2024-01-01T00:00:00Z",
        "status": "Completed",
        "category": category
    })
}

/// Store that behaves like an unreachable database.
pub struct FailingStore;

#[async_trait]
impl HistoryStore for FailingStore {
    async fn append(&self, _document: Document) -> Result<RecordId, HistoryError> {
        Err(HistoryError::StorageUnavailable("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<StoredRecord>, HistoryError> {
        Err(HistoryError::StorageUnavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), HistoryError> {
        Err(HistoryError::StorageUnavailable("connection refused".into()))
    }
}
