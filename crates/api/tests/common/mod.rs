#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tutorials_api::config::ServerConfig;
use tutorials_api::router::build_app_router;
use tutorials_api::state::AppState;
use tutorials_core::types::DbId;
use tutorials_db::models::tutorial::{Tutorial, TutorialRecord};
use tutorials_db::store::{MemoryTutorialStore, StoreError, TutorialStore};

pub const TEST_ORIGIN: &str = "http://localhost:8081";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:8081` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static(TEST_ORIGIN)],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app(store: Arc<dyn TutorialStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A fresh in-memory store plus an app wired to it.
///
/// The store handle lets tests seed rows or inspect state directly.
pub fn memory_app() -> (Router, Arc<MemoryTutorialStore>) {
    let store = Arc::new(MemoryTutorialStore::new());
    let app = build_test_app(store.clone());
    (app, store)
}

/// Insert a row directly through the store, bypassing the create endpoint.
pub async fn seed(
    store: &MemoryTutorialStore,
    title: &str,
    description: Option<&str>,
    published: bool,
) -> Tutorial {
    store
        .save(TutorialRecord::new(
            title.to_string(),
            description.map(str::to_string),
            published,
        ))
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Failing store double
// ---------------------------------------------------------------------------

/// A store whose every operation fails with a connection-pool timeout.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TutorialStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Tutorial>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        _fragment: &str,
    ) -> Result<Vec<Tutorial>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_published(&self, _published: bool) -> Result<Vec<Tutorial>, StoreError> {
        Err(unavailable())
    }

    async fn save(&self, _record: TutorialRecord) -> Result<Tutorial, StoreError> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
