//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use user_api_client::{ClientConfig, UserApiClient};
use user_api_server::{create_router, AppState};
use user_core::UserRepository;
use user_storage::InMemoryUserStore;

/// Router over a fresh store, plus a handle on that store
pub fn create_test_app(reset_enabled: bool) -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    let app = create_router(AppState::new(store.clone()), reset_enabled);
    (app, store)
}

/// Router over an arbitrary repository implementation
pub fn create_app_with_store(store: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(store), true)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, "application/json", serde_json::to_string(body).unwrap())
}

pub fn post_raw(uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

/// Send a request and decode the JSON body (`Value::Null` for empty bodies)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

/// Serve the app on an ephemeral local port and return a client for it
pub async fn spawn_server(reset_enabled: bool) -> UserApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::in_memory(), reset_enabled);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    UserApiClient::new(ClientConfig::new(format!("http://{addr}"))).unwrap()
}

/// Test user data
pub mod fixtures {
    pub const JOHN_NAME: &str = "John Doe";
    pub const JOHN_EMAIL: &str = "john.doe@example.com";

    pub const JANE_NAME: &str = "Jane Smith";
    pub const JANE_EMAIL: &str = "jane.smith@example.com";

    pub fn john() -> serde_json::Value {
        serde_json::json!({ "name": JOHN_NAME, "email": JOHN_EMAIL })
    }

    pub fn jane() -> serde_json::Value {
        serde_json::json!({ "name": JANE_NAME, "email": JANE_EMAIL })
    }
}
