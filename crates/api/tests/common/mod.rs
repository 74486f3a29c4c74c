#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use todos_core::{MemoryStore, TodoRepository, TodoService, TodoStore};
use tower::ServiceExt;

use todos_api::config::{CorsOrigins, ServerConfig, StoreBackend};
use todos_api::router::build_app_router;
use todos_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Build the full application router over the given store.
pub fn build_test_app_with_store(store: Arc<dyn TodoStore>) -> Router {
    build_test_app_with(test_config(), store)
}

/// Build the full application router from an explicit config and store.
pub fn build_test_app_with(config: ServerConfig, store: Arc<dyn TodoStore>) -> Router {
    let state = AppState {
        todos: TodoService::new(TodoRepository::new(store)),
        pool: None,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn empty(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, empty(Method::GET, uri)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, empty(Method::DELETE, uri)).await
}

pub async fn patch(app: &Router, uri: &str) -> Response<Body> {
    send(app, empty(Method::PATCH, uri)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, with_json(Method::POST, uri, body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, with_json(Method::PUT, uri, body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a todo through the API and return its `data` object.
pub async fn create_todo(app: &Router, title: &str) -> serde_json::Value {
    let response = post_json(app, "/api/todos", serde_json::json!({ "title": title })).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
