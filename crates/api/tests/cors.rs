mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use todos_api::config::CorsOrigins;
use todos_core::MemoryStore;

use common::{build_test_app, build_test_app_with, send, test_config};

fn cross_origin(method: Method, uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_any_origin_is_allowed_without_credentials() {
    let app = build_test_app();
    let response = send(
        &app,
        cross_origin(Method::GET, "/api/todos", "http://elsewhere.test"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
    assert_eq!(headers[header::ACCESS_CONTROL_EXPOSE_HEADERS], "x-request-id");
}

#[tokio::test]
async fn test_preflight_allows_toggle_and_json_bodies() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/todos/abc/toggle")
        .header(header::ORIGIN, "http://elsewhere.test")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    assert_eq!(allowed, "content-type");
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
}

#[tokio::test]
async fn test_configured_origins_are_echoed_and_others_ignored() {
    let mut config = test_config();
    config.cors_origins = CorsOrigins::List(vec!["http://app.test".to_string()]);
    let app = build_test_app_with(config, Arc::new(MemoryStore::new()));

    let allowed = send(&app, cross_origin(Method::GET, "/api/todos", "http://app.test")).await;
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://app.test"
    );

    let other = send(&app, cross_origin(Method::GET, "/api/todos", "http://evil.test")).await;
    assert_eq!(other.status(), StatusCode::OK);
    assert!(!other
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
