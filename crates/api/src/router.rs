//! Application router and its middleware stack.
//!
//! The binary and the integration tests both call [`build_app_router`], so a
//! test request passes through exactly the layers a real one does.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{CorsOrigins, ServerConfig};
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id, generated when the client sends none.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `/health` at the root, the todo API under `/api`, wrapped in middleware.
///
/// Layers run outermost first: CORS, request id, tracing, request id echo,
/// timeout, panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // CORS is applied as its own outermost `Router::layer` below: it needs a
    // `Default` response body, which the trace layer's body type lacks.
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(middleware)
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for browser clients of the todo API.
///
/// The API is unauthenticated, so no credentials are allowed and only
/// `Content-Type` needs to cross origins. The request id is exposed so
/// browser clients can quote it when reporting failures.
///
/// Panics at startup if a configured origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().map(|o| {
            o.parse::<HeaderValue>()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(Duration::from_secs(3600))
}
