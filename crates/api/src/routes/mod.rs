pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// All API routes, mounted under `/api` by the router builder.
///
/// ```text
/// /todos   todo collection (see todos::router)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todos::router())
}
