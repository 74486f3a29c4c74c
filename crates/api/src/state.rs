use std::sync::Arc;

use todos_core::TodoService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service shares one store, the rest is behind `Arc`
/// or is already a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Todo lifecycle service bound to the configured store.
    pub todos: TodoService,
    /// Connection pool when the Postgres backend is in use; pinged by `/health`.
    pub pool: Option<todos_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
