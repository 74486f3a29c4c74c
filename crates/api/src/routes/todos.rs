//! Route definitions for the todo collection, mounted at `/api/todos`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Ids that would collide with the fixed sub-routes below; `create_todo`
/// refuses them.
pub const RESERVED_IDS: [&str; 3] = ["search", "stats", "status"];

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /                    -> list_todos
/// POST   /                    -> create_todo
/// DELETE /                    -> delete_all_todos
/// GET    /search?q=           -> search_todos
/// GET    /stats               -> todo_stats
/// GET    /status/{completed}  -> list_todos_by_status
/// GET    /{id}                -> get_todo
/// PUT    /{id}                -> update_todo
/// DELETE /{id}                -> delete_todo
/// PATCH  /{id}/toggle         -> toggle_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list_todos)
                .post(todos::create_todo)
                .delete(todos::delete_all_todos),
        )
        .route("/search", get(todos::search_todos))
        .route("/stats", get(todos::todo_stats))
        .route("/status/{completed}", get(todos::list_todos_by_status))
        .route(
            "/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/{id}/toggle", patch(todos::toggle_todo))
}
