//! Handlers for the todo collection.
//!
//! Each handler is a thin adapter: extract arguments, call [`TodoService`],
//! and wrap the result. Business rules and error kinds come from the service.
//!
//! [`TodoService`]: todos_core::TodoService

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use todos_core::error::CoreError;
use todos_core::todo::{NewTodo, TodoPatch};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::routes::todos::RESERVED_IDS;
use crate::state::AppState;

/// Query parameters for `GET /api/todos/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Case-insensitive title fragment. Missing or blank lists everything.
    pub q: Option<String>,
}

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.todos.list_all().await?;
    Ok(Json(DataResponse { data: todos }))
}

/// POST /api/todos
///
/// A `null` body is rejected as a validation error, as is a client id that
/// would be shadowed by one of the fixed sub-routes.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Option<NewTodo>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    if let Some(id) = input.as_ref().and_then(|draft| draft.id.as_deref()) {
        if RESERVED_IDS.contains(&id) {
            return Err(CoreError::Validation(format!(
                "Todo id '{id}' is reserved and cannot be used"
            ))
            .into());
        }
    }
    let todo = state.todos.create(input).await?;

    tracing::info!(todo_id = %todo.id(), "Todo created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// DELETE /api/todos
pub async fn delete_all_todos(State(state): State<AppState>) -> AppResult<StatusCode> {
    let removed = state.todos.delete_all().await?;

    tracing::info!(removed, "All todos deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = state
        .todos
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::todo_not_found(id))?;

    Ok(Json(DataResponse { data: todo }))
}

/// PUT /api/todos/{id}
///
/// `title` is optional; `completed` always overwrites and defaults to `false`.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let todo = state.todos.update(&id, patch).await?;

    tracing::info!(todo_id = %id, completed = todo.completed(), "Todo updated");

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.todos.delete(&id).await? {
        // Removed by someone else between the existence check and the delete.
        return Err(CoreError::todo_not_found(id).into());
    }

    tracing::info!(todo_id = %id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/todos/{id}/toggle
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.toggle_status(&id).await?;

    tracing::info!(todo_id = %id, completed = todo.completed(), "Todo toggled");

    Ok(Json(DataResponse { data: todo }))
}

/// GET /api/todos/status/{completed}
pub async fn list_todos_by_status(
    State(state): State<AppState>,
    Path(completed): Path<bool>,
) -> AppResult<impl IntoResponse> {
    let todos = state.todos.list_by_status(completed).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// GET /api/todos/search?q=
pub async fn search_todos(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let todos = state.todos.search(params.q.as_deref()).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// GET /api/todos/stats
pub async fn todo_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = state.todos.counts().await?;
    Ok(Json(DataResponse { data: counts }))
}
