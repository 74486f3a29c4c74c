//! [`TodoStore`] implementation over the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todos_core::store::{StoreError, TodoStore};
use todos_core::todo::Todo;

use crate::models::todo_item::TodoItem;

/// Column list for `todos` queries.
const COLUMNS: &str = "id, item";

/// PostgreSQL-backed key-value store for todos.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    /// Upsert keyed on `id` via `ON CONFLICT (id) DO UPDATE`.
    async fn put(&self, todo: &Todo) -> Result<(), StoreError> {
        let row = TodoItem::from_todo(todo);
        sqlx::query(
            "INSERT INTO todos (id, item) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET item = EXCLUDED.item",
        )
        .bind(&row.id)
        .bind(&row.item)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        let row = sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;
        row.map(TodoItem::into_todo).transpose()
    }

    async fn scan_all(&self) -> Result<Vec<Todo>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        let rows = sqlx::query_as::<_, TodoItem>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;
        rows.into_iter().map(TodoItem::into_todo).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unavailable)?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map a driver error to a store failure, logging the detail.
fn unavailable(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Todo store query failed");
    StoreError::Unavailable(err.to_string())
}
