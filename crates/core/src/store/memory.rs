//! In-process [`TodoStore`] backed by a `HashMap` behind an async `RwLock`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::todo::Todo;
use crate::types::TodoId;

/// Volatile key-value backend. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<TodoId, Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn put(&self, todo: &Todo) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(todo.id().to_string(), todo.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn scan_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(id).is_some())
    }
}
