//! Key-value persistence contract for todos.
//!
//! Backends implement the four primitives of [`TodoStore`]. Everything else
//! the service needs (status filter, title search, counts, bulk delete) is
//! derived in [`TodoRepository`] by scanning the whole table and filtering in
//! memory, since the backing store has no secondary index.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::todo::Todo;

pub use memory::MemoryStore;

/// Failures reported by a key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or rejected the call.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be mapped back to a [`Todo`].
    #[error("malformed stored record: {0}")]
    Malformed(String),
}

/// Minimal key-value contract over a single table keyed by `id`.
///
/// Implementations must be safe to share between concurrent callers; the
/// service performs no locking of its own.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert or overwrite the record with the same `id`.
    async fn put(&self, todo: &Todo) -> Result<(), StoreError>;

    /// Fetch a record by key. A missing key is `Ok(None)`.
    async fn get(&self, id: &str) -> Result<Option<Todo>, StoreError>;

    /// Return every record. Order is backend-dependent.
    async fn scan_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Remove a record by key, reporting whether it existed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// Read/write access to todos on top of a [`TodoStore`].
///
/// Cheap to clone; all clones share the same backend.
#[derive(Clone)]
pub struct TodoRepository {
    store: Arc<dyn TodoStore>,
}

impl TodoRepository {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Upsert a record and return it.
    pub async fn save(&self, todo: Todo) -> Result<Todo, StoreError> {
        self.store.put(&todo).await?;
        Ok(todo)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        self.store.get(id).await
    }

    pub async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.store.get(id).await?.is_some())
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.store.scan_all().await
    }

    /// Full scan filtered on `completed`.
    pub async fn find_by_completed(&self, completed: bool) -> Result<Vec<Todo>, StoreError> {
        let todos = self.store.scan_all().await?;
        Ok(todos
            .into_iter()
            .filter(|t| t.completed() == completed)
            .collect())
    }

    /// Case-insensitive substring match on the title.
    ///
    /// A missing or blank term returns every record.
    pub async fn search_by_title(&self, term: Option<&str>) -> Result<Vec<Todo>, StoreError> {
        let needle = match term {
            Some(t) if !t.trim().is_empty() => t.to_lowercase(),
            _ => return self.find_all().await,
        };

        let todos = self.store.scan_all().await?;
        Ok(todos
            .into_iter()
            .filter(|t| t.title().to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete_by_id(id).await
    }

    /// Scan and delete every record one key at a time.
    ///
    /// Not atomic: concurrent writers may observe partial completion.
    /// Returns how many records were actually removed.
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let todos = self.store.scan_all().await?;
        let mut removed = 0;
        for todo in &todos {
            if self.store.delete_by_id(todo.id()).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
