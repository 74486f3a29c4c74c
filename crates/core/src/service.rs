//! Todo lifecycle service.
//!
//! All business rules live here: id checks, existence checks, title
//! validation, partial-update merging, and timestamp refresh. The repository
//! underneath enforces none of them.

use uuid::Uuid;

use crate::error::CoreError;
use crate::store::TodoRepository;
use crate::todo::{validate_title, validate_todo, NewTodo, Todo, TodoCounts, TodoPatch};

/// Create, read, update, delete, toggle, search and count todos.
#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepository,
}

impl TodoService {
    pub fn new(repo: TodoRepository) -> Self {
        Self { repo }
    }

    /// Validate a draft and store it as a new record.
    ///
    /// Assigns a UUID when the draft carries no id (or a blank one), stamps
    /// `created_at`/`updated_at` with the same instant, and defaults
    /// `completed` to `false`. A draft with an existing id overwrites it.
    pub async fn create(&self, draft: Option<NewTodo>) -> Result<Todo, CoreError> {
        let draft =
            draft.ok_or_else(|| CoreError::Validation("Todo cannot be null".to_string()))?;
        validate_title(draft.title.as_deref())?;

        let id = match draft.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        let mut todo = Todo::new(id, draft.title.unwrap_or_default());
        todo.set_completed(draft.completed.unwrap_or(false));

        let todo = self.repo.save(todo).await?;
        tracing::debug!(todo_id = %todo.id(), "Todo stored");
        Ok(todo)
    }

    /// Look up a todo. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Todo>, CoreError> {
        require_id(id)?;
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Todo>, CoreError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn list_by_status(&self, completed: bool) -> Result<Vec<Todo>, CoreError> {
        Ok(self.repo.find_by_completed(completed).await?)
    }

    /// Case-insensitive title search; a missing or blank term lists everything.
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Todo>, CoreError> {
        Ok(self.repo.search_by_title(term).await?)
    }

    /// Merge `patch` into the stored record and persist it.
    ///
    /// `patch.title` replaces the title when present; `patch.completed`
    /// always overwrites. The merged record is re-validated before writing.
    /// Read-then-write without locking: concurrent updates race and the last
    /// write wins.
    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo, CoreError> {
        require_id(id)?;
        let mut todo = self.find_existing(id).await?;

        if let Some(title) = patch.title {
            todo.set_title(title);
        }
        todo.set_completed(patch.completed);

        validate_todo(Some(&todo))?;
        todo.touch_updated_at();
        Ok(self.repo.save(todo).await?)
    }

    /// Flip `completed` and persist. Title is left untouched.
    pub async fn toggle_status(&self, id: &str) -> Result<Todo, CoreError> {
        require_id(id)?;
        let mut todo = self.find_existing(id).await?;

        todo.set_completed(!todo.completed());
        todo.touch_updated_at();
        Ok(self.repo.save(todo).await?)
    }

    /// Delete an existing todo.
    ///
    /// Returns the store's report of whether the record was removed; this can
    /// be `false` if a concurrent caller deleted it after the existence check.
    pub async fn delete(&self, id: &str) -> Result<bool, CoreError> {
        require_id(id)?;
        if !self.repo.exists_by_id(id).await? {
            return Err(CoreError::todo_not_found(id));
        }
        Ok(self.repo.delete_by_id(id).await?)
    }

    /// Remove every todo. Returns how many were removed.
    pub async fn delete_all(&self) -> Result<u64, CoreError> {
        Ok(self.repo.delete_all().await?)
    }

    /// Total, completed and pending counts.
    ///
    /// Computed from one scan so `total == completed + pending` always holds.
    pub async fn counts(&self) -> Result<TodoCounts, CoreError> {
        let todos = self.repo.find_all().await?;
        let total = todos.len() as u64;
        let completed = todos.iter().filter(|t| t.completed()).count() as u64;
        Ok(TodoCounts {
            total,
            completed,
            pending: total - completed,
        })
    }

    async fn find_existing(&self, id: &str) -> Result<Todo, CoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::todo_not_found(id))
    }
}

/// Reject blank identifiers.
fn require_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::InvalidArgument(
            "Todo ID cannot be null or empty".to_string(),
        ));
    }
    Ok(())
}
