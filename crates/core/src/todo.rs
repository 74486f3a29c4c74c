//! Todo entity, request DTOs, and title validation.
//!
//! A [`Todo`] is a self-contained record addressed by its `id`. Only `title`
//! and `completed` are mutable after creation; `id` and `created_at` are fixed
//! once the record exists. Identity (equality and hashing) is the `id` alone.

use std::hash::{Hash, Hasher};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{Timestamp, TodoId};

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters (inclusive).
pub const MAX_TITLE_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A single todo record as persisted in the key-value store.
///
/// Serialized keys follow the logical record shape:
/// `id`, `title`, `completed`, `createdAt`, `updatedAt`. There is no
/// `Deserialize`: records come from [`Todo::new`] or, for stored data,
/// [`Todo::from_parts`] after the store has checked every field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Todo {
    /// Build a fresh record: not completed, `created_at == updated_at == now`.
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassemble a record from stored fields without touching timestamps.
    pub fn from_parts(
        id: TodoId,
        title: String,
        completed: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Refresh `updated_at` to now.
    ///
    /// The new value is always strictly later than the previous one: if the
    /// clock has not moved past the stored timestamp, it advances by one
    /// microsecond instead.
    pub fn touch_updated_at(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::microseconds(1)
        };
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Todo {}

impl Hash for Todo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Draft for creating a todo. Missing fields are filled in server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodo {
    /// Client-chosen id. A fresh UUID is generated when absent or blank.
    pub id: Option<TodoId>,
    pub title: Option<String>,
    /// Defaults to `false`.
    pub completed: Option<bool>,
}

impl NewTodo {
    /// Draft with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Patch applied by `update`.
///
/// `title` replaces the stored title only when present. `completed` always
/// overwrites the stored value; a body without it, or with `null`, resets
/// the todo to pending.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub completed: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Aggregate counts over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TodoCounts {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a todo title: present, non-blank after trimming, and at most
/// [`MAX_TITLE_LEN`] characters.
///
/// The length is measured on the untrimmed value.
pub fn validate_title(title: Option<&str>) -> Result<(), CoreError> {
    let title = match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return Err(CoreError::Validation(
                "Todo title cannot be null or empty".to_string(),
            ))
        }
    };

    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Todo title cannot exceed {MAX_TITLE_LEN} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a complete record (used after merging an update).
pub fn validate_todo(todo: Option<&Todo>) -> Result<(), CoreError> {
    let todo =
        todo.ok_or_else(|| CoreError::Validation("Todo cannot be null".to_string()))?;
    validate_title(Some(todo.title()))
}
