//! Stored representation of a todo in the `todos` table.
//!
//! The mapping between [`Todo`] and the JSONB document is written out by hand
//! so the persisted key names stay fixed regardless of how the domain struct
//! evolves:
//!
//! ```text
//! { "id": string, "title": string, "completed": bool,
//!   "createdAt": RFC 3339, "updatedAt": RFC 3339 }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use todos_core::store::StoreError;
use todos_core::todo::Todo;
use todos_core::types::Timestamp;

/// Document key names.
pub const KEY_ID: &str = "id";
pub const KEY_TITLE: &str = "title";
pub const KEY_COMPLETED: &str = "completed";
pub const KEY_CREATED_AT: &str = "createdAt";
pub const KEY_UPDATED_AT: &str = "updatedAt";

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow)]
pub struct TodoItem {
    /// Partition key.
    pub id: String,
    pub item: Json<Value>,
}

impl TodoItem {
    /// Build the row to write for `todo`.
    pub fn from_todo(todo: &Todo) -> Self {
        let item = json!({
            KEY_ID: todo.id(),
            KEY_TITLE: todo.title(),
            KEY_COMPLETED: todo.completed(),
            KEY_CREATED_AT: format_timestamp(todo.created_at()),
            KEY_UPDATED_AT: format_timestamp(todo.updated_at()),
        });
        Self {
            id: todo.id().to_string(),
            item: Json(item),
        }
    }

    /// Map a stored row back to a [`Todo`].
    ///
    /// Fails with [`StoreError::Malformed`] if a field is missing or has the
    /// wrong type, or if the document id disagrees with the key column.
    pub fn into_todo(self) -> Result<Todo, StoreError> {
        let Json(item) = self.item;
        let doc = item.as_object().ok_or_else(|| {
            StoreError::Malformed(format!("record {} is not a JSON object", self.id))
        })?;

        let doc_id = string_field(doc, KEY_ID, &self.id)?;
        if doc_id != self.id {
            return Err(StoreError::Malformed(format!(
                "record key {} does not match document id {doc_id}",
                self.id
            )));
        }

        let title = string_field(doc, KEY_TITLE, &self.id)?;
        let completed = doc
            .get(KEY_COMPLETED)
            .and_then(Value::as_bool)
            .ok_or_else(|| missing(KEY_COMPLETED, &self.id))?;
        let created_at = timestamp_field(doc, KEY_CREATED_AT, &self.id)?;
        let updated_at = timestamp_field(doc, KEY_UPDATED_AT, &self.id)?;

        Ok(Todo::from_parts(
            self.id,
            title.to_string(),
            completed,
            created_at,
            updated_at,
        ))
    }
}

fn format_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn string_field<'a>(
    doc: &'a Map<String, Value>,
    key: &str,
    record: &str,
) -> Result<&'a str, StoreError> {
    doc.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(key, record))
}

fn timestamp_field(
    doc: &Map<String, Value>,
    key: &str,
    record: &str,
) -> Result<Timestamp, StoreError> {
    let raw = string_field(doc, key, record)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Malformed(format!("record {record}: bad {key} '{raw}': {e}")))
}

fn missing(key: &str, record: &str) -> StoreError {
    StoreError::Malformed(format!("record {record}: missing or invalid field '{key}'"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn row(id: &str, item: Value) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            item: Json(item),
        }
    }

    #[test]
    fn document_uses_logical_key_names() {
        let todo = Todo::new("abc", "Buy milk");
        let TodoItem { id, item } = TodoItem::from_todo(&todo);

        assert_eq!(id, "abc");
        let doc = item.0.as_object().unwrap();
        let mut keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["completed", "createdAt", "id", "title", "updatedAt"]
        );
        assert_eq!(doc["title"], "Buy milk");
        assert_eq!(doc["completed"], false);
    }

    #[test]
    fn stored_record_maps_back_unchanged() {
        let mut todo = Todo::new("abc", "Buy milk");
        todo.set_completed(true);
        todo.touch_updated_at();

        let back = TodoItem::from_todo(&todo).into_todo().unwrap();
        assert_eq!(back.id(), todo.id());
        assert_eq!(back.title(), todo.title());
        assert_eq!(back.completed(), todo.completed());
        assert_eq!(back.created_at(), todo.created_at());
        assert_eq!(back.updated_at(), todo.updated_at());
    }

    #[test]
    fn missing_field_is_malformed() {
        let item = json!({
            "id": "abc",
            "completed": false,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z",
        });
        assert_matches!(row("abc", item).into_todo(), Err(StoreError::Malformed(_)));
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let item = json!({
            "id": "abc",
            "title": "x",
            "completed": false,
            "createdAt": "yesterday",
            "updatedAt": "2025-01-01T00:00:00Z",
        });
        assert_matches!(row("abc", item).into_todo(), Err(StoreError::Malformed(_)));
    }

    #[test]
    fn key_mismatch_is_malformed() {
        let todo = Todo::new("abc", "x");
        let TodoItem { item, .. } = TodoItem::from_todo(&todo);
        assert_matches!(row("other", item.0).into_todo(), Err(StoreError::Malformed(_)));
    }

    #[test]
    fn non_object_is_malformed() {
        assert_matches!(
            row("abc", json!(["not", "a", "record"])).into_todo(),
            Err(StoreError::Malformed(_))
        );
    }
}
