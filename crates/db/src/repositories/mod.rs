//! Repository layer.
//!
//! Each repository implements a storage trait from `todos-core` on top of a
//! shared `PgPool`.

pub mod todo_repo;

pub use todo_repo::PgTodoStore;
