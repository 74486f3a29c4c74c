//! Todo domain: entity model, key-value store contract, and lifecycle service.

pub mod error;
pub mod service;
pub mod store;
pub mod todo;
pub mod types;

pub use service::TodoService;
pub use store::{MemoryStore, StoreError, TodoRepository, TodoStore};
