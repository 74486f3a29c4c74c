use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl CoreError {
    /// `NotFound` for the todo with the given id.
    pub fn todo_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Todo",
            id: id.into(),
        }
    }
}
