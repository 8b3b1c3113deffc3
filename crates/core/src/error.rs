use thiserror::Error;

/// Domain-level error taxonomy shared across crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unrecognized task state: {0:?}")]
    UnrecognizedState(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
