use crate::types::DocId;

/// Domain-level failures shared by the store and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more field rules failed. Holds the joined violation messages.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A path parameter is not a well-formed document identifier.
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: DocId },

    /// The mutation matched nothing or left every document as it was.
    #[error("Unchanged: {0}")]
    Unchanged(String),
}
