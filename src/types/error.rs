//! Error types for the activity index.

use thiserror::Error;

/// All errors that can occur in the activity index.
#[derive(Error, Debug)]
pub enum ActivityError {
    /// No entry is indexed under the identifier's hash.
    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// Activity log capacity must hold at least one label.
    #[error("Invalid activity log capacity: {0}")]
    InvalidCapacity(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed replay script line.
    #[error("Malformed operation on line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for activity index operations.
pub type ActivityResult<T> = Result<T, ActivityError>;
