//! Cross-cutting error types for the grader.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `RemoteError`) are defined in
//! their respective crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any grader crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Record not found: {record_type} {id}")]
    NotFound { record_type: String, id: String },

    /// Data failed validation (empty name, no problems, duplicates).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Lookup miss for one record kind and id.
    #[must_use]
    pub fn not_found(record_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            record_type: record_type.to_string(),
            id: id.to_string(),
        }
    }
}
