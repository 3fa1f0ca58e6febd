//! Error types for priority queue operations.

use thiserror::Error;

/// Errors that can occur during priority queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Candidate is not a mapping, or a field has the wrong type.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// One or more required keys are absent.
    #[error("missing key: {0}")]
    MissingField(String),

    /// Field has the right type but an out-of-range value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Extraction attempted on an empty queue.
    #[error("pop from empty queue")]
    Underflow,
}

/// Result type alias for priority queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
