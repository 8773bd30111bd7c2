//! Error types for the validation-model layer.
//!
//! These describe failures of internal helpers only. The rule-engine-facing
//! entity surface is total: malformed input degrades to empty link results
//! and is never reported as an error.

use thiserror::Error;

/// Primary error type for model extraction operations.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },

    #[error("PDF object not found: {0}")]
    ObjectNotFound(u32),

    #[error("circular indirect reference through object {0}")]
    CircularReference(u32),
}

/// Convenience Result type alias for ModelError.
pub type Result<T> = std::result::Result<T, ModelError>;
