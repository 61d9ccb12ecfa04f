//! Policy error types

use thiserror::Error;

/// Result type alias for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Policy-related errors
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Term-relationship index lookup failed
    #[error("Term index lookup failed: {message}")]
    IndexLookup { message: String },
}

impl PolicyError {
    /// Create an index lookup error
    pub fn index_lookup(message: impl Into<String>) -> Self {
        Self::IndexLookup {
            message: message.into(),
        }
    }
}
