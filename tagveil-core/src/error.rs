//! Error types for tagveil-core

use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unrecognized policy mode string
    #[error("Invalid policy mode: {0}")]
    InvalidMode(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Create an invalid mode error
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        CoreError::InvalidMode(mode.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CoreError::InvalidConfig(msg.into())
    }
}
