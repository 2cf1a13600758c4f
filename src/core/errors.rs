//! Shared error types for the application

use thiserror::Error;

/// Main error type for contentscope operations
#[derive(Debug, Error)]
pub enum Error {
    /// Request envelope could not be decoded or named an unknown
    /// module/action
    #[error("Envelope error: {0}")]
    Envelope(String),

    /// Input failed validation before reaching an engine
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an envelope error
    pub fn envelope(message: impl Into<String>) -> Self {
        Self::Envelope(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Convenience result type alias
pub type Result<T> = std::result::Result<T, Error>;
