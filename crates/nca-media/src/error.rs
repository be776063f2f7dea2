//! Error types for media operations.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur during processor setup or processing.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("{0}")]
    ProcessingFailed(String),
}

impl MediaError {
    pub fn initialization_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    pub fn processing_failed(msg: impl Into<String>) -> Self {
        Self::ProcessingFailed(msg.into())
    }
}
