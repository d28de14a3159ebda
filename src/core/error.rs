//! Error types for java-digest
//!
//! This module provides structured error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Errors that can occur while building a digest
#[derive(Error, Debug)]
pub enum DigestError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Root directory not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File content is not text
    #[error("Binary or undecodable content: {path}")]
    Binary { path: PathBuf },

    /// The output artifact could not be created or truncated
    #[error("Cannot initialize output {path}: {source}")]
    OutputInit {
        path: PathBuf,
        #[source]
        source: Box<DigestError>,
    },
}

impl DigestError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DigestError::InvalidConfig {
            message: message.into(),
        }
    }
}
