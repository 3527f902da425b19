//! Error types for medrec-core.

use thiserror::Error;

/// Result type alias using medrec-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for report operations
#[derive(Error, Debug)]
pub enum Error {
    // Backend rejections
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Update failed: {0}")]
    Statement(String),

    #[error("Could not connect to {path}: {reason}")]
    ConnectionFailure { path: String, reason: String },

    #[error("Session is closed")]
    SessionClosed,

    // Console errors
    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a query error from a backend failure
    pub fn query(e: impl std::fmt::Display) -> Self {
        Self::Query(e.to_string())
    }

    /// Create a statement error from a backend failure
    pub fn statement(e: impl std::fmt::Display) -> Self {
        Self::Statement(e.to_string())
    }

    /// Create a connection failure for a database path
    pub fn connection_failure(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::ConnectionFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
