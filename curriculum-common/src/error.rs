//! Common error types for the curriculum catalog

use thiserror::Error;

use crate::validation::ValidationReport;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the loader, store gateway and query service
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file or stored column is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source document does not have the expected grouping structure
    #[error("Invalid curriculum format: {0}")]
    Format(String),

    /// One or more course entries failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationReport),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
