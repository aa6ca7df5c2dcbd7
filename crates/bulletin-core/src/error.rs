//! Error types for bulletin-core

use thiserror::Error;

/// Result type alias using bulletin-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bulletin-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
