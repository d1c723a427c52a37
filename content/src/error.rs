//! Error types for blog content operations

use thiserror::Error;

/// Errors that can occur while loading or querying blog content
#[derive(Error, Debug)]
pub enum ContentError {
    /// Error reading a content file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Content failed validation (duplicate or malformed slugs, etc.)
    #[error("Content validation failed: {0}")]
    ValidationError(String),

    /// The content source could not deliver data
    #[error("Content source error: {0}")]
    SourceError(String),

    /// Requested content does not exist
    #[error("Content not found: {0}")]
    NotFoundError(String),
}
