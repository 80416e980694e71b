//! Error types for QuillDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;

/// Unified error type for QuillDB operations
#[derive(Debug, Error)]
pub enum QuillError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("storage root unavailable: {}: {source}", .path.display())]
    StorageRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Document Errors
    // -------------------------------------------------------------------------
    #[error("no document at {} (table was never created)", .path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("corrupt document at {}: {reason}", .path.display())]
    CorruptDocument { path: PathBuf, reason: String },

    #[error("failed to write document at {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid seed record: {0}")]
    InvalidSeed(String),
}
