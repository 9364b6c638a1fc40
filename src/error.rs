//! Error types for the album renumberer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renumbering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the album renumberer
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read timestamp of {path}: {message}")]
    Timestamp { path: PathBuf, message: String },

    #[error("Failed to rename {from} to {to}: {message}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },
}
