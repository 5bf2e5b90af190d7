//! Error types for credsweep.
//!
//! Per-file problems (unreadable, malformed, oversized) are not errors;
//! they degrade to zero findings for that file. Only fatal setup
//! problems surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
