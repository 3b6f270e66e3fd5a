use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to export CSV to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("Invalid view message: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(String),
}

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("Failed to read session data from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Session data at {} is corrupt: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write session data to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize session data: {0}")]
    Serialize(serde_json::Error),
}
