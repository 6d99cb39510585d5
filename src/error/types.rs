//! Error types
//!
//! Defines the storage error taxonomy shared by the file store and the HTTP front door.

use std::io;
use thiserror::Error;

/// File store errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Caller-supplied source path for a copy-in does not exist
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Name is not a bare file name (separators, `..`, empty)
    #[error("Invalid file name: {0:?}")]
    InvalidFilename(String),

    #[error("Download from {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    pub fn download_failed(url: &str, reason: impl ToString) -> Self {
        StorageError::DownloadFailed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Startup errors; any of these terminates the process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to prepare storage root {path}: {source}")]
    StorageRoot { path: String, source: io::Error },

    #[error("Failed to bind to {address}: {source}")]
    Bind { address: String, source: io::Error },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Serve(io::Error),
}
