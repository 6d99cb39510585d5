//! Storage result types
//!
//! Result structures returned by file store operations, serialized as response bodies.

use serde::Serialize;

/// Result of a download-from-URL operation
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResult {
    /// Absolute path of the stored file
    pub path: String,
}

/// Result of a copy-in operation
#[derive(Debug, Clone, Serialize)]
pub struct StoreResult {
    /// Externally reachable access URL
    pub url: String,
}
