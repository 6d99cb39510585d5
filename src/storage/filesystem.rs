//! File system operations
//!
//! Storage root management and existence checks.

use log::info;
use std::io::Result;
use std::path::Path;
use uuid::Uuid;

/// Create the storage root and any missing parents
///
/// Returns `true` when the directory had to be created.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    info!("Created storage directory {}", path.display());
    Ok(true)
}

/// Check if a regular file exists at `path`
pub async fn file_exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Check if anything exists at `path`
pub async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Fresh unique file name with an optional extension (leading dot included)
pub fn generate_file_name(extension: Option<&str>) -> String {
    format!("{}{}", Uuid::new_v4(), extension.unwrap_or(""))
}
