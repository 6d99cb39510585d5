//! Path validation
//!
//! File name checks and extension inference.

use reqwest::Url;
use std::path::Path;

use crate::error::StorageError;

/// Extension used when a download URL carries none
pub const DEFAULT_DOWNLOAD_EXTENSION: &str = ".jpg";

/// Validate that `name` is a bare file name inside the storage root
pub fn validate_file_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }
    Ok(())
}

/// Extension of the final path component including the leading dot
///
/// Dot-files such as `.env` and names ending in a bare `.` have no extension.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
}

/// Extension inferred from the URL path, ignoring query and fragment
pub fn url_extension(url: &Url) -> String {
    file_extension(Path::new(url.path())).unwrap_or_else(|| DEFAULT_DOWNLOAD_EXTENSION.to_string())
}
