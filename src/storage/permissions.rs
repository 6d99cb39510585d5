//! File permissions
//!
//! Stored files are made world read/write so co-located processes sharing
//! the volume can use them.

use std::io;
use std::path::Path;

/// Mode applied to files shared with other consumers of the volume
pub const SHARED_FILE_MODE: u32 = 0o666;

/// Set the shared read/write mode on `path`
#[cfg(unix)]
pub async fn make_shared(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(SHARED_FILE_MODE)).await
}

#[cfg(not(unix))]
pub async fn make_shared(path: &Path) -> io::Result<()> {
    let mut permissions = tokio::fs::metadata(path).await?.permissions();
    permissions.set_readonly(false);
    tokio::fs::set_permissions(path, permissions).await
}

/// Permission bits of `path`
#[cfg(unix)]
pub async fn file_mode(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    Ok(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
pub async fn file_mode(path: &Path) -> io::Result<u32> {
    let metadata = tokio::fs::metadata(path).await?;
    Ok(if metadata.permissions().readonly() { 0o444 } else { SHARED_FILE_MODE })
}
