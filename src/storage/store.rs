//! File store
//!
//! Downloads remote files, copies local files into the storage root and
//! resolves stored files by name.

use log::{error, info, warn};
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::storage::filesystem::{file_exists, generate_file_name, path_exists};
use crate::storage::permissions::{file_mode, make_shared};
use crate::storage::results::{DownloadResult, StoreResult};
use crate::storage::validation::{file_extension, url_extension, validate_file_name};

/// Flat file store rooted at the configured storage directory
#[derive(Clone)]
pub struct FileStore {
    config: Arc<StorageConfig>,
    client: Client,
}

impl FileStore {
    /// Create a store with an HTTP client honouring the configured download timeout
    pub fn new(config: Arc<StorageConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.download_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn root(&self) -> PathBuf {
        self.config.storage_root()
    }

    /// Fetch `url` and persist the body under a freshly generated name
    pub async fn download(&self, url: &str) -> Result<DownloadResult, StorageError> {
        let parsed = Url::parse(url).map_err(|e| StorageError::download_failed(url, e))?;

        let body = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| StorageError::download_failed(url, e))?
            .bytes()
            .await
            .map_err(|e| StorageError::download_failed(url, e))?;

        let file_name = generate_file_name(Some(&url_extension(&parsed)));
        let file_path = self.root().join(&file_name);

        info!("Downloading file from {} to {}", url, file_path.display());
        tokio::fs::write(&file_path, &body)
            .await
            .map_err(|e| StorageError::download_failed(url, e))?;
        make_shared(&file_path)
            .await
            .map_err(|e| StorageError::download_failed(url, e))?;

        info!(
            "File downloaded successfully to {} ({} bytes)",
            file_path.display(),
            body.len()
        );

        if file_exists(&file_path).await {
            info!("Verified file exists at {}", file_path.display());
        } else {
            error!("File was not written properly to {}", file_path.display());
        }

        Ok(DownloadResult {
            path: file_path.to_string_lossy().to_string(),
        })
    }

    /// Copy a local file into the store
    ///
    /// An explicit `dest_name` overwrites any stored file of the same name.
    pub async fn store(
        &self,
        source_path: &Path,
        dest_name: Option<&str>,
    ) -> Result<StoreResult, StorageError> {
        if !path_exists(source_path).await {
            return Err(StorageError::SourceNotFound(
                source_path.to_string_lossy().to_string(),
            ));
        }

        let dest_file_name = match dest_name.filter(|name| !name.is_empty()) {
            Some(name) => {
                validate_file_name(name)?;
                name.to_string()
            }
            None => generate_file_name(file_extension(source_path).as_deref()),
        };
        let dest_path = self.root().join(&dest_file_name);

        info!(
            "Storing {} as {}",
            source_path.display(),
            dest_path.display()
        );
        tokio::fs::copy(source_path, &dest_path).await?;

        Ok(StoreResult {
            url: self.config.file_url(&dest_file_name),
        })
    }

    /// Absolute path of a stored file
    pub async fn resolve_path(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        validate_file_name(file_name)?;

        let file_path = self.root().join(file_name);
        if !file_exists(&file_path).await {
            return Err(StorageError::FileNotFound(file_name.to_string()));
        }
        Ok(file_path)
    }

    /// Prepare a file for a second consumer reading the same shared mount
    ///
    /// No data is copied: the file is only checked and made world read/write.
    /// Returns the path the second consumer is expected to read.
    pub async fn propagate(&self, source_path: &Path) -> Result<PathBuf, StorageError> {
        let file_name = source_path
            .file_name()
            .ok_or_else(|| StorageError::InvalidFilename(source_path.display().to_string()))?;
        let shared_path = self.root().join(file_name);

        info!(
            "Ensuring file is accessible to shared consumer: {} -> {}",
            source_path.display(),
            shared_path.display()
        );

        if !file_exists(source_path).await {
            warn!("Cannot propagate missing file {}", source_path.display());
            return Err(StorageError::SourceNotFound(
                source_path.to_string_lossy().to_string(),
            ));
        }

        let mode = file_mode(source_path).await?;
        info!("File permissions: {:o}", mode);

        make_shared(source_path).await?;
        info!("File is ready for shared consumer at {}", source_path.display());

        Ok(shared_path)
    }
}
