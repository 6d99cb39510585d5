//! Configuration management for the file store
//!
//! Values are read once at startup from built-in defaults, an optional
//! `config.toml` and the process environment, then shared read-only.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STORAGE_DIR: &str = "/app/storage";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002";

/// Complete service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    // ═══ STORAGE (Environment: STORAGE_DIR, BASE_URL) ═══
    /// Root directory under which every stored file lives
    pub storage_dir: String,

    /// Externally reachable prefix used to build file access URLs
    pub base_url: String,

    // ═══ NETWORK (Environment: BIND_ADDRESS, PORT) ═══
    /// IP address the HTTP listener binds to
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Timeout applied to every download request
    /// Environment: DOWNLOAD_TIMEOUT_SECS
    pub download_timeout_secs: u64,
}

impl StorageConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Environment::default().try_parsing(true))
    }

    /// Load configuration using the given environment source
    pub fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("storage_dir", DEFAULT_STORAGE_DIR)?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 3002_i64)?
            .set_default("download_timeout_secs", 30_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(environment)
            .build()?;

        let mut config: StorageConfig = settings.try_deserialize()?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration rooted at `storage_dir` with default network settings
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            storage_dir: storage_dir.into().to_string_lossy().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: 3002,
            download_timeout_secs: 30,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_dir.is_empty() {
            return Err(ConfigError::Message("storage_dir cannot be empty".into()));
        }

        if self.base_url.is_empty() {
            return Err(ConfigError::Message("base_url cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.download_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "download_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get storage root as PathBuf
    pub fn storage_root(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }

    /// Get bind address and port as socket address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Externally reachable URL for a stored file name
    pub fn file_url(&self, file_name: &str) -> String {
        format!("{}/files/{}", self.base_url, file_name)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}
