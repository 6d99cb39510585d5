use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::StorageConfig;
use crate::error::ServerError;
use crate::http::router;
use crate::storage::FileStore;
use crate::storage::filesystem::ensure_directory;

pub struct Server {
    store: FileStore,
    listener: TcpListener,
}

impl Server {
    /// Prepares the storage root, builds the file store and binds the listener.
    ///
    /// Any failure here is fatal to startup; nothing is retried.
    pub async fn new(config: StorageConfig) -> Result<Self, ServerError> {
        let config = Arc::new(config);
        let root = config.storage_root();

        ensure_directory(&root).map_err(|source| ServerError::StorageRoot {
            path: root.display().to_string(),
            source,
        })?;
        info!("Storage root directory: {}", root.display());

        let store = FileStore::new(Arc::clone(&config))?;

        let address = config.listen_socket();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;
        info!("Server bound to {}", address);

        Ok(Self { store, listener })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Serves requests until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        info!(
            "Starting file store on {} (public URL {})",
            self.listener
                .local_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".into()),
            self.store.config().base_url
        );

        axum::serve(self.listener, router(self.store))
            .await
            .map_err(ServerError::Serve)
    }
}
