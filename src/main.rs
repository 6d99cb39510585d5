//! Shared File Store - Entry Point
//!
//! Downloads, stores and serves files from a directory shared with other services.

use log::{error, info};
use std::process::ExitCode;

use shared_file_store::error::ServerError;
use shared_file_store::{Server, StorageConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default `info` level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching file store...");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("File store stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = StorageConfig::load()?;
    let server = Server::new(config).await?;
    server.start().await
}
