pub mod config;
pub mod error;
pub mod http;
pub mod server;
pub mod storage;

pub use config::StorageConfig;
pub use server::Server;
pub use storage::FileStore;
