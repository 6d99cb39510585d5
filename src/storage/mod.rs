//! File system storage management
//!
//! Handles the storage root, file operations, permissions, and name validation.

pub mod filesystem;
pub mod permissions;
pub mod results;
pub mod store;
pub mod validation;

pub use results::{DownloadResult, StoreResult};
pub use store::FileStore;
