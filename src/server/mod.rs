//! Server core functionality
//!
//! Startup of the storage root, file store and HTTP listener.

pub mod core;

pub use self::core::Server;
