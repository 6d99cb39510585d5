//! HTTP front door
//!
//! Routes the download, upload and file-serve endpoints onto the file store.

pub mod handlers;
pub mod responses;

use axum::Router;
use axum::routing::{get, post};

use crate::storage::FileStore;

/// Build the service router
pub fn router(store: FileStore) -> Router {
    Router::new()
        .route("/download", post(handlers::download))
        .route("/upload", post(handlers::upload))
        .route("/files/{filename}", get(handlers::serve_file))
        .with_state(store)
}
