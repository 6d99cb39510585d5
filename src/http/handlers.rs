//! Request handlers for the file store endpoints.
//!
//! Each handler adapts one HTTP request to a single file store call and
//! lets [`StorageError`] map failures onto status codes.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::StorageError;
use crate::http::responses::file_response;
use crate::storage::{DownloadResult, FileStore, StoreResult};

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_path: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// `POST /download`: fetch a remote file into the store.
///
/// # Returns
///
/// * `{path}` of the stored file, or 400 when the fetch fails.
pub async fn download(
    State(store): State<FileStore>,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<DownloadResult>, StorageError> {
    let result = store.download(&request.url).await?;
    Ok(Json(result))
}

/// `POST /upload`: copy a local file into the store.
///
/// # Returns
///
/// * `{url}` of the stored file, 404 when the source is missing, 500 otherwise.
pub async fn upload(
    State(store): State<FileStore>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<StoreResult>, StorageError> {
    let source = PathBuf::from(&request.file_path);
    let result = store
        .store(&source, request.file_name.as_deref())
        .await?;
    Ok(Json(result))
}

/// `GET /files/{filename}`: serve a stored file with an inferred content type.
pub async fn serve_file(
    State(store): State<FileStore>,
    Path(file_name): Path<String>,
) -> Result<Response, StorageError> {
    let path = store.resolve_path(&file_name).await?;
    file_response(&path, &file_name).await
}
