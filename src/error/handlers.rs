//! Error handlers
//!
//! Maps storage errors onto HTTP responses and logs them with context.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

use crate::error::types::StorageError;

/// Log a failed request
pub fn handle_error(err: &StorageError) {
    error!("File store error: {}", err);
}

/// Convert error to HTTP status code
pub fn error_to_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::SourceNotFound(_) => StatusCode::NOT_FOUND,
        StorageError::FileNotFound(_) => StatusCode::NOT_FOUND,
        StorageError::InvalidFilename(_) => StatusCode::NOT_FOUND,
        StorageError::DownloadFailed { .. } => StatusCode::BAD_REQUEST,
        StorageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing message; internal detail stays in the log
pub fn client_message(err: &StorageError) -> &'static str {
    match err {
        StorageError::SourceNotFound(_) => "Source file not found",
        StorageError::FileNotFound(_) | StorageError::InvalidFilename(_) => "File not found",
        StorageError::DownloadFailed { .. } => "Failed to download file",
        StorageError::Io(_) => "Failed to store file",
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        handle_error(&self);

        let status = error_to_status(&self);
        let body = json!({
            "statusCode": status.as_u16(),
            "message": client_message(&self),
        });

        (status, Json(body)).into_response()
    }
}
