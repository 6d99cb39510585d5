//! HTTP response helpers
//!
//! Content-type inference and streamed file bodies.

use axum::body::Body;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use std::path::Path;
use tokio_util::io::ReaderStream;

use crate::error::StorageError;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a stored file, by extension (case-insensitive)
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp4") => "video/mp4",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => OCTET_STREAM,
    }
}

/// Stream the file at `path` as the response body
pub async fn file_response(path: &Path, file_name: &str) -> Result<Response, StorageError> {
    let file = tokio::fs::File::open(path).await?;
    let body = Body::from_stream(ReaderStream::new(file));

    let mut response = body.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(file_name)),
    );
    Ok(response)
}
