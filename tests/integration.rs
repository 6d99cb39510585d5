use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use shared_file_store::http::router;
use shared_file_store::{FileStore, StorageConfig};

const BASE_URL: &str = "http://files.test:3002";

// Helper to build the app over a fresh storage root
fn setup_app() -> (Router, TempDir) {
    let root = tempfile::tempdir().unwrap();
    let config = StorageConfig::with_storage_dir(root.path(), BASE_URL);
    let store = FileStore::new(Arc::new(config)).unwrap();
    (router(store), root)
}

// Helper to build the app over a storage root that does not exist
fn setup_app_without_root() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::with_storage_dir(dir.path().join("gone"), BASE_URL);
    let store = FileStore::new(Arc::new(config)).unwrap();
    (router(store), dir)
}

// Helper to start a local upstream serving fixed bodies
async fn start_upstream() -> String {
    let upstream = Router::new()
        .route("/img", get(|| async { b"raw-image-bytes".to_vec() }))
        .route("/media/clip.mp4", get(|| async { b"mp4-bytes".to_vec() }))
        .route(
            "/broken.png",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_file(app: Router, name: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder()
        .uri(format!("/files/{name}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

#[tokio::test]
async fn test_download_without_extension_defaults_to_jpg() {
    let upstream = start_upstream().await;
    let (app, root) = setup_app();

    let (status, body) = post_json(app, "/download", json!({ "url": format!("{upstream}/img") })).await;

    assert_eq!(status, StatusCode::OK);
    let path = Path::new(body["path"].as_str().unwrap());
    assert_eq!(path.parent().unwrap(), root.path());
    assert_eq!(path.extension().unwrap(), "jpg");
    assert_eq!(std::fs::read(path).unwrap(), b"raw-image-bytes");
}

#[cfg(unix)]
#[tokio::test]
async fn test_download_keeps_url_extension_and_shares_file() {
    use std::os::unix::fs::PermissionsExt;

    let upstream = start_upstream().await;
    let (app, _root) = setup_app();

    let (status, body) = post_json(
        app,
        "/download",
        json!({ "url": format!("{upstream}/media/clip.mp4?token=abc") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let path = Path::new(body["path"].as_str().unwrap());
    assert_eq!(path.extension().unwrap(), "mp4");
    let mode = std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o666);
}

#[tokio::test]
async fn test_download_failure_is_bad_request() {
    let upstream = start_upstream().await;
    let (app, root) = setup_app();

    let (status, body) =
        post_json(app.clone(), "/download", json!({ "url": format!("{upstream}/broken.png") })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to download file");

    let (status, _) = post_json(app, "/download", json!({ "url": "http://127.0.0.1:1/x.png" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_with_file_name() {
    let (app, root) = setup_app();
    let src = tempfile::tempdir().unwrap();
    let source = src.path().join("a.png");
    std::fs::write(&source, b"png-content").unwrap();

    let (status, body) = post_json(
        app,
        "/upload",
        json!({ "filePath": source.to_str().unwrap(), "fileName": "b.png" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], format!("{BASE_URL}/files/b.png"));
    assert_eq!(std::fs::read(root.path().join("b.png")).unwrap(), b"png-content");
}

#[tokio::test]
async fn test_upload_without_file_name_generates_name() {
    let (app, root) = setup_app();
    let src = tempfile::tempdir().unwrap();
    let source = src.path().join("a.png");
    std::fs::write(&source, b"png-content").unwrap();

    let (status, body) = post_json(app, "/upload", json!({ "filePath": source.to_str().unwrap() })).await;

    assert_eq!(status, StatusCode::OK);
    let url = body["url"].as_str().unwrap();
    let name = url.strip_prefix(&format!("{BASE_URL}/files/")).unwrap();
    assert_ne!(name, "a.png");
    assert!(name.ends_with(".png"));
    assert_eq!(std::fs::read(root.path().join(name)).unwrap(), b"png-content");
}

#[tokio::test]
async fn test_upload_missing_source_is_not_found() {
    let (app, root) = setup_app();

    let (status, body) = post_json(
        app,
        "/upload",
        json!({ "filePath": "/no/such/file.png", "fileName": "b.png" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_serve_file_content_types() {
    let (app, root) = setup_app();
    std::fs::write(root.path().join("pic.png"), b"png").unwrap();
    std::fs::write(root.path().join("data.bin"), b"bin").unwrap();

    let (status, content_type, body) = get_file(app.clone(), "pic.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(body, b"png");

    let (status, content_type, body) = get_file(app, "data.bin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/octet-stream"));
    assert_eq!(body, b"bin");
}

#[tokio::test]
async fn test_serve_missing_file_is_not_found() {
    let (app, _root) = setup_app();

    let (status, _, _) = get_file(app.clone(), "nothing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get_file(app, "..%2Fsecret.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uploaded_file_is_served_back() {
    let (app, _root) = setup_app();
    let src = tempfile::tempdir().unwrap();
    let source = src.path().join("movie.mp4");
    std::fs::write(&source, b"frames").unwrap();

    let (status, _) = post_json(
        app.clone(),
        "/upload",
        json!({ "filePath": source.to_str().unwrap(), "fileName": "movie.mp4" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, content_type, body) = get_file(app, "movie.mp4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("video/mp4"));
    assert_eq!(body, b"frames");
}

#[tokio::test]
async fn test_download_write_failure_is_bad_request() {
    let upstream = start_upstream().await;
    let (app, _dir) = setup_app_without_root();

    let (status, body) = post_json(app, "/download", json!({ "url": format!("{upstream}/img") })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to download file");
}

#[tokio::test]
async fn test_upload_copy_failure_is_internal_error() {
    let (app, _dir) = setup_app_without_root();
    let src = tempfile::tempdir().unwrap();
    let source = src.path().join("a.png");
    std::fs::write(&source, b"png-content").unwrap();

    let (status, body) = post_json(
        app,
        "/upload",
        json!({ "filePath": source.to_str().unwrap(), "fileName": "b.png" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["message"], "Failed to store file");
}

#[tokio::test]
async fn test_upload_directory_source_is_internal_error() {
    let (app, _root) = setup_app();
    let src = tempfile::tempdir().unwrap();

    let (status, body) = post_json(app, "/upload", json!({ "filePath": src.path().to_str().unwrap() })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to store file");
}
