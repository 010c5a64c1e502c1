use std::fs;
use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<!doctype html><h1>Highsky</h1>").unwrap();
    fs::write(dir.path().join("styles.css"), "body { margin: 0; }\n").unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/portfolio_client_bg.wasm"), [0x00_u8, 0x61, 0x73, 0x6d]).unwrap();
    dir
}

async fn get_path(root: &Path, uri: &str) -> (StatusCode, Vec<u8>) {
    let app = app(&ServerConfig::local(root.to_path_buf()));
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_is_ok() {
    let dir = site();
    let (status, _) = get_path(dir.path(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index_html() {
    let dir = site();
    let (status, body) = get_path(dir.path(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<!doctype html><h1>Highsky</h1>");
}

#[tokio::test]
async fn static_assets_are_served_unchanged() {
    let dir = site();
    let (status, body) = get_path(dir.path(), "/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, fs::read(dir.path().join("styles.css")).unwrap());
}

#[tokio::test]
async fn wasm_bundle_is_served_under_pkg() {
    let dir = site();
    let (status, body) = get_path(dir.path(), "/pkg/portfolio_client_bg.wasm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, [0x00_u8, 0x61, 0x73, 0x6d]);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let dir = site();
    let (status, _) = get_path(dir.path(), "/cv.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
