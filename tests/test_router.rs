//! Tests for mapping request paths onto files

use docserve::http::response::{Response, StatusCode};
use docserve::site::files::{self, FileError};
use docserve::site::FileRouter;
use tempfile::TempDir;

fn site() -> (TempDir, FileRouter) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "hello").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
    std::fs::write(dir.path().join("site_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
    std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let router = FileRouter::new(dir.path().to_str().unwrap());
    (dir, router)
}

#[test]
fn test_resolve_is_plain_concatenation() {
    let router = FileRouter::new("docs");

    assert_eq!(router.resolve("/index.html").to_str(), Some("docs/index.html"));
    assert_eq!(router.resolve("/../secret").to_str(), Some("docs/../secret"));
    assert_eq!(router.doc_root(), "docs");
}

#[tokio::test]
async fn test_route_existing_file() {
    let (_dir, router) = site();

    let response = router.route("/index.html").await;
    assert_eq!(response, Response::ok("text/html", b"hello".to_vec()));
}

#[tokio::test]
async fn test_route_home_matches_index() {
    let (_dir, router) = site();

    let home = router.route("/").await;
    let index = router.route("/index.html").await;
    assert_eq!(home, index);
    assert_eq!(home.status, StatusCode::Ok);
}

#[tokio::test]
async fn test_route_mime_by_extension() {
    let (_dir, router) = site();

    assert_eq!(router.route("/app.js").await.content_type, "text/javascript");
    assert_eq!(router.route("/site_bg.wasm").await.content_type, "application/wasm");
    assert_eq!(router.route("/style.css").await.content_type, "text/css");
}

#[tokio::test]
async fn test_route_returns_raw_bytes() {
    let (_dir, router) = site();

    let response = router.route("/site_bg.wasm").await;
    assert_eq!(&response.body[..], &[0u8, 97, 115, 109]);
}

#[tokio::test]
async fn test_route_missing_file_is_not_found() {
    let (_dir, router) = site();

    let response = router.route("/missing.png").await;
    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(&response.body[..], b"Not Found");
}

#[tokio::test]
async fn test_route_home_without_index_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = FileRouter::new(dir.path().to_str().unwrap());

    assert_eq!(router.route("/").await, Response::not_found());
}

#[tokio::test]
async fn test_route_directory_is_internal_error() {
    let (_dir, router) = site();

    let response = router.route("/sub").await;
    assert_eq!(response, Response::internal_error());
}

#[tokio::test]
async fn test_read_all_classifies_errors() {
    let (dir, _router) = site();

    let err = files::read_all(dir.path().join("nope.html")).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, FileError::NotFound(_)));

    let err = files::read_all(dir.path().join("sub")).await.unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, FileError::Other { .. }));

    let bytes = files::read_all(dir.path().join("index.html")).await.unwrap();
    assert_eq!(bytes, b"hello");
}
