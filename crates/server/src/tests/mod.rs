use std::{io::Cursor, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use header_theme_branding::{BlobStore, LocalStore, MemoryStore, STYLE_KEY};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::Value;
use tower::ServiceExt;

use crate::{router, AppState};

const BOUNDARY: &str = "header-theme-test-boundary";

fn app_with(store: Arc<dyn BlobStore>) -> Router {
    router(AppState::new(store))
}

fn app() -> Router {
    app_with(Arc::new(MemoryStore::new()))
}

fn logo_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(10, 10, |x, _| {
        if x < 8 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field: &str, filename: &str, data: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload-logo")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, filename, data)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn header_style_defaults_before_any_upload() {
    let response = app().oneshot(get("/api/header-style")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["dominantColor"], "#282c34");
    assert_eq!(body["complementaryColor"], "#6495ED");
    assert_eq!(body["logoUrl"], "/api/logo");
    assert_eq!(body["source"], "default");
}

#[tokio::test]
async fn logo_is_not_found_before_any_upload() {
    let response = app().oneshot(get("/api/logo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "Logo not found");
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn upload_then_fetch_style_and_logo() {
    let app = app();
    let png = logo_png();

    let response = app
        .clone()
        .oneshot(upload_request("logo", "logo.png", &png))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Logo uploaded and style generated");
    assert_eq!(body["dominantColor"], "#ff0000");
    assert_eq!(body["complementaryColor"], "#089191");
    assert_eq!(body["source"], "extracted");

    let style = json_body(app.clone().oneshot(get("/api/header-style")).await.unwrap()).await;
    assert_eq!(style["dominantColor"], "#ff0000");
    assert_eq!(style["complementaryColor"], "#089191");
    assert_eq!(style["source"], "extracted");

    let response = app.oneshot(get("/api/logo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(bytes.as_ref(), png.as_slice());
}

#[tokio::test]
async fn upload_without_logo_field_is_rejected() {
    let response = app()
        .oneshot(upload_request("avatar", "logo.png", &logo_png()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "No logo file provided");
}

#[tokio::test]
async fn upload_with_empty_file_is_rejected() {
    let response = app()
        .oneshot(upload_request("logo", "", b""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "No selected file");
}

#[tokio::test]
async fn invalid_image_is_rejected_and_nothing_is_stored() {
    let app = app();
    let response = app
        .clone()
        .oneshot(upload_request("logo", "logo.png", b"definitely not an image"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(
        body["error"]["message"],
        "Invalid image format or corrupted image"
    );

    let style = json_body(app.clone().oneshot(get("/api/header-style")).await.unwrap()).await;
    assert_eq!(style["source"], "default");
    let response = app.oneshot(get("/api/logo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn corrupt_style_document_is_a_server_error() {
    let store = Arc::new(MemoryStore::new());
    store
        .put(STYLE_KEY, b"{\"dominantColor\":", "application/json")
        .unwrap();

    let response = app_with(store).oneshot(get("/api/header-style")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "Stored header style is corrupt");
}

#[tokio::test]
async fn theme_preview_for_color() {
    let response = app()
        .oneshot(get("/api/theme?color=%23FF0000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["dominantColor"], "#ff0000");
    assert_eq!(body["complementaryColor"], "#089191");
}

#[tokio::test]
async fn theme_preview_defaults_without_color() {
    let body = json_body(app().oneshot(get("/api/theme")).await.unwrap()).await;
    assert_eq!(body["dominantColor"], "#282c34");
    assert_eq!(body["complementaryColor"], "#6495ED");
}

#[tokio::test]
async fn theme_preview_rejects_malformed_color() {
    let response = app()
        .oneshot(get("/api/theme?color=%23zzz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("invalid color format"), "{message}");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let state = AppState::new(Arc::new(MemoryStore::new())).with_max_upload_bytes(64);
    let response = router(state)
        .oneshot(upload_request("logo", "logo.png", &logo_png()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn local_store_survives_a_new_router() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn BlobStore> = Arc::new(LocalStore::open(dir.path()).unwrap());
    let response = app_with(store)
        .oneshot(upload_request("logo", "logo.png", &logo_png()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reopened: Arc<dyn BlobStore> = Arc::new(LocalStore::open(dir.path()).unwrap());
    let style = json_body(
        app_with(reopened)
            .oneshot(get("/api/header-style"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(style["dominantColor"], "#ff0000");
}
