//! HTTP contract tests for the conversion API.
//!
//! Each test binds the server to an ephemeral localhost port and drives it
//! with reqwest, asserting the status code and envelope shape of every
//! request path that does not need an external PDF host. Paths that require
//! a real remote document (successful conversion, the size cutoff against a
//! live server) are exercised manually; everything up to the network edge is
//! covered here.

use pdf2image_api::server::{build_router, AppState};
use serde_json::json;

/// Bind the router on an ephemeral port and return the base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(AppState::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn index_reports_service_descriptor() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for path in ["/", "/api/index"] {
        let response = client
            .get(format!("{base}{path}"))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), 200, "GET {path}");

        let json: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(json["name"], "PDF to Image API");
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["endpoints"]["convert"], "POST /api/convert");
        assert!(json["version"].is_string());
    }
}

#[tokio::test]
async fn missing_url_returns_400_invalid_url() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/convert"))
        .json(&json!({}))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_URL");
    assert_eq!(body["error"]["message"], "URL is required");
}

#[tokio::test]
async fn absent_body_behaves_like_empty_request() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // No body, no content-type at all.
    let response = client
        .post(format!("{base}/api/convert"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"]["code"], "INVALID_URL");
}

#[tokio::test]
async fn non_http_scheme_returns_400_invalid_url() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/convert"))
        .json(&json!({ "url": "ftp://example.com/doc.pdf" }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_URL");
}

#[tokio::test]
async fn wrong_method_returns_405_envelope() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/convert"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 405);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(body["error"]["message"], "Only POST allowed");
}

#[tokio::test]
async fn unreachable_host_returns_502_download_failed() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // Port 9 (discard) on localhost: the connect is refused immediately,
    // exercising the download-failure branch without leaving the machine.
    let response = client
        .post(format!("{base}/api/convert"))
        .json(&json!({ "url": "http://127.0.0.1:9/doc.pdf" }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), 502);

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "PDF_DOWNLOAD_FAILED");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/convert"))
        .header("Origin", "https://example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
