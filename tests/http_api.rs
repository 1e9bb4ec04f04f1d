//! Integration tests for the HTTP API.
//!
//! The full router is exercised in-process with `tower::ServiceExt::oneshot`,
//! backed by the seeded catalog, an in-memory session store and a markdown
//! exporter writing into a temporary directory.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use furnish_quote::adapters::catalog::InMemoryCatalog;
use furnish_quote::adapters::export::LocalQuoteExporter;
use furnish_quote::adapters::http::{api_router, AppServices};
use furnish_quote::adapters::storage::InMemorySessionStore;
use furnish_quote::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    _output: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let output = TempDir::new().unwrap();
        let services = AppServices {
            catalog: Arc::new(InMemoryCatalog::seeded()),
            exporter: Arc::new(LocalQuoteExporter::new(output.path())),
            sessions: Arc::new(InMemorySessionStore::new()),
            download_base: "/quotes".to_string(),
        };
        Self {
            router: api_router(services, &ServerConfig::default()),
            _output: output,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn chat(&self, session_id: &str, message: &str) -> Value {
        let (status, body) = self
            .json(
                Method::POST,
                "/chat",
                Some(json!({ "session_id": session_id, "message": message })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    async fn chat_all(&self, session_id: &str, messages: &[&str]) -> Value {
        let mut last = Value::Null;
        for message in messages {
            last = self.chat(session_id, message).await;
        }
        last
    }
}

fn approx(value: &Value, expected: f64) -> bool {
    value.as_f64().map_or(false, |v| (v - expected).abs() < 1e-6)
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn chat_accepts_an_empty_request() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::POST, "/chat", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().contains("Movel nao encontrado"));
    assert!(body.get("options").is_none());
}

#[tokio::test]
async fn chat_reply_lists_menu_options() {
    let app = TestApp::new();

    let body = app.chat("s1", "guarda").await;

    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 5);
    assert_eq!(options[4]["id"], "5");
    assert!(body.get("pdf_ready").is_none());
}

#[tokio::test]
async fn finalized_quote_is_downloadable() {
    let app = TestApp::new();

    let body = app
        .chat_all("s1", &["guarda", "5", "sim", "finalizar", "confirmar"])
        .await;

    assert_eq!(body["pdf_ready"], true);
    assert_eq!(body["download_url"], "/quotes/s1/document");
    let filename = body["pdf_filename"].as_str().unwrap();
    assert!(filename.starts_with("orcamento_s1_"));

    let (status, bytes) = app.send(Method::GET, "/quotes/s1/document", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("# Orcamento"));
    assert!(text.contains("Guarda-roupa Casal"));
}

#[tokio::test]
async fn reset_reports_whether_a_session_existed() {
    let app = TestApp::new();
    app.chat("s1", "guarda").await;

    let (status, first) = app.json(Method::POST, "/reset/s1", None).await;
    let (_, second) = app.json(Method::POST, "/reset/s1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["existed"], true);
    assert_eq!(second["existed"], false);

    let body = app.chat("s1", "5").await;
    assert!(body["response"].as_str().unwrap().contains("Movel nao encontrado"));
}

// =============================================================================
// Quotes
// =============================================================================

#[tokio::test]
async fn unknown_session_reads_as_an_empty_quote() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::GET, "/quotes/nobody", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 0.0);
    assert_eq!(body["finalized"], false);
}

#[tokio::test]
async fn status_of_unknown_session_is_404() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::GET, "/quotes/nobody/status", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn quote_lists_confirmed_items_with_components() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim"]).await;

    let (status, body) = app.json(Method::GET, "/quotes/s1", None).await;

    assert_eq!(status, StatusCode::OK);
    let item = &body["items"][0];
    assert_eq!(item["index"], 0);
    assert_eq!(item["name"], "Guarda-roupa Casal");
    assert_eq!(item["dimensions"], "1600 x 2200 x 600 mm");
    assert_eq!(item["components"].as_array().unwrap().len(), 3);
    // 1800 + 4x30 + 8x18 + 2x120
    assert_eq!(item["total"], 2304.0);
    assert_eq!(body["total"], 2304.0);

    let (_, status_body) = app.json(Method::GET, "/quotes/s1/status", None).await;
    assert_eq!(status_body["state"], "item_added_menu");
    assert_eq!(status_body["item_count"], 1);
}

#[tokio::test]
async fn removing_items_validates_the_index() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim"]).await;

    let (status, _) = app.json(Method::DELETE, "/quotes/s1/items/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.json(Method::DELETE, "/quotes/s1/items/3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ITEM_NOT_FOUND");

    let (status, _) = app.json(Method::DELETE, "/quotes/nobody/items/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.json(Method::DELETE, "/quotes/s1/items/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], "Guarda-roupa Casal");
    assert_eq!(body["remaining"], 0);
    assert_eq!(body["state"], "start");
}

#[tokio::test]
async fn resizing_an_item_reprices_it() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim"]).await;

    let (status, body) = app
        .json(
            Method::POST,
            "/quotes/s1/items/0/dimensions",
            Some(json!({ "width_mm": 3200.0, "height_mm": 2200.0, "depth_mm": 600.0 })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    // footprint doubles against the catalog's 0.96 m2
    assert!(approx(&body["price"], 3600.0));

    let (status, body) = app
        .json(
            Method::POST,
            "/quotes/s1/items/0/dimensions",
            Some(json!({ "width_mm": 0.0, "height_mm": 2200.0, "depth_mm": 600.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DIMENSIONS");
}

#[tokio::test]
async fn components_of_a_confirmed_item_can_be_swapped() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim"]).await;

    let (status, body) = app
        .json(Method::GET, "/quotes/s1/items/0/components/1", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "dobradica");
    assert_eq!(body["options"][1]["id"], "DOB02");

    let (status, body) = app
        .json(
            Method::POST,
            "/quotes/s1/items/0/components/1",
            Some(json!({ "option_id": "DOB02" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"][1]["name"], "Dobradiça Soft Close");
    assert_eq!(body["components"][1]["quantity"], 8);
    // hinges go from 8x18 to 8x32
    assert_eq!(body["total"], 2304.0 + 8.0 * 14.0);

    let (status, body) = app
        .json(
            Method::POST,
            "/quotes/s1/items/0/components/1",
            Some(json!({ "option_id": "GAV01" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OPTION_NOT_FOUND");
}

#[tokio::test]
async fn finalized_quotes_cannot_be_edited() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim", "finalizar", "confirmar"])
        .await;

    let (status, body) = app.json(Method::DELETE, "/quotes/s1/items/0", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
}

#[tokio::test]
async fn document_before_export_is_404() {
    let app = TestApp::new();
    app.chat_all("s1", &["guarda", "5", "sim"]).await;

    let (status, body) = app.json(Method::GET, "/quotes/s1/document", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "DOCUMENT_NOT_FOUND");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_live_sessions() {
    let app = TestApp::new();
    app.chat("a", "guarda").await;
    app.chat("b", "rack").await;

    let (status, body) = app.json(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sessions"], 2);
}
