//! HTTP contract tests for the document server
//!
//! Exercises the exact wire surface: status codes, JSON error bodies, the
//! upload confirmation message, and raw document bytes. Each test runs an
//! in-process server over its own temporary storage directory.
//!
//! Run with: cargo test -p docstore-tests --test http_contract_test

use docstore_client::ClientError;
use docstore_tests::TestHarness;
use serde_json::{json, Value};

/// POST /documents with one multipart part: `field` is the part name,
/// `filename` the submitted filename (None for a plain form value).
async fn post_part(
    harness: &TestHarness,
    field: &str,
    filename: Option<&str>,
    content: &[u8],
) -> reqwest::Response {
    let mut part = reqwest::multipart::Part::bytes(content.to_vec());
    if let Some(filename) = filename {
        part = part.file_name(filename.to_string());
    }
    let form = reqwest::multipart::Form::new().part(field.to_string(), part);

    reqwest::Client::new()
        .post(harness.url("/documents"))
        .multipart(form)
        .send()
        .await
        .expect("request should reach the test server")
}

async fn body_json(response: reqwest::Response) -> Value {
    response.json().await.expect("body should be JSON")
}

#[tokio::test]
async fn end_to_end_report_scenario() {
    let harness = TestHarness::new().await;

    // Put(name="report.txt", content=b"hello") -> 200, message names the file
    let response = post_part(&harness, "file", Some("report.txt"), b"hello").await;
    assert_eq!(response.status(), 200);
    let message = body_json(response).await["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("report.txt"));

    // Get("report.txt") -> 200, body == b"hello"
    let response = reqwest::get(harness.url("/documents/report.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"hello");

    // Get("missing.txt") -> 404
    let response = reqwest::get(harness.url("/documents/missing.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn upload_confirmation_message_is_exact() {
    let harness = TestHarness::new().await;

    let response = post_part(&harness, "file", Some("report.txt"), b"hello").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Document 'report.txt' uploaded successfully"})
    );
}

#[tokio::test]
async fn round_trip_preserves_arbitrary_bytes() {
    let harness = TestHarness::new().await;

    let content: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();
    harness
        .server
        .client
        .upload("blob.bin", content.clone())
        .await
        .unwrap();

    let got = harness.server.client.fetch("blob.bin").await.unwrap();
    assert_eq!(got.as_ref(), &content[..]);
}

#[tokio::test]
async fn overwrite_is_last_write_wins() {
    let harness = TestHarness::new().await;
    let client = &harness.server.client;

    client.upload("doc.txt", b"A".to_vec()).await.unwrap();
    client.upload("doc.txt", b"B".to_vec()).await.unwrap();

    let got = client.fetch("doc.txt").await.unwrap();
    assert_eq!(got.as_ref(), b"B");
    assert_eq!(harness.stored_names(), vec!["doc.txt"]);
}

#[tokio::test]
async fn repeated_identical_upload_is_idempotent() {
    let harness = TestHarness::new().await;
    let client = &harness.server.client;

    client.upload("doc.txt", b"X".to_vec()).await.unwrap();
    client.upload("doc.txt", b"X".to_vec()).await.unwrap();

    let got = client.fetch("doc.txt").await.unwrap();
    assert_eq!(got.as_ref(), b"X");
}

#[tokio::test]
async fn missing_file_field_returns_exact_error_and_writes_nothing() {
    let harness = TestHarness::new().await;

    let response = post_part(&harness, "data", Some("report.txt"), b"hello").await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(response).await,
        json!({"error": "No file part in the request"})
    );
    assert!(harness.stored_names().is_empty());
}

#[tokio::test]
async fn plain_form_value_named_file_is_not_a_file_part() {
    let harness = TestHarness::new().await;

    // A `file` field without a filename is a form value, not an upload.
    let response = post_part(&harness, "file", None, b"hello").await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(response).await,
        json!({"error": "No file part in the request"})
    );
    assert!(harness.stored_names().is_empty());
}

#[tokio::test]
async fn empty_filename_returns_exact_error_and_writes_nothing() {
    let harness = TestHarness::new().await;

    let response = post_part(&harness, "file", Some(""), b"hello").await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(response).await,
        json!({"error": "No file selected for uploading"})
    );
    assert!(harness.stored_names().is_empty());
}

#[tokio::test]
async fn get_of_absent_document_returns_exact_not_found_body() {
    let harness = TestHarness::new().await;

    let response = reqwest::get(harness.url("/documents/nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Document not found"})
    );
}

#[tokio::test]
async fn zero_byte_upload_is_a_valid_document() {
    let harness = TestHarness::new().await;

    let response = post_part(&harness, "file", Some("empty.txt"), b"").await;
    assert_eq!(response.status(), 200);

    let got = harness.server.client.fetch("empty.txt").await.unwrap();
    assert!(got.is_empty());
}

#[tokio::test]
async fn traversal_names_are_rejected_and_write_nothing() {
    let harness = TestHarness::new().await;

    for name in ["../escape.txt", "a/b.txt", "..", "."] {
        let response = post_part(&harness, "file", Some(name), b"evil").await;
        assert_eq!(response.status(), 400, "name {:?} should be rejected", name);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid document name"})
        );
    }

    assert!(harness.stored_names().is_empty());
    // Nothing escaped above the storage root either.
    let parent = harness.storage.path().parent().unwrap();
    assert!(!parent.join("escape.txt").exists());
}

#[tokio::test]
async fn content_type_is_inferred_from_extension() {
    let harness = TestHarness::new().await;
    let client = &harness.server.client;

    client
        .upload("index.html", b"<html></html>".to_vec())
        .await
        .unwrap();
    client.upload("opaque", b"\x00\x01".to_vec()).await.unwrap();

    let response = reqwest::get(harness.url("/documents/index.html"))
        .await
        .unwrap();
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "{}", content_type);

    let response = reqwest::get(harness.url("/documents/opaque")).await.unwrap();
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert_eq!(content_type, "application/octet-stream");
}

#[tokio::test]
async fn client_maps_missing_document_to_typed_error() {
    let harness = TestHarness::new().await;

    let err = harness.server.client.fetch("missing.txt").await.unwrap_err();
    assert!(matches!(err, ClientError::DocumentNotFound(name) if name == "missing.txt"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let harness = TestHarness::new().await;

    let status = harness.server.client.health().await.unwrap();
    assert_eq!(status, "OK");
}
