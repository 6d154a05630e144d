//! Integration tests for OllamaClient.
//!
//! Uses wiremock for HTTP mocking. Covers the request shape, response text
//! extraction, non-2xx mapping, and missing-field handling.

use ngbench_core::errors::ClientError;
use ngbench_core::providers::{GenerationClient, OllamaClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn generate_posts_non_streaming_request_and_returns_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama3",
            "prompt": "write an angular component",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "response": "import { Component } from '@angular/core';",
            "done": true,
            "eval_count": 27
        })))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(&mock_server.uri()).expect("client");
    let generation = client
        .generate("llama3", "write an angular component")
        .await
        .expect("generate failed");

    assert_eq!(
        generation.text,
        "import { Component } from '@angular/core';"
    );
    assert_eq!(generation.model, "llama3");
    assert_eq!(generation.meta["eval_count"], serde_json::json!(27));
}

#[tokio::test]
async fn non_2xx_status_maps_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model failed to load"))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(&mock_server.uri()).expect("client");
    let result = client.generate("llama3", "prompt").await;

    match result {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "model failed to load");
        }
        other => panic!("expected Status error, got {:?}", other.map(|g| g.text)),
    }
}

#[tokio::test]
async fn missing_response_field_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "done": true
        })))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(&mock_server.uri()).expect("client");
    let result = client.generate("llama3", "prompt").await;

    assert!(matches!(result, Err(ClientError::MissingField("response"))));
}

#[tokio::test]
async fn non_string_response_field_is_reported_as_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": 42
        })))
        .mount(&mock_server)
        .await;

    let client = OllamaClient::new(&mock_server.uri()).expect("client");
    let result = client.generate("llama3", "prompt").await;

    assert!(matches!(result, Err(ClientError::MissingField("response"))));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 1 is never served; connect fails immediately.
    let client = OllamaClient::new("127.0.0.1:1").expect("client");
    let result = client.generate("llama3", "prompt").await;

    assert!(matches!(result, Err(ClientError::Http(_))));
}
