//! Integration tests for the review service client.
//!
//! Exercises request_review against a mock HTTP server: the recognized
//! response shapes, the tolerant-unwrapping fallbacks, and the full failure
//! taxonomy (server error, timeout, connection failure).

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use revu_core::{ReviewClient, ReviewError, DEFAULT_TIMEOUT};

async fn mock_review_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/get-review"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn review_field_response() {
    let server = mock_review_server(
        ResponseTemplate::new(200).set_body_json(json!({"review": "Looks good."})),
    )
    .await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("function sum() {}").await.unwrap();
    assert_eq!(text, "Looks good.");
}

#[tokio::test]
async fn text_field_response() {
    let server = mock_review_server(
        ResponseTemplate::new(200).set_body_json(json!({"text": "Use const here."})),
    )
    .await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("var x = 1").await.unwrap();
    assert_eq!(text, "Use const here.");
}

#[tokio::test]
async fn json_string_body_response() {
    let server =
        mock_review_server(ResponseTemplate::new(200).set_body_json(json!("Y"))).await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("code").await.unwrap();
    assert_eq!(text, "Y");
}

#[tokio::test]
async fn plain_text_body_response() {
    let server = mock_review_server(
        ResponseTemplate::new(200).set_body_string("Nice work overall."),
    )
    .await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("code").await.unwrap();
    assert_eq!(text, "Nice work overall.");
}

#[tokio::test]
async fn empty_object_response_is_empty_success() {
    let server =
        mock_review_server(ResponseTemplate::new(200).set_body_json(json!({}))).await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("code").await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn request_carries_code_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/get-review"))
        .and(body_json(json!({"code": "fn main() {}"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"review": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let text = client.request_review("fn main() {}").await.unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn server_error_is_not_a_success() {
    let server = mock_review_server(
        ResponseTemplate::new(500).set_body_string("internal error detail"),
    )
    .await;
    let client = ReviewClient::new(&server.uri(), DEFAULT_TIMEOUT).unwrap();

    let err = client.request_review("code").await.unwrap_err();
    assert_eq!(err, ReviewError::Server { status: 500 });
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = mock_review_server(
        ResponseTemplate::new(200)
            .set_body_json(json!({"review": "too late"}))
            .set_delay(Duration::from_secs(5)),
    )
    .await;
    let client = ReviewClient::new(&server.uri(), Duration::from_millis(200)).unwrap();

    let err = client.request_review("code").await.unwrap_err();
    assert_eq!(err, ReviewError::Timeout);
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Start a server only to obtain a port that is free again once dropped.
    // Use the builder: `MockServer::start()` hands out pooled servers whose
    // listener stays bound after drop, so the port would not actually free up.
    let uri = {
        let server = MockServer::builder().start().await;
        server.uri()
    };
    let client = ReviewClient::new(&uri, Duration::from_millis(500)).unwrap();

    let err = client.request_review("code").await.unwrap_err();
    assert!(matches!(err, ReviewError::Network(_)), "got {err:?}");
}
