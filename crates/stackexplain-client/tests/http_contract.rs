//! Backend contract tests
//!
//! Verify the exact HTTP exchange against a mock backend:
//! - request body shape (`error`, optional `model`)
//! - response decoding with partial fields
//! - failure classification (status, malformed body, unreachable host)

use serde_json::json;
use stackexplain_client::{record_or_fallback, ExplainBackend, HttpExplainClient};
use stackexplain_core::{Error, ExplainRequest, ModelChoice};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpExplainClient {
    HttpExplainClient::from_url_str(&format!("{}/explain", server.uri()), None).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Request Format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_request_carries_error_and_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/explain"))
        .and(body_json(json!({
            "error": "TypeError: x is not a function",
            "model": "deepseek/deepseek-chat-v3-0324:free"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_type": "TypeError",
            "explanation": "x is undefined",
            "suggested_fix": "check initialization",
            "relevant_links": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ExplainRequest::new("TypeError: x is not a function")
        .with_model(ModelChoice::DeepSeek.id());
    let record = client_for(&server).explain(&request).await.unwrap();

    assert_eq!(record.error_type.as_deref(), Some("TypeError"));
    assert_eq!(record.explanation.as_deref(), Some("x is undefined"));
    assert_eq!(record.suggested_fix.as_deref(), Some("check initialization"));
    assert_eq!(record.relevant_links, Some(vec![]));
}

#[tokio::test]
async fn test_request_without_model_sends_error_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/explain"))
        .and(body_json(json!({ "error": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server)
        .explain(&ExplainRequest::new(""))
        .await
        .unwrap();

    assert_eq!(record, Default::default());
}

// ────────────────────────────────────────────────────────────────────────────
// Response Decoding
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_links_keep_backend_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relevant_links": [
                "https://docs.python.org/3/library/exceptions.html#IndexError",
                "https://stackoverflow.com/q/1"
            ]
        })))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .explain(&ExplainRequest::new("IndexError"))
        .await
        .unwrap();

    assert_eq!(
        record.relevant_links.unwrap(),
        vec![
            "https://docs.python.org/3/library/exceptions.html#IndexError".to_string(),
            "https://stackoverflow.com/q/1".to_string(),
        ]
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Failure Classification
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error_type": "InternalError"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .explain(&ExplainRequest::new("boom"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .explain(&ExplainRequest::new("boom"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    let client = HttpExplainClient::from_url_str(&closed_port_url(), None).unwrap();

    let outcome = client.explain(&ExplainRequest::new("boom")).await;

    assert!(matches!(outcome, Err(Error::Request { .. })));
    assert!(record_or_fallback(outcome).is_fallback());
}

/// URL on a loopback port that was free a moment ago and has nothing listening
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/explain", port)
}
