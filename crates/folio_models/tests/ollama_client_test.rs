//! Tests for the Ollama client against a canned local HTTP responder.
//!
//! Tests gated on the `api` feature need Ollama running locally:
//! Install Ollama: https://ollama.ai/download
//! Pull model: ollama pull llama3.3
//!
//! Run with: cargo test --package folio_models --features api -- --ignored

use folio_core::GenerateRequest;
use folio_error::GenerationErrorKind;
use folio_interface::GenerationDriver;
use folio_models::OllamaClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP response, returning the raw request that was received.
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let lower = l.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&buf).to_string()
    });

    (format!("http://{}/api/generate", addr), handle)
}

fn request(prompt: &str) -> GenerateRequest {
    GenerateRequest::builder()
        .model("llama3.3")
        .prompt(prompt)
        .build()
        .expect("Valid request")
}

#[tokio::test]
async fn test_generate_extracts_response_field() {
    let (url, server) =
        serve_once(200, r#"{"model":"llama3.3","response":"The fog rolled in.","done":true}"#)
            .await;
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let text = client.generate(&request("Write chapter 1")).await.unwrap();
    assert_eq!(text, "The fog rolled in.");

    let raw_request = server.await.unwrap();
    assert!(raw_request.starts_with("POST /api/generate"));
    assert!(raw_request.contains(r#""model":"llama3.3""#));
    assert!(raw_request.contains(r#""prompt":"Write chapter 1""#));
    assert!(raw_request.contains(r#""stream":false"#));
}

#[tokio::test]
async fn test_generate_concatenates_streamed_fragments() {
    let (url, _server) = serve_once(
        200,
        "{\"response\":\"The fog \",\"done\":false}\n{\"response\":\"rolled in.\",\"done\":true}\n",
    )
    .await;
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let text = client.generate(&request("Write")).await.unwrap();
    assert_eq!(text, "The fog rolled in.");
}

#[tokio::test]
async fn test_non_success_status_is_backend_error() {
    let (url, _server) = serve_once(404, r#"{"error":"model 'llama3.3' not found"}"#).await;
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let err = client.generate(&request("Write")).await.unwrap_err();
    match err.kind {
        GenerationErrorKind::BackendError(detail) => assert!(detail.contains("not found")),
        other => panic!("expected BackendError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_envelope_shape_is_backend_error() {
    let (url, _server) = serve_once(200, r#"{"choices":[{"text":"hi"}]}"#).await;
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let err = client.generate(&request("Write")).await.unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::BackendError(_)));
}

#[tokio::test]
async fn test_blank_response_is_empty_generation() {
    let (url, _server) = serve_once(200, r#"{"response":"  ","done":true}"#).await;
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let err = client.generate(&request("Write")).await.unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyGeneration);
}

#[tokio::test]
async fn test_closed_port_is_backend_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/api/generate", addr);
    let client = OllamaClient::new_with_url("llama3.3", &url).unwrap();

    let err = client.generate(&request("Write")).await.unwrap_err();
    assert!(matches!(
        err.kind,
        GenerationErrorKind::BackendUnavailable(_)
    ));
}

#[test]
fn test_invalid_endpoint_is_config_error() {
    assert!(OllamaClient::new_with_url("llama3.3", "not a url").is_err());
    assert!(OllamaClient::new_with_url("  ", "http://localhost:11434/api/generate").is_err());
}

#[cfg(feature = "api")]
#[tokio::test]
#[ignore] // Requires Ollama running locally
async fn test_ollama_live_generation() {
    let client = OllamaClient::new("llama3.3").expect("Failed to create client");
    let text = client
        .generate(&request("Say hello in one word."))
        .await
        .expect("Generation failed");
    assert!(!text.is_empty());
}
