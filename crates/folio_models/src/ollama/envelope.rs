//! Decoding of Ollama `/api/generate` response bodies.
//!
//! Ollama answers either with one JSON object or, when streaming, with
//! newline-delimited JSON fragments whose `response` fields concatenate to
//! the generated text. Both shapes decode to a [`GenerationOutcome`].

use folio_core::{FailureKind, GenerationOutcome};
use serde::{Deserialize, Serialize};

/// Request body for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OllamaGenerateBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// One JSON fragment of a response body.
#[derive(Debug, Deserialize)]
struct Fragment {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    done: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

/// Interpret an HTTP status and body as a generation outcome.
///
/// Non-success statuses are backend failures carrying the body (or the
/// `error` field Ollama puts in it) as detail.
pub fn interpret_response(status: u16, body: &str) -> GenerationOutcome {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<Fragment>(body)
            .ok()
            .and_then(|f| f.error)
            .unwrap_or_else(|| body.trim().to_string());
        return GenerationOutcome::failure(
            FailureKind::Backend,
            format!("status {}: {}", status, detail),
        );
    }
    decode_envelope(body)
}

/// Decode a success body into generated text.
///
/// Fragments are read up to and including the first with `done: true`.
/// Blank lines are ignored. A body that is not JSON, reports an `error`, or
/// never carries a `response` field is a backend failure; a body whose
/// responses are all blank is an empty generation.
pub fn decode_envelope(body: &str) -> GenerationOutcome {
    let mut text = String::new();
    let mut saw_response = false;

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let fragment: Fragment = match serde_json::from_str(line) {
            Ok(fragment) => fragment,
            Err(e) => {
                tracing::debug!(error = %e, line, "Undecodable response fragment");
                return GenerationOutcome::failure(
                    FailureKind::Backend,
                    format!("malformed response envelope: {}", e),
                );
            }
        };

        if let Some(error) = fragment.error {
            return GenerationOutcome::failure(FailureKind::Backend, error);
        }

        if let Some(piece) = fragment.response {
            saw_response = true;
            text.push_str(&piece);
        }

        if fragment.done == Some(true) {
            break;
        }
    }

    if !saw_response {
        return GenerationOutcome::failure(
            FailureKind::Backend,
            "response envelope has no 'response' field",
        );
    }

    let text = text.trim();
    if text.is_empty() {
        return GenerationOutcome::failure(FailureKind::Empty, "generated text is blank");
    }
    GenerationOutcome::Success(text.to_string())
}
