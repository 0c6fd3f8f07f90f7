//! Ollama generation client.

mod client;
mod envelope;

pub use client::{DEFAULT_OLLAMA_URL, OllamaClient};
pub use envelope::{decode_envelope, interpret_response};
