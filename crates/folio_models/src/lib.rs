//! Generation backend clients for Folio.
//!
//! # Example
//!
//! ```no_run
//! use folio_core::GenerateRequest;
//! use folio_interface::GenerationDriver;
//! use folio_models::OllamaClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new("llama3.3")?;
//! let request = GenerateRequest::builder()
//!     .model("llama3.3")
//!     .prompt("Write a haiku about autumn")
//!     .build()?;
//! let text = client.generate(&request).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod metrics;
mod ollama;

pub use metrics::{LlmMetrics, classify_error};
pub use ollama::{DEFAULT_OLLAMA_URL, OllamaClient, decode_envelope, interpret_response};
