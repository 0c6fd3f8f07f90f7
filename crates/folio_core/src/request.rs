//! Request payload for a generation backend.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generation request: a model identifier and a prompt.
///
/// # Examples
///
/// ```
/// use folio_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .model("llama3.3")
///     .prompt("Write chapter 1")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "llama3.3");
/// assert!(request.prompt().contains("chapter 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier understood by the backend
    model: String,
    /// Full prompt text
    prompt: String,
}

impl GenerateRequest {
    /// Create a request directly.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}
