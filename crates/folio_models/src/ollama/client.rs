//! Ollama generation client.

use super::envelope::{OllamaGenerateBody, interpret_response};
use crate::{LlmMetrics, classify_error};
use async_trait::async_trait;
use folio_core::{FailureKind, GenerateRequest, GenerationOutcome};
use folio_error::{ConfigError, GenerationResult};
use folio_interface::GenerationDriver;
use reqwest::{Client, Url};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Default Ollama generate endpoint on the local machine.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";

const PROVIDER: &str = "ollama";

/// Ollama client issuing one `/api/generate` request per call.
///
/// The client sets no timeout of its own; a call waits until the backend
/// answers or the connection fails.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// HTTP client
    client: Client,

    /// Model name (e.g., "llama3.3", "mistral")
    model_name: String,

    /// Full URL of the generate endpoint
    endpoint: Url,
}

impl OllamaClient {
    /// Create a new Ollama client against the default localhost endpoint.
    #[instrument(name = "ollama_client_new", skip_all)]
    pub fn new(model_name: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new_with_url(model_name, DEFAULT_OLLAMA_URL)
    }

    /// Create a new Ollama client with a custom generate endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the endpoint is not a valid URL or the
    /// model name is blank.
    #[instrument(name = "ollama_client_new_with_url", skip_all)]
    pub fn new_with_url(
        model_name: impl Into<String>,
        endpoint: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let model_name = model_name.into();
        if model_name.trim().is_empty() {
            return Err(ConfigError::new("Ollama model name is empty"));
        }

        let endpoint = Url::parse(endpoint.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Invalid Ollama endpoint '{}': {}",
                endpoint.as_ref(),
                e
            ))
        })?;

        // Local servers are reached directly even when a system proxy is set
        let is_loopback = matches!(
            endpoint.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        );
        let mut builder = Client::builder();
        if is_loopback {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            model = %model_name,
            url = %endpoint,
            "Creating Ollama client"
        );

        Ok(Self {
            client,
            model_name,
            endpoint,
        })
    }

    /// The generate endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Perform one exchange and classify the result.
    async fn exchange(&self, model: &str, prompt: &str) -> GenerationOutcome {
        let body = OllamaGenerateBody {
            model,
            prompt,
            stream: false,
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string_pretty(&body) {
                Ok(payload) => debug!(payload = %payload, "Sending payload to Ollama"),
                Err(e) => debug!(error = %e, "Could not render payload for logging"),
            }
        }

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, url = %self.endpoint, "Failed to reach Ollama server");
                return GenerationOutcome::failure(
                    FailureKind::Unavailable,
                    format!("{}: {}", self.endpoint, e),
                );
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return GenerationOutcome::failure(
                    FailureKind::Backend,
                    format!("failed to read response body: {}", e),
                );
            }
        };

        debug!(status, raw = %text, "Received response from Ollama");
        interpret_response(status, &text)
    }
}

#[async_trait]
impl GenerationDriver for OllamaClient {
    #[instrument(skip(self, req), fields(model = %req.model(), prompt_length = req.prompt().len()))]
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<String> {
        let model = if req.model().is_empty() {
            self.model_name.as_str()
        } else {
            req.model().as_str()
        };

        let started = Instant::now();
        let outcome = self.exchange(model, req.prompt()).await;
        let metrics = LlmMetrics::get();
        metrics.record_request(PROVIDER, model, started.elapsed().as_secs_f64());

        match outcome.into_result() {
            Ok(text) => {
                debug!(response_length = text.len(), "Generated text");
                metrics.record_generated(model, text.chars().count() as u64);
                Ok(text)
            }
            Err(e) => {
                metrics.record_error(PROVIDER, model, classify_error(&e.kind));
                Err(e)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
