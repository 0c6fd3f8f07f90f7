//! Trait definition for generation backends.

use async_trait::async_trait;
use folio_core::GenerateRequest;
use folio_error::GenerationResult;

/// Core trait that every generation backend implements.
///
/// One call is one request/response exchange. Implementations must not
/// retry on their own: a failed call is reported as-is.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for a request.
    ///
    /// # Errors
    ///
    /// - `BackendUnavailable` when the backend cannot be reached
    /// - `BackendError` on a non-success status or malformed envelope
    /// - `EmptyGeneration` when the response holds no usable text
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<String>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3.3").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: GenerationDriver + ?Sized> GenerationDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<String> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<'a, D: GenerationDriver + ?Sized> GenerationDriver for &'a D {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<String> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
