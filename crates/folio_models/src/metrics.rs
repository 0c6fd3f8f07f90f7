//! Metrics for generation backend calls.
//!
//! Uses the OpenTelemetry global meter, so recording is a no-op until a
//! meter provider is installed.

use folio_error::GenerationErrorKind;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Metrics for backend interactions, labeled by provider and model.
#[derive(Clone)]
pub struct LlmMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total generation requests
    pub requests: Counter<u64>,
    /// Failed generation requests
    pub errors: Counter<u64>,
    /// Generation call duration in seconds
    pub duration: Histogram<f64>,
    /// Characters of generated text received
    pub generated_chars: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("folio_llm");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("llm.requests")
                .with_description("Total generation requests")
                .build(),
            errors: meter
                .u64_counter("llm.errors")
                .with_description("Failed generation requests")
                .build(),
            duration: meter
                .f64_histogram("llm.duration")
                .with_unit("seconds")
                .with_description("Generation call duration")
                .build(),
            generated_chars: meter
                .u64_counter("llm.generated_chars")
                .with_description("Characters of generated text received")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a completed request, successful or not.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.errors.add(1, labels);
    }

    /// Record the size of generated text.
    pub fn record_generated(&self, model: &str, chars: u64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.generated_chars.add(chars, labels);
    }
}

impl Default for LlmMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify a generation failure for metrics labeling.
///
/// Returns one of: "unavailable", "backend", "empty"
pub fn classify_error(kind: &GenerationErrorKind) -> &'static str {
    match kind {
        GenerationErrorKind::BackendUnavailable(_) => "unavailable",
        GenerationErrorKind::BackendError(_) => "backend",
        GenerationErrorKind::EmptyGeneration => "empty",
    }
}
