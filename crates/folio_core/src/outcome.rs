//! Tagged result of a single backend exchange.

use folio_error::{GenerationError, GenerationErrorKind};

/// Why a backend exchange did not produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FailureKind {
    /// Transport failure before a response arrived
    #[display("unavailable")]
    Unavailable,
    /// Non-success status or an envelope of the wrong shape
    #[display("backend")]
    Backend,
    /// A well-formed envelope with no usable text
    #[display("empty")]
    Empty,
}

/// Outcome of decoding a backend response.
///
/// Backends map whatever they receive into one of these two shapes, so the
/// pipeline never probes optional response fields itself.
///
/// # Examples
///
/// ```
/// use folio_core::{FailureKind, GenerationOutcome};
/// use folio_error::GenerationErrorKind;
///
/// let ok = GenerationOutcome::Success("Once upon a time".to_string());
/// assert_eq!(ok.into_result().unwrap(), "Once upon a time");
///
/// let bad = GenerationOutcome::failure(FailureKind::Backend, "status 500");
/// let err = bad.into_result().unwrap_err();
/// assert!(matches!(err.kind, GenerationErrorKind::BackendError(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Generated text
    Success(String),
    /// The exchange failed
    Failure {
        /// Failure category
        kind: FailureKind,
        /// Human-readable detail
        detail: String,
    },
}

impl GenerationOutcome {
    /// Build a failure outcome.
    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            detail: detail.into(),
        }
    }

    /// Whether the outcome carries text.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert into a result, mapping each failure kind to its error kind.
    ///
    /// Success text that is empty after trimming becomes
    /// [`GenerationErrorKind::EmptyGeneration`].
    #[track_caller]
    pub fn into_result(self) -> Result<String, GenerationError> {
        match self {
            Self::Success(text) if text.trim().is_empty() => {
                Err(GenerationError::new(GenerationErrorKind::EmptyGeneration))
            }
            Self::Success(text) => Ok(text),
            Self::Failure { kind, detail } => {
                let kind = match kind {
                    FailureKind::Unavailable => GenerationErrorKind::BackendUnavailable(detail),
                    FailureKind::Backend => GenerationErrorKind::BackendError(detail),
                    FailureKind::Empty => GenerationErrorKind::EmptyGeneration,
                };
                Err(GenerationError::new(kind))
            }
        }
    }
}
