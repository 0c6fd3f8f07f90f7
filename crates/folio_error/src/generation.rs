//! Generation backend errors.

/// Generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The backend could not be reached
    #[display("Backend unavailable: {}", _0)]
    BackendUnavailable(String),
    /// The backend answered with a non-success status or an unexpected envelope
    #[display("Backend error: {}", _0)]
    BackendError(String),
    /// The backend answered successfully but produced no usable text
    #[display("Backend returned no usable text")]
    EmptyGeneration,
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use folio_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyGeneration);
/// assert!(format!("{}", err).contains("no usable text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for generation calls.
pub type GenerationResult<T> = Result<T, GenerationError>;
