//! Outline parsing errors.

/// Kinds of outline errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutlineErrorKind {
    /// A record did not yield exactly three usable fields
    #[display("Malformed record at line {}: {}", position, reason)]
    MalformedRecord {
        /// 1-based line number of the offending record
        position: usize,
        /// What was wrong with the record
        reason: String,
    },
    /// The outline source could not be read
    #[display("Failed to read outline: {}", _0)]
    Read(String),
}

/// Outline error with location tracking.
///
/// # Examples
///
/// ```
/// use folio_error::{OutlineError, OutlineErrorKind};
///
/// let err = OutlineError::new(OutlineErrorKind::MalformedRecord {
///     position: 3,
///     reason: "expected 3 fields, found 2".to_string(),
/// });
/// assert!(format!("{}", err).contains("line 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Outline Error: {} at line {} in {}", kind, line, file)]
pub struct OutlineError {
    /// The kind of error that occurred
    pub kind: OutlineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OutlineError {
    /// Create a new outline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutlineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`OutlineErrorKind::MalformedRecord`] error.
    #[track_caller]
    pub fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Self::new(OutlineErrorKind::MalformedRecord {
            position,
            reason: reason.into(),
        })
    }
}
