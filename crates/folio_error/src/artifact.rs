//! Output artifact I/O errors.

/// Kinds of artifact errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ArtifactErrorKind {
    /// Failed to move a prior artifact aside
    #[display("Failed to archive artifact: {}", _0)]
    Archive(String),
    /// The timestamped archive name is already taken
    #[display("Archive target already exists: {}", _0)]
    ArchiveCollision(String),
    /// Failed to append a chapter to the artifact
    #[display("Failed to append to artifact: {}", _0)]
    Append(String),
    /// Failed to read an artifact back
    #[display("Failed to read artifact: {}", _0)]
    Read(String),
    /// Failed to write a derived file
    #[display("Failed to write file: {}", _0)]
    Write(String),
}

/// Artifact I/O error with location tracking.
///
/// # Examples
///
/// ```
/// use folio_error::{ArtifactError, ArtifactErrorKind};
///
/// let err = ArtifactError::new(ArtifactErrorKind::Append("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Artifact I/O Error: {} at line {} in {}", kind, line, file)]
pub struct ArtifactError {
    /// The kind of error that occurred
    pub kind: ArtifactErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ArtifactError {
    /// Create a new artifact error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ArtifactErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
