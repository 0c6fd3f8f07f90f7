//! Top-level error wrapper types.

use crate::{ArtifactError, ConfigError, GenerationError, InputError, OutlineError, RunError};

/// Every error the Folio crates can produce.
///
/// # Examples
///
/// ```
/// use folio_error::{ConfigError, FolioError};
///
/// let err: FolioError = ConfigError::new("missing model").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FolioErrorKind {
    /// Outline parsing error
    #[from(OutlineError)]
    Outline(OutlineError),
    /// Synopsis input error
    #[from(InputError)]
    Input(InputError),
    /// Generation backend error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Artifact I/O error
    #[from(ArtifactError)]
    Artifact(ArtifactError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Attributed run failure
    #[from(RunError)]
    Run(RunError),
}

/// Folio error with kind discrimination.
///
/// # Examples
///
/// ```
/// use folio_error::{FolioErrorKind, FolioResult, OutlineError};
///
/// fn parse() -> FolioResult<()> {
///     Err(OutlineError::malformed(2, "expected 3 fields, found 2"))?
/// }
///
/// let err = parse().unwrap_err();
/// assert!(matches!(err.kind(), FolioErrorKind::Outline(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Folio Error: {}", _0)]
pub struct FolioError(Box<FolioErrorKind>);

impl FolioError {
    /// Create a new error from a kind.
    pub fn new(kind: FolioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FolioErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FolioErrorKind
impl<T> From<T> for FolioError
where
    T: Into<FolioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Folio operations.
pub type FolioResult<T> = std::result::Result<T, FolioError>;
