//! The global synopsis of a book.

use folio_error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};

/// The single synopsis supplied to every chapter's generation request.
///
/// Immutable once loaded.
///
/// # Examples
///
/// ```
/// use folio_core::BookSpec;
///
/// let book = BookSpec::new("A detective story in 1920s Paris");
/// assert_eq!(book.synopsis(), "A detective story in 1920s Paris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookSpec {
    synopsis: String,
}

impl BookSpec {
    /// Create a book spec from synopsis text, taken as-is.
    pub fn new(synopsis: impl Into<String>) -> Self {
        Self {
            synopsis: synopsis.into(),
        }
    }

    /// Create a book spec from raw source text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InputErrorKind::EmptySynopsis`] if nothing remains after trimming.
    #[track_caller]
    pub fn from_source(source: &str) -> Result<Self, InputError> {
        let synopsis = source.trim();
        if synopsis.is_empty() {
            return Err(InputError::new(InputErrorKind::EmptySynopsis));
        }
        Ok(Self::new(synopsis))
    }

    /// The synopsis text.
    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }
}
