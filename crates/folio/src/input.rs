//! Reading the synopsis and outline from disk.

use folio_core::{BookSpec, Outline};
use folio_error::{FolioResult, InputError, InputErrorKind, OutlineError, OutlineErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Read and validate the synopsis file.
///
/// # Errors
///
/// Returns [`InputErrorKind::Read`] if the file cannot be read and
/// [`InputErrorKind::EmptySynopsis`] if it holds only whitespace.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_book(path: &Path) -> FolioResult<BookSpec> {
    let source = tokio::fs::read_to_string(path).await.map_err(|e| {
        InputError::new(InputErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;
    let book = BookSpec::from_source(&source)?;
    debug!(synopsis_length = book.synopsis().len(), "Loaded synopsis");
    Ok(book)
}

/// Read and parse the outline file.
///
/// # Errors
///
/// Returns [`OutlineErrorKind::Read`] if the file cannot be read and
/// [`OutlineErrorKind::MalformedRecord`] for the first bad line.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_outline(path: &Path) -> FolioResult<Outline> {
    let source = tokio::fs::read_to_string(path).await.map_err(|e| {
        OutlineError::new(OutlineErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;
    let outline = Outline::parse(&source)?;
    debug!(chapters = outline.len(), "Loaded outline");
    Ok(outline)
}
