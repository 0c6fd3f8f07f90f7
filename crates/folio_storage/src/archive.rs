//! Moving a prior artifact aside before a run.

use chrono::{DateTime, Local};
use folio_error::{ArtifactError, ArtifactErrorKind, ArtifactResult};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sibling path an artifact is archived to at `timestamp`.
///
/// The timestamp is inserted between the file stem and its extension.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use folio_storage::archive_path_for;
/// use std::path::Path;
///
/// let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(
///     archive_path_for(Path::new("out/book.txt"), &at),
///     Path::new("out/book_20250102_030405.txt"),
/// );
/// assert_eq!(
///     archive_path_for(Path::new("book"), &at),
///     Path::new("book_20250102_030405"),
/// );
/// ```
pub fn archive_path_for(path: &Path, timestamp: &DateTime<Local>) -> PathBuf {
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(file_name)
}

/// Archive the artifact at `path` using the current wall-clock time.
///
/// Returns the archived location, or `None` when there was nothing to archive.
///
/// Timestamps have one-second granularity. Two archives of the same path
/// within one second map to the same name; the second is refused with
/// [`ArtifactErrorKind::ArchiveCollision`] rather than overwriting the first.
///
/// # Errors
///
/// Returns an [`ArtifactError`] if the artifact cannot be inspected or renamed.
pub async fn archive(path: &Path) -> ArtifactResult<Option<PathBuf>> {
    archive_at(path, &Local::now()).await
}

/// Archive the artifact at `path` as if the current time were `timestamp`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub async fn archive_at(
    path: &Path,
    timestamp: &DateTime<Local>,
) -> ArtifactResult<Option<PathBuf>> {
    let exists = tokio::fs::try_exists(path).await.map_err(|e| {
        ArtifactError::new(ArtifactErrorKind::Archive(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    if !exists {
        tracing::debug!("No existing artifact to archive");
        return Ok(None);
    }

    let target = archive_path_for(path, timestamp);
    let taken = tokio::fs::try_exists(&target).await.map_err(|e| {
        ArtifactError::new(ArtifactErrorKind::Archive(format!(
            "{}: {}",
            target.display(),
            e
        )))
    })?;
    if taken {
        return Err(ArtifactError::new(ArtifactErrorKind::ArchiveCollision(
            target.display().to_string(),
        )));
    }

    tokio::fs::rename(path, &target).await.map_err(|e| {
        ArtifactError::new(ArtifactErrorKind::Archive(format!(
            "rename {} to {}: {}",
            path.display(),
            target.display(),
            e
        )))
    })?;

    tracing::info!(archived = %target.display(), "Archived existing artifact");
    Ok(Some(target))
}
