//! Append-only chapter accumulation.

use folio_core::{ChapterResult, ChapterSpec};
use folio_error::{ArtifactError, ArtifactErrorKind, ArtifactResult};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Header line introducing a chapter section.
///
/// # Examples
///
/// ```
/// use folio_core::ChapterSpec;
/// use folio_storage::chapter_header;
///
/// let chapter = ChapterSpec::new(2, "The Clue", "A letter is discovered");
/// assert_eq!(chapter_header(&chapter), "### Chapter 2: The Clue");
/// ```
pub fn chapter_header(chapter: &ChapterSpec) -> String {
    format!("### Chapter {}: {}", chapter.number(), chapter.title())
}

/// Full text appended to the artifact for one chapter.
pub fn chapter_section(result: &ChapterResult) -> String {
    format!(
        "\n\n{}\n\n{}\n",
        chapter_header(result.spec()),
        result.text().trim()
    )
}

/// Writer that appends chapter sections to the artifact.
///
/// Every append opens the file, writes one section, and syncs it to disk
/// before returning, so a crash after chapter k leaves chapters 1..k intact.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    path: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer for the artifact at `path`. Nothing is touched until
    /// the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one chapter, creating the artifact if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactErrorKind::Append`] if the file cannot be opened,
    /// written, or synced.
    #[tracing::instrument(
        skip(self, result),
        fields(
            path = %self.path.display(),
            chapter = result.spec().number(),
            sequence = result.sequence()
        )
    )]
    pub async fn append(&self, result: &ChapterResult) -> ArtifactResult<()> {
        let section = chapter_section(result);
        let append_error = |e: std::io::Error| {
            ArtifactError::new(ArtifactErrorKind::Append(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        };

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(append_error)?;

        file.write_all(section.as_bytes())
            .await
            .map_err(append_error)?;
        file.flush().await.map_err(append_error)?;
        file.sync_data().await.map_err(append_error)?;

        tracing::debug!(bytes = section.len(), "Appended chapter");
        Ok(())
    }
}

/// Read an artifact back in full.
///
/// # Errors
///
/// Returns [`ArtifactErrorKind::Read`] if the file cannot be read.
pub async fn read_artifact(path: &Path) -> ArtifactResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        ArtifactError::new(ArtifactErrorKind::Read(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })
}
