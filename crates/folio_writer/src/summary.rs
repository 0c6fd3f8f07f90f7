//! Completed-run summary.

use derive_getters::Getters;
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RunSummary {
    /// Chapters appended to the artifact
    chapters_written: usize,
    /// Chapters in the outline
    total_chapters: usize,
    /// Words of generated text appended
    words_written: usize,
    /// Artifact path
    artifact_path: PathBuf,
    /// Where a prior artifact was moved, if there was one
    archived_to: Option<PathBuf>,
}

impl RunSummary {
    pub(crate) fn new(
        chapters_written: usize,
        total_chapters: usize,
        words_written: usize,
        artifact_path: PathBuf,
        archived_to: Option<PathBuf>,
    ) -> Self {
        Self {
            chapters_written,
            total_chapters,
            words_written,
            artifact_path,
            archived_to,
        }
    }

    /// One-line progress statement.
    ///
    /// Reads `Chapters: n/N | Words so far: W`.
    pub fn progress_line(&self) -> String {
        format!(
            "Chapters: {}/{} | Words so far: {}",
            self.chapters_written, self.total_chapters, self.words_written
        )
    }
}
