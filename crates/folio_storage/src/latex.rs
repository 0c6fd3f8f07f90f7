//! LaTeX export of a finished artifact.

use crate::read_artifact;
use folio_error::{ArtifactError, ArtifactErrorKind, ArtifactResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CHAPTER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^### Chapter (\d+): (.+?)\r?$").expect("chapter header pattern is valid")
});

/// Replace every chapter header line with a LaTeX `\chapter{title}` command.
///
/// # Examples
///
/// ```
/// use folio_storage::to_latex;
///
/// let text = "\n\n### Chapter 1: The Body\n\nIt was raining.\n";
/// assert_eq!(to_latex(text), "\n\n\\chapter{The Body}\n\nIt was raining.\n");
/// ```
pub fn to_latex(content: &str) -> String {
    CHAPTER_HEADER
        .replace_all(content, r"\chapter{$2}")
        .into_owned()
}

/// Convert the artifact at `input` and write the result to `output`.
///
/// Returns the number of chapter headers converted.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub async fn convert_file(input: &Path, output: &Path) -> ArtifactResult<usize> {
    let content = read_artifact(input).await?;
    let chapters = CHAPTER_HEADER.find_iter(&content).count();
    let latex = to_latex(&content);

    tokio::fs::write(output, latex).await.map_err(|e| {
        ArtifactError::new(ArtifactErrorKind::Write(format!(
            "{}: {}",
            output.display(),
            e
        )))
    })?;

    tracing::info!(chapters, "Converted artifact to LaTeX");
    Ok(chapters)
}
