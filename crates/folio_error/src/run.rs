//! Run-level errors attributing a failure to a stage and chapter.

use crate::{ArtifactErrorKind, GenerationErrorKind};

/// Pipeline stage in which a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RunStage {
    /// Moving a prior artifact aside before the first chapter
    #[display("archiving")]
    Archiving,
    /// Waiting on the backend for a chapter
    #[display("generating")]
    Generating,
    /// Writing a chapter to the artifact
    #[display("appending")]
    Appending,
}

/// The chapter in flight when a run failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("chapter {} '{}'", number, title)]
pub struct ChapterRef {
    /// Chapter number as written in the outline
    pub number: u32,
    /// Chapter title as written in the outline
    pub title: String,
}

impl ChapterRef {
    /// Create a new chapter reference.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}

/// Underlying cause of a run failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum RunFailure {
    /// Backend failure
    #[display("{}", _0)]
    Generation(GenerationErrorKind),
    /// Artifact I/O failure
    #[display("{}", _0)]
    Artifact(ArtifactErrorKind),
}

/// A fatal run failure, attributed to the stage and chapter in flight.
///
/// # Examples
///
/// ```
/// use folio_error::{ChapterRef, GenerationErrorKind, RunError, RunStage};
///
/// let err = RunError::new(
///     RunStage::Generating,
///     Some(ChapterRef::new(3, "The Chase")),
///     GenerationErrorKind::EmptyGeneration,
/// );
/// let message = format!("{}", err);
/// assert!(message.contains("generating"));
/// assert!(message.contains("chapter 3 'The Chase'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Run Error: failed while {} {}: {}",
    stage,
    chapter.as_ref().map(ToString::to_string).unwrap_or_else(|| "the artifact".to_string()),
    cause
)]
pub struct RunError {
    /// Stage that failed
    pub stage: RunStage,
    /// Chapter in flight, if the failure happened inside the chapter loop
    pub chapter: Option<ChapterRef>,
    /// What went wrong
    pub cause: RunFailure,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RunError {
    /// Create a new run error with automatic location tracking.
    #[track_caller]
    pub fn new(stage: RunStage, chapter: Option<ChapterRef>, cause: impl Into<RunFailure>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            chapter,
            cause: cause.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
