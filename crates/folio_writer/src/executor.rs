//! Book generation run loop.
//!
//! This module provides the writer that turns an outline into an artifact by
//! calling a generation backend once per chapter, in order.

use crate::{PromptBuilder, RunState, RunSummary};
use derive_builder::Builder;
use derive_getters::Getters;
use folio_core::{BookSpec, ChapterResult, ChapterSpec, Job, Outline};
use folio_error::{
    ArtifactError, ArtifactErrorKind, ChapterRef, FolioResult, GenerationErrorKind, RunError,
    RunStage,
};
use folio_interface::{GenerationDriver, NoopProgress, ProgressObserver};
use folio_storage::{ArtifactWriter, archive, read_artifact};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Settings for one book run.
///
/// # Examples
///
/// ```
/// use folio_writer::WriterConfig;
///
/// let config = WriterConfig::builder()
///     .artifact_path("book.txt")
///     .model("llama3.3")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.artifact_path().to_str(), Some("book.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct WriterConfig {
    /// Where the artifact is accumulated
    artifact_path: PathBuf,
    /// Model identifier sent with every request
    model: String,
}

impl WriterConfig {
    /// Create a config for `model` writing to `artifact_path`.
    pub fn new(artifact_path: impl Into<PathBuf>, model: impl Into<String>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            model: model.into(),
        }
    }

    /// Creates a new builder for `WriterConfig`.
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::default()
    }
}

/// Writes a book one chapter at a time.
///
/// A run archives any prior artifact, then for each chapter in outline order
/// builds a prompt, makes exactly one generation call, and appends the result
/// before starting the next chapter. The first failure stops the run; chapters
/// already appended stay in the artifact.
pub struct BookWriter<D: GenerationDriver, P: ProgressObserver = NoopProgress> {
    driver: D,
    progress: P,
    prompts: PromptBuilder,
    writer: ArtifactWriter,
}

impl<D: GenerationDriver> BookWriter<D, NoopProgress> {
    /// Create a writer with no progress reporting.
    pub fn new(driver: D, config: WriterConfig) -> Self {
        Self {
            driver,
            progress: NoopProgress,
            prompts: PromptBuilder::new(config.model),
            writer: ArtifactWriter::new(config.artifact_path),
        }
    }
}

impl<D: GenerationDriver, P: ProgressObserver> BookWriter<D, P> {
    /// Replace the progress observer.
    pub fn with_progress<Q: ProgressObserver>(self, progress: Q) -> BookWriter<D, Q> {
        BookWriter {
            driver: self.driver,
            progress,
            prompts: self.prompts,
            writer: self.writer,
        }
    }

    /// The backend driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The prompt builder in use.
    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Run the whole outline.
    ///
    /// # Errors
    ///
    /// Returns a [`RunError`] naming the stage, and the chapter in flight, of
    /// the first failure: archiving the prior artifact, generating a chapter,
    /// or appending it.
    #[instrument(
        skip(self, book, outline),
        fields(
            chapters = outline.len(),
            model = self.prompts.model(),
            artifact = %self.writer.path().display()
        )
    )]
    pub async fn run(&self, book: &BookSpec, outline: &Outline) -> Result<RunSummary, RunError> {
        let mut state = RunState::Idle;

        transition(&mut state, RunState::Archiving);
        let archived_to = match archive(self.writer.path()).await {
            Ok(archived) => archived,
            Err(e) => {
                transition(&mut state, RunState::Failed);
                return Err(RunError::new(RunStage::Archiving, None, e.kind));
            }
        };

        let mut job = Job::new(outline.len());
        let mut words_written = 0;

        for chapter in outline {
            let Some(index) = job.advance() else {
                break;
            };
            self.progress.on_chapter_start(index, job.total(), chapter);

            transition(&mut state, RunState::Generating(index));
            let text = match self.generate(book, chapter).await {
                Ok(text) => text,
                Err(kind) => {
                    transition(&mut state, RunState::Failed);
                    warn!(index, number = chapter.number(), error = %kind, "Generation failed");
                    return Err(RunError::new(
                        RunStage::Generating,
                        Some(chapter_ref(chapter)),
                        kind,
                    ));
                }
            };

            transition(&mut state, RunState::Appending(index));
            let result = ChapterResult::new(chapter.clone(), text, index);
            if let Err(kind) = self.append(&result).await {
                transition(&mut state, RunState::Failed);
                warn!(index, number = chapter.number(), error = %kind, "Append failed");
                return Err(RunError::new(
                    RunStage::Appending,
                    Some(chapter_ref(chapter)),
                    kind,
                ));
            }

            words_written += result.word_count();
            self.progress.on_chapter_written(index, job.total(), words_written);
        }

        transition(&mut state, RunState::Completed);
        self.progress.on_complete(job.current());
        info!(chapters = job.current(), words = words_written, "Run completed");

        Ok(RunSummary::new(
            job.current(),
            job.total(),
            words_written,
            self.writer.path().to_path_buf(),
            archived_to,
        ))
    }

    /// Ask the backend for a summary of the finished artifact.
    ///
    /// Returns `None` when there is no artifact or it is blank. This makes one
    /// extra generation call and never modifies the artifact.
    ///
    /// # Errors
    ///
    /// Returns an artifact read error if the artifact path cannot be checked
    /// or read, and the backend error if the summary call fails.
    #[instrument(skip(self))]
    pub async fn summarize(&self) -> FolioResult<Option<String>> {
        let path = self.writer.path();
        let exists = tokio::fs::try_exists(path).await.map_err(|e| {
            ArtifactError::new(ArtifactErrorKind::Read(format!("{}: {}", path.display(), e)))
        })?;
        if !exists {
            debug!("No artifact to summarize");
            return Ok(None);
        }

        let text = read_artifact(path).await?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        let request = self.prompts.summary_request(&text);
        let summary = self.driver.generate(&request).await?;
        Ok(Some(summary))
    }

    async fn generate(
        &self,
        book: &BookSpec,
        chapter: &ChapterSpec,
    ) -> Result<String, GenerationErrorKind> {
        let request = self.prompts.chapter_request(book, chapter);
        debug!(
            number = chapter.number(),
            title = %chapter.title(),
            prompt_length = request.prompt().len(),
            "Requesting chapter"
        );
        self.driver.generate(&request).await.map_err(|e| e.kind)
    }

    async fn append(&self, result: &ChapterResult) -> Result<(), ArtifactErrorKind> {
        self.writer.append(result).await.map_err(|e| e.kind)
    }
}

fn chapter_ref(chapter: &ChapterSpec) -> ChapterRef {
    ChapterRef::new(*chapter.number(), chapter.title().clone())
}

fn transition(state: &mut RunState, next: RunState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal run transition {} -> {}",
        state,
        next
    );
    debug!(from = %state, to = %next, "Run state");
    *state = next;
}
