//! Tests for writing a book from configured files.

use async_trait::async_trait;
use folio::{
    ConfigOverrides, FolioConfig, FolioErrorKind, GenerateRequest, GenerationDriver,
    GenerationError, GenerationErrorKind, GenerationResult, InputErrorKind, NoopProgress,
    OutlineErrorKind, write_book,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Mock driver that counts calls and can fail every summary request.
#[derive(Default)]
struct CountingDriver {
    calls: AtomicUsize,
    fail_summary: bool,
}

impl CountingDriver {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationDriver for CountingDriver {
    async fn generate(&self, req: &GenerateRequest) -> GenerationResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if req.prompt().contains("concise summary") {
            if self.fail_summary {
                return Err(GenerationError::new(GenerationErrorKind::BackendUnavailable(
                    "connection refused".to_string(),
                )));
            }
            return Ok("A short summary.".to_string());
        }
        Ok(format!("Chapter text from call {call}."))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

struct Fixture {
    root: TempDir,
    synopsis: PathBuf,
    outline: PathBuf,
    artifact: PathBuf,
}

impl Fixture {
    fn new(synopsis: &str, outline: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let fixture = Self {
            synopsis: dir.path().join("input.txt"),
            outline: dir.path().join("outline.txt"),
            artifact: dir.path().join("book.txt"),
            root: dir,
        };
        std::fs::write(&fixture.synopsis, synopsis).unwrap();
        std::fs::write(&fixture.outline, outline).unwrap();
        fixture
    }

    fn config(&self, summarize: bool) -> FolioConfig {
        FolioConfig::default().with_overrides(ConfigOverrides {
            synopsis: Some(self.synopsis.clone()),
            outline: Some(self.outline.clone()),
            artifact: Some(self.artifact.clone()),
            summarize: Some(summarize),
            ..Default::default()
        })
    }

    fn dir(&self) -> &Path {
        self.root.path()
    }
}

#[tokio::test]
async fn test_write_book_end_to_end() {
    let fixture = Fixture::new(
        "A detective story in 1920s Paris\n",
        "1,The Body,A corpse is found\n2,The Clue,A letter is discovered\n",
    );
    let driver = CountingDriver::default();

    let report = write_book(&fixture.config(false), &driver, NoopProgress)
        .await
        .unwrap();

    assert_eq!(*report.run().chapters_written(), 2);
    assert!(report.book_summary().is_none());
    assert!(report.summary_error().is_none());
    assert_eq!(driver.calls(), 2);

    let artifact = std::fs::read_to_string(&fixture.artifact).unwrap();
    assert!(artifact.contains("### Chapter 1: The Body\n\nChapter text from call 1."));
    assert!(artifact.contains("### Chapter 2: The Clue\n\nChapter text from call 2."));
}

#[tokio::test]
async fn test_malformed_outline_touches_nothing() {
    let fixture = Fixture::new("A story.", "1,Good,Fine\n2,Bad\n");
    std::fs::write(&fixture.artifact, "previous book").unwrap();
    let driver = CountingDriver::default();

    let err = write_book(&fixture.config(false), &driver, NoopProgress)
        .await
        .unwrap_err();

    match err.kind() {
        FolioErrorKind::Outline(e) => assert!(matches!(
            e.kind,
            OutlineErrorKind::MalformedRecord { position: 2, .. }
        )),
        other => panic!("expected outline error, got {other}"),
    }
    assert_eq!(driver.calls(), 0);
    assert_eq!(
        std::fs::read_to_string(&fixture.artifact).unwrap(),
        "previous book"
    );
    assert_eq!(std::fs::read_dir(fixture.dir()).unwrap().count(), 3);
}

#[tokio::test]
async fn test_empty_synopsis_is_rejected_before_archiving() {
    let fixture = Fixture::new("  \n\t\n", "1,Only,The only chapter\n");
    std::fs::write(&fixture.artifact, "previous book").unwrap();
    let driver = CountingDriver::default();

    let err = write_book(&fixture.config(false), &driver, NoopProgress)
        .await
        .unwrap_err();

    match err.kind() {
        FolioErrorKind::Input(e) => assert_eq!(e.kind, InputErrorKind::EmptySynopsis),
        other => panic!("expected input error, got {other}"),
    }
    assert_eq!(driver.calls(), 0);
    assert!(fixture.artifact.exists());
}

#[tokio::test]
async fn test_missing_synopsis_is_read_error() {
    let fixture = Fixture::new("A story.", "1,Only,The only chapter\n");
    std::fs::remove_file(&fixture.synopsis).unwrap();

    let err = write_book(&fixture.config(false), CountingDriver::default(), NoopProgress)
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        FolioErrorKind::Input(e) if matches!(e.kind, InputErrorKind::Read(_))
    ));
}

#[tokio::test]
async fn test_summary_is_requested_after_the_run() {
    let fixture = Fixture::new("A story.", "1,Only,The only chapter\n");
    let driver = CountingDriver::default();

    let report = write_book(&fixture.config(true), &driver, NoopProgress)
        .await
        .unwrap();

    assert_eq!(report.book_summary().as_deref(), Some("A short summary."));
    assert_eq!(driver.calls(), 2);
    let artifact = std::fs::read_to_string(&fixture.artifact).unwrap();
    assert!(!artifact.contains("A short summary."));
}

#[tokio::test]
async fn test_summary_failure_keeps_completed_run() {
    let fixture = Fixture::new("A story.", "1,Only,The only chapter\n");
    let driver = CountingDriver {
        fail_summary: true,
        ..Default::default()
    };

    let report = write_book(&fixture.config(true), &driver, NoopProgress)
        .await
        .unwrap();

    assert_eq!(*report.run().chapters_written(), 1);
    assert!(report.book_summary().is_none());
    assert!(matches!(
        report.summary_error().as_ref().map(|e| e.kind()),
        Some(FolioErrorKind::Generation(_))
    ));
}
