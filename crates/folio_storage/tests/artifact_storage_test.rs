//! Tests for archiving, appending, and exporting artifacts.

use chrono::{Local, TimeZone};
use folio_core::{ChapterResult, ChapterSpec};
use folio_error::ArtifactErrorKind;
use folio_storage::{
    ArtifactWriter, archive, archive_at, archive_path_for, convert_file, read_artifact,
};
use tempfile::TempDir;

fn chapter(number: u32, title: &str, text: &str, sequence: usize) -> ChapterResult {
    ChapterResult::new(ChapterSpec::new(number, title, "summary"), text, sequence)
}

#[tokio::test]
async fn test_archive_without_artifact_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("book.txt");

    let archived = archive(&path).await.unwrap();

    assert!(archived.is_none());
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_archive_moves_artifact_aside() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("book.txt");
    std::fs::write(&path, "first run").unwrap();

    let at = Local.with_ymd_and_hms(2026, 10, 18, 14, 25, 30).unwrap();
    let archived = archive_at(&path, &at).await.unwrap().unwrap();

    assert_eq!(archived, temp_dir.path().join("book_20261018_142530.txt"));
    assert!(!path.exists());
    assert_eq!(std::fs::read_to_string(&archived).unwrap(), "first run");
}

#[tokio::test]
async fn test_archive_refuses_to_overwrite_existing_archive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("book.txt");
    let at = Local.with_ymd_and_hms(2026, 10, 18, 14, 25, 30).unwrap();
    let taken = archive_path_for(&path, &at);

    std::fs::write(&taken, "older archive").unwrap();
    std::fs::write(&path, "newer run").unwrap();

    let err = archive_at(&path, &at).await.unwrap_err();

    assert!(matches!(err.kind, ArtifactErrorKind::ArchiveCollision(_)));
    assert_eq!(std::fs::read_to_string(&taken).unwrap(), "older archive");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "newer run");
}

#[tokio::test]
async fn test_append_creates_and_accumulates_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("book.txt");
    let writer = ArtifactWriter::new(&path);

    writer
        .append(&chapter(1, "The Body", "A corpse lay still.", 1))
        .await
        .unwrap();
    let after_first = read_artifact(&path).await.unwrap();
    assert_eq!(after_first, "\n\n### Chapter 1: The Body\n\nA corpse lay still.\n");

    writer
        .append(&chapter(2, "The Clue", "A letter fluttered.", 2))
        .await
        .unwrap();
    let content = read_artifact(&path).await.unwrap();

    assert!(content.starts_with(&after_first));
    let first = content.find("### Chapter 1: The Body").unwrap();
    let second = content.find("### Chapter 2: The Clue").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_append_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("book.txt");
    let writer = ArtifactWriter::new(&path);

    let err = writer
        .append(&chapter(1, "Nowhere", "text", 1))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ArtifactErrorKind::Append(_)));
}

#[tokio::test]
async fn test_read_missing_artifact_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_artifact(&temp_dir.path().join("absent.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ArtifactErrorKind::Read(_)));
}

#[tokio::test]
async fn test_convert_file_writes_latex() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("book.txt");
    let output = temp_dir.path().join("book.tex");
    let writer = ArtifactWriter::new(&input);

    writer
        .append(&chapter(1, "The Body", "Rain.", 1))
        .await
        .unwrap();
    writer
        .append(&chapter(2, "The Clue", "Ink.", 2))
        .await
        .unwrap();

    let converted = convert_file(&input, &output).await.unwrap();

    assert_eq!(converted, 2);
    let latex = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        latex,
        "\n\n\\chapter{The Body}\n\nRain.\n\n\n\\chapter{The Clue}\n\nInk.\n"
    );
}
