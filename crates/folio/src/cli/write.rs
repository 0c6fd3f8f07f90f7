//! Book writing command handler.

use super::WriteArgs;
use folio::{ConsoleProgress, FolioConfig, FolioResult, OllamaClient, write_book};

/// Write the book and print a summary of the run.
pub async fn write(args: WriteArgs) -> FolioResult<()> {
    let config = FolioConfig::load()?.with_overrides(args.overrides());
    tracing::debug!(?config, "Resolved configuration");

    let client = OllamaClient::new_with_url(config.backend().model(), config.backend().endpoint())?;
    let report = write_book(&config, client, ConsoleProgress).await?;

    let run = report.run();
    println!();
    println!("{}", run.progress_line());
    println!("Book written to {}", run.artifact_path().display());
    if let Some(archived) = run.archived_to() {
        println!("Previous book archived to {}", archived.display());
    }

    if let Some(summary) = report.book_summary() {
        println!();
        println!("Book summary:");
        println!("{}", summary.trim());
    }
    if let Some(e) = report.summary_error() {
        eprintln!("Book summary unavailable: {}", e);
    }

    Ok(())
}
