//! End-to-end book writing from configured paths.

use crate::{FolioConfig, load_book, load_outline};
use derive_getters::Getters;
use folio_error::{FolioError, FolioResult};
use folio_interface::{GenerationDriver, ProgressObserver};
use folio_writer::{BookWriter, RunSummary};
use tracing::{info, instrument, warn};

/// Everything a `write` produced.
#[derive(Debug, Getters)]
pub struct BookReport {
    /// The completed run
    run: RunSummary,
    /// Backend summary of the finished book, when requested and produced
    book_summary: Option<String>,
    /// Why the requested book summary could not be produced
    summary_error: Option<FolioError>,
}

/// Write the configured book with `driver`, reporting to `progress`.
///
/// The synopsis and outline are read and validated before anything on disk
/// changes, so bad input never archives a prior artifact. When
/// `run.summarize` is set, a failed summary is recorded in the report and
/// does not fail the call.
///
/// # Errors
///
/// Returns input and outline errors, or the attributed
/// [`RunError`](folio_error::RunError) of a failed run.
#[instrument(skip_all, fields(model = %config.backend().model()))]
pub async fn write_book<D, P>(config: &FolioConfig, driver: D, progress: P) -> FolioResult<BookReport>
where
    D: GenerationDriver,
    P: ProgressObserver,
{
    let book = load_book(config.paths().synopsis()).await?;
    let outline = load_outline(config.paths().outline()).await?;
    info!(chapters = outline.len(), "Inputs loaded");

    let writer = BookWriter::new(driver, config.writer_config()).with_progress(progress);
    let run = writer.run(&book, &outline).await?;

    let (book_summary, summary_error) = if *config.run().summarize() {
        match writer.summarize().await {
            Ok(summary) => (summary, None),
            Err(e) => {
                warn!(error = %e, "Book summary failed");
                (None, Some(e))
            }
        }
    } else {
        (None, None)
    };

    Ok(BookReport {
        run,
        book_summary,
        summary_error,
    })
}
