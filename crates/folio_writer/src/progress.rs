//! Progress reporting through tracing events.

use folio_core::ChapterSpec;
use folio_interface::ProgressObserver;

/// Reports progress as `info` events on the `folio::progress` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_chapter_start(&self, index: usize, total: usize, chapter: &ChapterSpec) {
        tracing::info!(
            target: "folio::progress",
            index,
            total,
            remaining = total - index,
            number = chapter.number(),
            title = %chapter.title(),
            "Writing chapter"
        );
    }

    fn on_chapter_written(&self, index: usize, total: usize, words_so_far: usize) {
        tracing::info!(
            target: "folio::progress",
            index,
            total,
            words_so_far,
            "Chapter written"
        );
    }

    fn on_complete(&self, chapters_written: usize) {
        tracing::info!(target: "folio::progress", chapters_written, "Book writing complete");
    }
}
