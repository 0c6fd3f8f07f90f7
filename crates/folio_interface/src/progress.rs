//! Progress side channel for multi-chapter runs.

use folio_core::ChapterSpec;

/// Observer notified as a run moves through its chapters.
///
/// Observation only: no implementation may change the outcome of a run,
/// and every method defaults to doing nothing.
pub trait ProgressObserver: Send + Sync {
    /// Called before chapter `index` (1-based) of `total` is generated.
    fn on_chapter_start(&self, index: usize, total: usize, chapter: &ChapterSpec) {
        let _ = (index, total, chapter);
    }

    /// Called after chapter `index` of `total` has been durably appended.
    ///
    /// `words_so_far` counts the generated words written during this run.
    fn on_chapter_written(&self, index: usize, total: usize, words_so_far: usize) {
        let _ = (index, total, words_so_far);
    }

    /// Called once after the last chapter, with the number of chapters written.
    fn on_complete(&self, chapters_written: usize) {
        let _ = chapters_written;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

impl<P: ProgressObserver + ?Sized> ProgressObserver for &P {
    fn on_chapter_start(&self, index: usize, total: usize, chapter: &ChapterSpec) {
        (**self).on_chapter_start(index, total, chapter)
    }

    fn on_chapter_written(&self, index: usize, total: usize, words_so_far: usize) {
        (**self).on_chapter_written(index, total, words_so_far)
    }

    fn on_complete(&self, chapters_written: usize) {
        (**self).on_complete(chapters_written)
    }
}
