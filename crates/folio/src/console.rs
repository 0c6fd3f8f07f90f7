//! Terminal progress output for the CLI.

use folio_core::ChapterSpec;
use folio_interface::ProgressObserver;

/// Prints one line per chapter event to stdout.
///
/// The `Chapters: n/N | Words so far: W` total is left to the final run
/// summary, so it is printed once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    fn start_line(index: usize, total: usize, chapter: &ChapterSpec) -> String {
        format!("Writing chapter {}/{}: {}", index, total, chapter.title())
    }

    fn written_line(index: usize, total: usize, words_so_far: usize) -> String {
        format!(
            "Finished chapter {}/{} ({} words so far)",
            index, total, words_so_far
        )
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_chapter_start(&self, index: usize, total: usize, chapter: &ChapterSpec) {
        println!("{}", Self::start_line(index, total, chapter));
    }

    fn on_chapter_written(&self, index: usize, total: usize, words_so_far: usize) {
        println!("{}", Self::written_line(index, total, words_so_far));
    }

    fn on_complete(&self, chapters_written: usize) {
        println!("Book writing complete: {} chapters", chapters_written);
    }
}
