//! Output artifact handling for Folio.
//!
//! The artifact is a plain UTF-8 text file that grows one chapter section at
//! a time. This crate owns everything that touches it:
//!
//! - **Archiving**: before a run, a prior artifact is renamed to a
//!   timestamp-qualified sibling so it is never overwritten
//! - **Accumulation**: each chapter is appended and synced before the next
//!   one is generated
//! - **Export**: an artifact can be rewritten with LaTeX chapter commands
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ChapterResult, ChapterSpec};
//! use folio_storage::{ArtifactWriter, archive};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = std::path::Path::new("/tmp/book.txt");
//! archive(path).await?;
//!
//! let writer = ArtifactWriter::new(path);
//! let chapter = ChapterSpec::new(1, "The Body", "A corpse is found");
//! writer.append(&ChapterResult::new(chapter, "It was raining.", 1)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod artifact;
mod latex;

pub use archive::{archive, archive_at, archive_path_for};
pub use artifact::{ArtifactWriter, chapter_header, chapter_section, read_artifact};
pub use latex::{convert_file, to_latex};
