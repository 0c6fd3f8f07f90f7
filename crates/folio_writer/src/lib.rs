//! Chapter-by-chapter book generation for Folio.
//!
//! A [`BookWriter`] takes a synopsis and an outline and, strictly in outline
//! order, builds a prompt for each chapter, sends it to a
//! [`GenerationDriver`](folio_interface::GenerationDriver), and appends the
//! result to the output artifact before moving on. Any prior artifact is
//! archived once, before the first chapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_writer::{BookWriter, WriterConfig};
//!
//! let config = WriterConfig::builder()
//!     .artifact_path("book.txt")
//!     .model("llama3.3")
//!     .build()?;
//! let summary = BookWriter::new(client, config).run(&book, &outline).await?;
//! println!("{}", summary.progress_line());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod progress;
mod prompt;
mod state;
mod summary;

pub use executor::{BookWriter, WriterConfig, WriterConfigBuilder, WriterConfigBuilderError};
pub use progress::TracingProgress;
pub use prompt::PromptBuilder;
pub use state::RunState;
pub use summary::RunSummary;
