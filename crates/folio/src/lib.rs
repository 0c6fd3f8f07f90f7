//! Folio - write a book chapter by chapter with a local LLM
//!
//! Folio reads a synopsis and a chapter outline, then asks a generation
//! backend (Ollama by default) for one chapter at a time, appending each to a
//! single text artifact as soon as it arrives. A prior artifact is archived
//! under a timestamped name before the first chapter is requested.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio::{ConsoleProgress, FolioConfig, OllamaClient, write_book};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FolioConfig::load()?;
//!     let client = OllamaClient::new_with_url(
//!         config.backend().model(),
//!         config.backend().endpoint(),
//!     )?;
//!
//!     let report = write_book(&config, client, ConsoleProgress).await?;
//!     println!("{}", report.run().progress_line());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry stdout tracer bridged from `tracing`
//!
//! # Architecture
//!
//! - `folio_error` - Error types
//! - `folio_core` - Outline, chapter, and request types
//! - `folio_interface` - `GenerationDriver` and `ProgressObserver` traits
//! - `folio_models` - Ollama client
//! - `folio_storage` - Archiving, appending, and LaTeX export
//! - `folio_writer` - Prompt construction and the chapter loop
//!
//! This crate (`folio`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod console;
mod input;
mod pipeline;

#[cfg(feature = "observability")]
pub mod observability;

pub use config::{BackendConfig, ConfigOverrides, FolioConfig, PathsConfig, RunConfig};
pub use console::ConsoleProgress;
pub use input::{load_book, load_outline};
pub use pipeline::{BookReport, write_book};

// Re-export workspace crates
pub use folio_core::*;
pub use folio_error::*;
pub use folio_interface::*;
pub use folio_models::*;
pub use folio_storage::*;
pub use folio_writer::*;
