//! Error types for the Folio library.
//!
//! This crate provides the error taxonomy used throughout the Folio workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use folio_error::{FolioResult, GenerationError, GenerationErrorKind};
//!
//! fn call_backend() -> FolioResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::BackendUnavailable(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(call_backend().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod config;
mod error;
mod generation;
mod input;
mod outline;
mod run;

pub use artifact::{ArtifactError, ArtifactErrorKind, ArtifactResult};
pub use config::ConfigError;
pub use error::{FolioError, FolioErrorKind, FolioResult};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use input::{InputError, InputErrorKind};
pub use outline::{OutlineError, OutlineErrorKind};
pub use run::{ChapterRef, RunError, RunFailure, RunStage};
