//! Core data types for the Folio book generation pipeline.
//!
//! This crate provides the in-memory model of a book run: the synopsis, the
//! ordered chapter outline, the request handed to a generation backend, and
//! the tagged outcome a backend call resolves to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod chapter;
mod job;
mod outcome;
mod outline;
mod request;

pub use book::BookSpec;
pub use chapter::{ChapterResult, ChapterSpec, ChapterSpecBuilder, ChapterSpecBuilderError};
pub use job::Job;
pub use outcome::{FailureKind, GenerationOutcome};
pub use outline::Outline;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError};
