//! Trait definitions for the Folio book generation pipeline.
//!
//! This crate defines the two seams of a run: the generation backend and the
//! progress side channel.

mod progress;
mod traits;

pub use progress::{NoopProgress, ProgressObserver};
pub use traits::GenerationDriver;
