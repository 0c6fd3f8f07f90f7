//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the folio binary.

mod commands;
mod convert;
mod write;

pub use commands::{Cli, Commands, ConvertArgs, WriteArgs};
pub use convert::convert_book;
pub use write::write;
