//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use folio::ConfigOverrides;
use std::path::PathBuf;

/// Folio - write a book chapter by chapter with a local LLM
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Write a book chapter by chapter with a local LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging, including full prompts and raw responses
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the book described by a synopsis and an outline
    Write(WriteArgs),

    /// Convert a book to LaTeX chapter markup
    Convert(ConvertArgs),
}

/// Arguments for `folio write`
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Synopsis text file
    #[arg(long)]
    pub synopsis: Option<PathBuf>,

    /// Outline file with one `number,title,summary` record per line
    #[arg(long)]
    pub outline: Option<PathBuf>,

    /// Book artifact to write
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Generate endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Ask for a summary of the finished book
    #[arg(long)]
    pub summarize: bool,
}

impl WriteArgs {
    /// Flags given on the command line, as configuration overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            synopsis: self.synopsis.clone(),
            outline: self.outline.clone(),
            artifact: self.output.clone(),
            summarize: self.summarize.then_some(true),
        }
    }
}

/// Arguments for `folio convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Book to convert (defaults to the configured artifact)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Converted output file
    #[arg(long, default_value = "output.txt")]
    pub output: PathBuf,
}
