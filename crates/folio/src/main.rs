//! Folio CLI binary.
//!
//! This binary provides command-line access to Folio:
//! - Write a book from a synopsis and an outline
//! - Convert a finished book to LaTeX chapter markup

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, Commands, convert_book, write};

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };

    if let Err(e) = init_tracing(log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Write(args) => write(args).await,
        Commands::Convert(args) => convert_book(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "observability")]
fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    folio::observability::init_observability(level)
}

#[cfg(not(feature = "observability"))]
fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(())
}
