//! LaTeX conversion command handler.

use super::ConvertArgs;
use folio::{FolioConfig, FolioResult, convert_file};

/// Convert a book's chapter headers to LaTeX.
pub async fn convert_book(args: ConvertArgs) -> FolioResult<()> {
    let input = match args.input {
        Some(input) => input,
        None => FolioConfig::load()?.paths().artifact().clone(),
    };

    let chapters = convert_file(&input, &args.output).await?;
    println!(
        "Conversion complete: {} chapters. LaTeX content saved to {}.",
        chapters,
        args.output.display()
    );
    Ok(())
}
