//! CLI logic for the Slidecraft deck tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{info, warn};

use slidecraft::{DeckBuilder, SlidecraftError};

/// Run the Slidecraft CLI application
///
/// Reads the deck, composes every slide and saves the result as SVG. Slides
/// that cannot be laid out are skipped with a warning; the rest of the deck
/// is still written.
///
/// # Errors
///
/// Returns `SlidecraftError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Deck parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), SlidecraftError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing deck"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DeckBuilder::new(app_config)?;
    let deck = builder.parse(&source)?;
    let composition = builder.compose(&deck);

    for rejected in composition.rejected() {
        warn!(
            index = rejected.index(),
            title = rejected.title(),
            reason = rejected.error().to_string();
            "Slide left out of the deck"
        );
    }

    builder.save_svg(composition.document(), Path::new(&args.output))?;

    info!(
        output_file = args.output,
        slides = composition.document().len();
        "SVG exported successfully"
    );

    Ok(())
}
