//! Command-line argument definitions for the Slidecraft CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Slidecraft deck tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input deck file (TOML, one `[[slides]]` table per slide)
    #[arg(help = "Path to the input deck file")]
    pub input: String,

    /// Path to the output SVG file; all slides are stacked in one document
    #[arg(short, long, default_value = "deck.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
