//! Error types for Slidecraft operations.
//!
//! [`SlidecraftError`] is the top-level error returned by
//! [`DeckBuilder`](crate::DeckBuilder). [`ValidationError`] is scoped to a
//! single slide: a slide that fails validation is dropped from the deck while
//! its siblings are still composed.

use std::io;

use thiserror::Error;

use crate::{content::LayoutKind, export::ExportError, layout::LayoutError};

/// The main error type for Slidecraft operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the deck source alongside the TOML error so that
/// callers can render a labelled snippet of the offending input.
#[derive(Debug, Error)]
pub enum SlidecraftError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl SlidecraftError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

/// A content spec that cannot be laid out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{kind} layout requires at least one column")]
    ZeroColumns { kind: LayoutKind },

    #[error("flow layout requires at least one step")]
    EmptyFlow,

    #[error("slide title must not be empty")]
    EmptyTitle,

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
