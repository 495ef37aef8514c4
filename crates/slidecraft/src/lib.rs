//! Slidecraft - Layout and composition engine for slide decks.
//!
//! Decks are described as TOML data: an ordered list of slides, each with a
//! title and a layout kind (cover, card grid, list, flow, table, stats). The
//! engine positions every card, paragraph and connector on a fixed grid,
//! resolves semantic color roles through a theme, and hands the finished
//! document to a writer.

pub mod config;
pub mod content;
pub mod export;
pub mod layout;

mod error;

pub use slidecraft_core::{color, document, draw, geometry, theme};

pub use error::{SlidecraftError, ValidationError};

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use content::Deck;
use document::Document;
use export::SvgWriter;
use layout::{Composition, SlideComposer};
use theme::Theme;

/// Builder for parsing, composing and rendering decks.
///
/// # Examples
///
/// ```rust,no_run
/// use slidecraft::{DeckBuilder, config::AppConfig};
///
/// let source = r#"
/// [[slides]]
/// title = "Overview"
/// kind = "list"
/// items = ["Products", "Versions"]
/// "#;
///
/// let builder = DeckBuilder::new(AppConfig::default()).expect("valid config");
///
/// let deck = builder.parse(source).expect("Failed to parse");
/// let composition = builder.compose(&deck);
/// let svg = builder.render_svg(composition.document())
///     .expect("Failed to render");
/// ```
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    config: AppConfig,
    theme: Theme,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl DeckBuilder {
    /// Create a new deck builder with the given configuration.
    ///
    /// The theme is built once here and shared by every slide.
    ///
    /// # Errors
    ///
    /// Returns `SlidecraftError::Config` if a color override is invalid.
    pub fn new(config: AppConfig) -> Result<Self, SlidecraftError> {
        let theme = config.style().theme().map_err(SlidecraftError::Config)?;
        Ok(Self { config, theme })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Parse a TOML deck.
    ///
    /// # Errors
    ///
    /// Returns `SlidecraftError::Parse` with the source attached when the
    /// deck is not valid TOML or does not match the deck schema.
    pub fn parse(&self, source: &str) -> Result<Deck, SlidecraftError> {
        info!("Parsing deck");

        let deck: Deck =
            toml::from_str(source).map_err(|err| SlidecraftError::new_parse_error(err, source))?;

        debug!(slides = deck.len(); "Deck parsed successfully");
        trace!(deck:?; "Parsed deck");

        Ok(deck)
    }

    /// Compose every slide of the deck.
    ///
    /// Invalid slides are left out of the document and listed in
    /// [`Composition::rejected`].
    pub fn compose(&self, deck: &Deck) -> Composition {
        SlideComposer::new(&self.theme, self.config.layout()).compose_all(deck.slides())
    }

    fn svg_writer(&self, document: &Document) -> SvgWriter {
        SvgWriter::new(document.slide_size())
            .with_slide_gap(self.config.layout().slide_gap())
            .with_font_family(self.theme.font_family())
    }

    /// Render a composed document to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `SlidecraftError::Export` if the writer rejects a shape.
    pub fn render_svg(&self, document: &Document) -> Result<String, SlidecraftError> {
        let mut writer = self.svg_writer(document);
        export::write_slides(document, &mut writer)?;

        info!(slides = document.len(); "SVG rendered successfully");
        Ok(writer.to_svg_string())
    }

    /// Write a composed document to an SVG file.
    ///
    /// The file only appears once it is completely written.
    ///
    /// # Errors
    ///
    /// Returns `SlidecraftError::Export` with the failing slide, shape or path.
    pub fn save_svg(&self, document: &Document, path: &Path) -> Result<(), SlidecraftError> {
        let mut writer = self.svg_writer(document);
        export::write_document(document, &mut writer, path)?;
        Ok(())
    }
}
