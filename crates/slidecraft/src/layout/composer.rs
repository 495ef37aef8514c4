//! Slide composition.
//!
//! [`SlideComposer`] turns each [`ContentSpec`] into a [`Slide`]. Every kind
//! except `cover` gets the standard header (accent rule, title, optional
//! subtitle) and an optional footnote; the rectangle left between them is
//! handed to the kind's layout function.
//!
//! A spec that fails validation or layout is dropped from the document and
//! reported in [`Composition::rejected`]; its siblings keep their order.

mod card_grid;
mod cover;
mod flow;
mod header;
mod list;
mod stats;
mod table;

use log::{debug, info, warn};

use slidecraft_core::{
    document::{Document, Slide},
    draw::Shape,
    geometry::Rect,
    theme::{ColorRole, Theme},
};

use super::LayoutError;
use crate::{
    config::LayoutConfig,
    content::{ContentSpec, SlideLayout},
    error::ValidationError,
};

/// A slide that could not be composed.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedSlide {
    index: usize,
    title: String,
    error: ValidationError,
}

impl RejectedSlide {
    /// Position of the slide in the input deck.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

/// Result of composing a whole deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    document: Document,
    rejected: Vec<RejectedSlide>,
}

impl Composition {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn rejected(&self) -> &[RejectedSlide] {
        &self.rejected
    }

    /// Consumes the composition, keeping only the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Lays out content specs using a theme and slide geometry.
///
/// The composer keeps no state between slides; composing the same spec twice
/// yields equal slides.
#[derive(Debug, Clone, Copy)]
pub struct SlideComposer<'a> {
    theme: &'a Theme,
    layout: &'a LayoutConfig,
}

impl<'a> SlideComposer<'a> {
    pub fn new(theme: &'a Theme, layout: &'a LayoutConfig) -> Self {
        Self { theme, layout }
    }

    /// Composes a single slide.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the content is structurally invalid or the
    /// slide geometry leaves no room for its content.
    pub fn compose(&self, spec: &ContentSpec) -> Result<Slide, ValidationError> {
        spec.validate()?;

        let shapes = match spec.layout() {
            SlideLayout::Cover { lines } => cover::layout(self, spec, lines),
            SlideLayout::CardGrid { columns, cards } => self.with_header(spec, |body, shapes| {
                card_grid::layout(self, body, *columns, cards, shapes)
            })?,
            SlideLayout::List { heading, items } => self.with_header(spec, |body, shapes| {
                list::layout(self, body, heading.as_deref(), items, shapes)
            })?,
            SlideLayout::Flow { steps, connector } => self.with_header(spec, |body, shapes| {
                flow::layout(self, body, steps, connector.as_deref(), shapes)
            })?,
            SlideLayout::Table { rows } => {
                self.with_header(spec, |body, shapes| table::layout(self, body, rows, shapes))?
            }
            SlideLayout::Stats { columns, stats } => self.with_header(spec, |body, shapes| {
                stats::layout(self, body, *columns, stats, shapes)
            })?,
        };

        debug!(
            kind = spec.layout().kind().as_str(),
            shapes = shapes.len();
            "Composed slide"
        );
        Ok(Slide::new(self.theme.role(ColorRole::Background), shapes))
    }

    /// Composes every spec in order, dropping the ones that fail.
    pub fn compose_all(&self, specs: &[ContentSpec]) -> Composition {
        let mut document = Document::new(self.layout.slide_size());
        let mut rejected = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            match self.compose(spec) {
                Ok(slide) => document.push(slide),
                Err(err) => {
                    warn!(index, title = spec.title(), err:err; "Skipping slide");
                    rejected.push(RejectedSlide {
                        index,
                        title: spec.title().to_string(),
                        error: err,
                    });
                }
            }
        }

        info!(
            slides = document.len(),
            rejected = rejected.len();
            "Composed deck"
        );
        Composition { document, rejected }
    }

    /// Emits the header, lets `body` fill the remaining area, then adds the
    /// footnote.
    fn with_header<F>(&self, spec: &ContentSpec, body: F) -> Result<Vec<Shape>, LayoutError>
    where
        F: FnOnce(Rect, &mut Vec<Shape>) -> Result<(), LayoutError>,
    {
        let container = header::body_rect(self, spec.footnote().is_some())?;
        let mut shapes = header::header(self, spec.title(), spec.subtitle());

        body(container, &mut shapes)?;

        if let Some(footnote) = spec.footnote() {
            shapes.push(header::footnote(self, footnote));
        }
        Ok(shapes)
    }

    fn theme(&self) -> &Theme {
        self.theme
    }

    fn metrics(&self) -> &LayoutConfig {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CardSpec, Entry, FlowStep};

    fn compose(spec: &ContentSpec) -> Result<Slide, ValidationError> {
        let theme = Theme::dark();
        let layout = LayoutConfig::default();
        SlideComposer::new(&theme, &layout).compose(spec)
    }

    fn sample_specs() -> Vec<ContentSpec> {
        vec![
            ContentSpec::new(
                "Cover",
                SlideLayout::Cover {
                    lines: vec!["Line".to_string()],
                },
            )
            .with_subtitle("Sub"),
            ContentSpec::new(
                "Cards",
                SlideLayout::CardGrid {
                    columns: 2,
                    cards: vec![CardSpec::new("a"), CardSpec::new("b")],
                },
            ),
            ContentSpec::new(
                "Flow",
                SlideLayout::Flow {
                    steps: vec![FlowStep::new("one"), FlowStep::new("two")],
                    connector: None,
                },
            )
            .with_footnote("note"),
            ContentSpec::new(
                "Table",
                SlideLayout::Table {
                    rows: vec![Entry::new("k", "v")],
                },
            ),
        ]
    }

    #[test]
    fn test_slide_background_is_theme_background() {
        let slide = compose(&sample_specs()[1]).unwrap();
        assert_eq!(slide.background(), Theme::dark().role(ColorRole::Background));
    }

    #[test]
    fn test_shapes_stay_on_slide() {
        let layout = LayoutConfig::default();
        let bounds = layout.slide_rect();
        for spec in sample_specs() {
            let slide = compose(&spec).unwrap();
            for shape in slide.shapes() {
                assert!(
                    bounds.contains(shape.rect()),
                    "{} escapes slide in {:?}",
                    shape.kind_name(),
                    spec.title()
                );
            }
        }
    }

    #[test]
    fn test_compose_all_keeps_valid_siblings() {
        let mut specs = sample_specs();
        specs.insert(
            2,
            ContentSpec::new(
                "Broken",
                SlideLayout::Stats {
                    columns: 0,
                    stats: Vec::new(),
                },
            ),
        );

        let theme = Theme::dark();
        let layout = LayoutConfig::default();
        let composition = SlideComposer::new(&theme, &layout).compose_all(&specs);

        assert_eq!(composition.document().len(), 4);
        assert_eq!(composition.rejected().len(), 1);
        let rejected = &composition.rejected()[0];
        assert_eq!(rejected.index(), 2);
        assert_eq!(rejected.title(), "Broken");
    }

    #[test]
    fn test_slide_too_small_is_rejected() {
        let theme = Theme::dark();
        let layout = LayoutConfig::default().with_slide_size(400.0, 150.0);
        let spec = ContentSpec::new(
            "Tiny",
            SlideLayout::List {
                heading: None,
                items: vec!["x".to_string()],
            },
        );

        let result = SlideComposer::new(&theme, &layout).compose(&spec);
        assert!(matches!(result, Err(ValidationError::Layout(_))));
    }
}
