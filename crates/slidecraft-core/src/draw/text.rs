//! Styled paragraphs and the text blocks that own them.
//!
//! # Quick Start
//!
//! ```
//! # use slidecraft_core::{color::Color, draw::{Alignment, Paragraph, TextBlock}};
//! let white = Color::new("white").unwrap();
//! let heading = Paragraph::new("Backend", 17.0, white)
//!     .with_bold(true)
//!     .with_spacing(0.0, 8.0);
//! let body = Paragraph::new("▸ Express.js", 13.0, white).with_alignment(Alignment::Left);
//!
//! let block = TextBlock::new(vec![heading, body]);
//! assert_eq!(block.len(), 2);
//! assert!(block.paragraphs()[0].bold());
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Horizontal alignment of a paragraph within its text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A single logical paragraph with uniform styling.
///
/// Sizes and spacing are in points. A paragraph is assembled with the
/// `with_*` methods and is not modified once it is placed in a [`TextBlock`].
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    text: String,
    font_size: f32,
    color: Color,
    bold: bool,
    alignment: Alignment,
    space_before: f32,
    space_after: f32,
}

impl Paragraph {
    /// Creates a regular-weight, left-aligned paragraph without extra spacing.
    pub fn new(text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            bold: false,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the space inserted before and after the paragraph.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn space_before(&self) -> f32 {
        self.space_before
    }

    pub fn space_after(&self) -> f32 {
        self.space_after
    }
}

/// An ordered sequence of paragraphs owned by one text box.
///
/// Render order is list order. An empty block is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    paragraphs: Vec<Paragraph>,
}

impl TextBlock {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl FromIterator<Paragraph> for TextBlock {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
