//! Positioned shapes.

use crate::{color::Color, draw::TextBlock, geometry::Rect};

/// A positioned visual primitive on a slide.
///
/// Shapes are emitted in painter's order: a shape listed later is drawn on top
/// of earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A filled rectangle without an outline.
    Rectangle { rect: Rect, fill: Color },
    /// A text frame holding its own [`TextBlock`].
    TextBox { rect: Rect, text: TextBlock },
}

impl Shape {
    pub fn rectangle(rect: Rect, fill: Color) -> Self {
        Self::Rectangle { rect, fill }
    }

    pub fn text_box(rect: Rect, text: TextBlock) -> Self {
        Self::TextBox { rect, text }
    }

    /// Returns the rectangle the shape occupies.
    pub fn rect(&self) -> Rect {
        match self {
            Self::Rectangle { rect, .. } | Self::TextBox { rect, .. } => *rect,
        }
    }

    /// Returns a short name for the shape variant, used in logs and errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::TextBox { .. } => "text box",
        }
    }

    pub fn is_rectangle(&self) -> bool {
        matches!(self, Self::Rectangle { .. })
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self, Self::TextBox { .. })
    }

    /// Returns the text block of a text box.
    pub fn text(&self) -> Option<&TextBlock> {
        match self {
            Self::TextBox { text, .. } => Some(text),
            Self::Rectangle { .. } => None,
        }
    }

    /// Returns the fill of a rectangle.
    pub fn fill(&self) -> Option<Color> {
        match self {
            Self::Rectangle { fill, .. } => Some(*fill),
            Self::TextBox { .. } => None,
        }
    }
}
