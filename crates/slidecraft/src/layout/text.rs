//! Title and bullet paragraphs.

use slidecraft_core::{
    color::Color,
    draw::{Alignment, Paragraph, TextBlock},
};

/// Glyph prefixed to every bullet item.
pub const BULLET_GLYPH: &str = "▸";

/// Space after a title paragraph, in points.
pub const TITLE_SPACE_AFTER: f32 = 8.0;

/// Space before and after each bullet paragraph, in points.
pub const BULLET_SPACING: f32 = 3.0;

const DEFAULT_TITLE_SIZE: f32 = 17.0;
const DEFAULT_BODY_SIZE: f32 = 13.0;

/// Builds a [`TextBlock`] from an optional title and a list of bullet items.
///
/// Items are kept verbatim and in order. Wrapping long lines is left to the
/// writer.
///
/// # Examples
///
/// ```
/// # use slidecraft::layout::TextBlockBuilder;
/// # use slidecraft_core::color::Color;
/// let builder = TextBlockBuilder::new(Color::new("cyan").unwrap(), Color::new("white").unwrap());
/// let block = builder.build(Some("Backend"), Some("⚙️"), &["Express.js", "JWT"]);
///
/// assert_eq!(block.len(), 3);
/// assert_eq!(block.paragraphs()[0].text(), "⚙️ Backend");
/// assert_eq!(block.paragraphs()[1].text(), "▸ Express.js");
/// ```
#[derive(Debug, Clone)]
pub struct TextBlockBuilder {
    title_color: Color,
    body_color: Color,
    title_size: f32,
    body_size: f32,
    alignment: Alignment,
}

impl TextBlockBuilder {
    pub fn new(title_color: Color, body_color: Color) -> Self {
        Self {
            title_color,
            body_color,
            title_size: DEFAULT_TITLE_SIZE,
            body_size: DEFAULT_BODY_SIZE,
            alignment: Alignment::Left,
        }
    }

    pub fn with_sizes(mut self, title_size: f32, body_size: f32) -> Self {
        self.title_size = title_size;
        self.body_size = body_size;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Produces one bold title paragraph, when a title is given, followed by
    /// one paragraph per bullet.
    pub fn build<S: AsRef<str>>(
        &self,
        title: Option<&str>,
        icon: Option<&str>,
        bullets: &[S],
    ) -> TextBlock {
        let title = title.map(|title| {
            let text = match icon {
                Some(icon) => format!("{icon} {title}"),
                None => title.to_string(),
            };
            Paragraph::new(text, self.title_size, self.title_color)
                .with_bold(true)
                .with_alignment(self.alignment)
                .with_spacing(0.0, TITLE_SPACE_AFTER)
        });

        let bullets = bullets.iter().map(|item| {
            Paragraph::new(
                format!("{BULLET_GLYPH} {}", item.as_ref()),
                self.body_size,
                self.body_color,
            )
            .with_alignment(self.alignment)
            .with_spacing(BULLET_SPACING, BULLET_SPACING)
        });

        title.into_iter().chain(bullets).collect()
    }
}
