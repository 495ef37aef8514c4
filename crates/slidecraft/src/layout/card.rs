//! Card drawing: a filled background with a title and bullets on top.

use slidecraft_core::{
    draw::Shape,
    geometry::{Insets, Rect},
    theme::{ColorRole, Theme},
};

use super::text::TextBlockBuilder;
use crate::content::CardSpec;

/// Padding between a card's edge and its text.
pub const CARD_INSETS: Insets = Insets::symmetric(10.8, 18.0);

/// Renders [`CardSpec`]s into shapes.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer<'a> {
    theme: &'a Theme,
    title_size: f32,
    body_size: f32,
}

impl<'a> CardRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            title_size: 17.0,
            body_size: 13.0,
        }
    }

    pub fn with_sizes(mut self, title_size: f32, body_size: f32) -> Self {
        self.title_size = title_size;
        self.body_size = body_size;
        self
    }

    /// Returns the background rectangle followed by the text box.
    ///
    /// The background fills `rect`; the text box is `rect` shrunk by
    /// [`CARD_INSETS`].
    pub fn render(&self, rect: Rect, card: &CardSpec) -> [Shape; 2] {
        let background = Shape::rectangle(rect, self.theme.role(ColorRole::CardBackground));

        let text = TextBlockBuilder::new(
            self.theme.resolve(card.color()),
            self.theme.role(ColorRole::LightText),
        )
        .with_sizes(self.title_size, self.body_size)
        .build(Some(card.title()), card.icon(), card.bullets());

        [background, Shape::text_box(rect.inset(CARD_INSETS), text)]
    }
}
