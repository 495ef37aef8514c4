//! Bulleted list over the whole body.

use slidecraft_core::{draw::Shape, geometry::Rect, theme::ColorRole};

use super::SlideComposer;
use crate::layout::{LayoutError, text::TextBlockBuilder};

const HEADING_SIZE: f32 = 20.0;
const ITEM_SIZE: f32 = 15.0;

pub(super) fn layout(
    composer: &SlideComposer,
    body: Rect,
    heading: Option<&str>,
    items: &[String],
    shapes: &mut Vec<Shape>,
) -> Result<(), LayoutError> {
    let theme = composer.theme();
    let text = TextBlockBuilder::new(
        theme.role(ColorRole::Highlight),
        theme.role(ColorRole::LightText),
    )
    .with_sizes(HEADING_SIZE, ITEM_SIZE)
    .build(heading, None, items);

    shapes.push(Shape::text_box(body, text));
    Ok(())
}
