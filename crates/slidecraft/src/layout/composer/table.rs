//! Label/value pairs in two columns.

use slidecraft_core::{
    draw::{Paragraph, Shape, TextBlock},
    geometry::Rect,
    theme::ColorRole,
};

use super::SlideComposer;
use crate::{
    content::Entry,
    layout::{LayoutError, card::CARD_INSETS, grid::Grid},
};

const LABEL_SIZE: f32 = 14.0;
const VALUE_SIZE: f32 = 11.0;

/// Splits `rows` over two columns, the first `ceil(n / 2)` on the left.
///
/// Each column is a card background with one text box of alternating bold
/// label and muted value paragraphs.
pub(super) fn layout(
    composer: &SlideComposer,
    body: Rect,
    rows: &[Entry],
    shapes: &mut Vec<Shape>,
) -> Result<(), LayoutError> {
    if rows.is_empty() {
        return Ok(());
    }

    let theme = composer.theme();
    let grid = Grid::new(body, 2, 1, composer.metrics().column_gutter(), 0.0)?;
    let (left, right) = rows.split_at(rows.len().div_ceil(2));

    for (index, entries) in [left, right].into_iter().enumerate() {
        if entries.is_empty() {
            continue;
        }

        let rect = grid.cell(index)?;
        let text: TextBlock = entries
            .iter()
            .flat_map(|entry| {
                [
                    Paragraph::new(entry.label(), LABEL_SIZE, theme.role(ColorRole::Highlight))
                        .with_bold(true)
                        .with_spacing(6.0, 0.0),
                    Paragraph::new(entry.value(), VALUE_SIZE, theme.role(ColorRole::MutedText))
                        .with_spacing(2.0, 4.0),
                ]
            })
            .collect();

        shapes.push(Shape::rectangle(rect, theme.role(ColorRole::CardBackground)));
        shapes.push(Shape::text_box(rect.inset(CARD_INSETS), text));
    }
    Ok(())
}
