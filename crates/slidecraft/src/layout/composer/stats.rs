//! Large figures with captions.

use slidecraft_core::{
    draw::{Alignment, Paragraph, Shape, TextBlock},
    geometry::Rect,
    theme::ColorRole,
};

use super::SlideComposer;
use crate::{
    content::Entry,
    layout::{LayoutError, card::CARD_INSETS, grid},
};

const VALUE_SIZE: f32 = 42.0;
const LABEL_SIZE: f32 = 16.0;

pub(super) fn layout(
    composer: &SlideComposer,
    body: Rect,
    columns: usize,
    stats: &[Entry],
    shapes: &mut Vec<Shape>,
) -> Result<(), LayoutError> {
    if stats.is_empty() {
        return Ok(());
    }

    let theme = composer.theme();
    let metrics = composer.metrics();
    let grid = grid::Grid::new(
        body,
        columns,
        grid::rows_for(stats.len(), columns),
        metrics.column_gutter(),
        metrics.row_gutter(),
    )?;

    for (index, stat) in stats.iter().enumerate() {
        let rect = grid.cell(index)?;
        let text = TextBlock::new(vec![
            Paragraph::new(stat.value(), VALUE_SIZE, theme.role(ColorRole::Accent))
                .with_bold(true)
                .with_alignment(Alignment::Center),
            Paragraph::new(stat.label(), LABEL_SIZE, theme.role(ColorRole::MutedText))
                .with_alignment(Alignment::Center)
                .with_spacing(4.0, 0.0),
        ]);

        shapes.push(Shape::rectangle(rect, theme.role(ColorRole::CardBackground)));
        shapes.push(Shape::text_box(rect.inset(CARD_INSETS), text));
    }
    Ok(())
}
