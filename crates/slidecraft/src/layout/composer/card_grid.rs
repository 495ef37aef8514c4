//! Cards on a grid.

use slidecraft_core::{draw::Shape, geometry::Rect};

use super::SlideComposer;
use crate::{
    content::CardSpec,
    layout::{LayoutError, card::CardRenderer, grid},
};

/// Places `cards` row-major on a `columns`-wide grid filling `body`.
///
/// Each card contributes its background rectangle and then its text box.
pub(super) fn layout(
    composer: &SlideComposer,
    body: Rect,
    columns: usize,
    cards: &[CardSpec],
    shapes: &mut Vec<Shape>,
) -> Result<(), LayoutError> {
    if cards.is_empty() {
        return Ok(());
    }

    let metrics = composer.metrics();
    let grid = grid::Grid::new(
        body,
        columns,
        grid::rows_for(cards.len(), columns),
        metrics.column_gutter(),
        metrics.row_gutter(),
    )?;
    let renderer = CardRenderer::new(composer.theme());

    for (index, card) in cards.iter().enumerate() {
        shapes.extend(renderer.render(grid.cell(index)?, card));
    }
    Ok(())
}
