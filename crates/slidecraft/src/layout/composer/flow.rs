//! Steps in one row joined by connector glyphs.

use slidecraft_core::{
    draw::{Alignment, Paragraph, Shape, TextBlock},
    geometry::{Rect, Size},
    theme::ColorRole,
};

use super::SlideComposer;
use crate::{
    content::FlowStep,
    layout::{LayoutError, card::CARD_INSETS, grid::Grid},
};

/// Glyph drawn between steps when the deck does not name one.
pub const DEFAULT_CONNECTOR: &str = "→";

const BAND_HEIGHT: f32 = 108.0;
const STRIP_HEIGHT: f32 = 4.32;
const TITLE_SIZE: f32 = 18.0;
const DESCRIPTION_SIZE: f32 = 13.0;
const CONNECTOR_SIZE: f32 = 28.0;
const CONNECTOR_HEIGHT: f32 = 36.0;

/// Lays the steps out on a single-row grid whose gutters hold the connectors.
///
/// The row is vertically centered in `body`. Shapes are emitted step by step,
/// each connector right after the step it leaves.
pub(super) fn layout(
    composer: &SlideComposer,
    body: Rect,
    steps: &[FlowStep],
    connector: Option<&str>,
    shapes: &mut Vec<Shape>,
) -> Result<(), LayoutError> {
    let theme = composer.theme();
    let gap = composer.metrics().connector_gap();

    let height = BAND_HEIGHT.min(body.height());
    let band = Rect::new(
        body.x(),
        body.y() + (body.height() - height) / 2.0,
        body.width(),
        height,
    );
    let grid = Grid::new(band, steps.len(), 1, gap, 0.0)?;
    let connector = connector.unwrap_or(DEFAULT_CONNECTOR);

    for (index, step) in steps.iter().enumerate() {
        let rect = grid.cell(index)?;
        let accent = theme.resolve(step.color());

        shapes.push(Shape::rectangle(rect, theme.role(ColorRole::CardBackground)));
        shapes.push(Shape::rectangle(rect.with_height(STRIP_HEIGHT), accent));

        let title = Paragraph::new(step.title(), TITLE_SIZE, accent)
            .with_bold(true)
            .with_alignment(Alignment::Center)
            .with_spacing(0.0, 4.0);
        let description = step.description().iter().map(|line| {
            Paragraph::new(line.as_str(), DESCRIPTION_SIZE, theme.role(ColorRole::LightText))
                .with_alignment(Alignment::Center)
        });
        shapes.push(Shape::text_box(
            rect.inset(CARD_INSETS),
            std::iter::once(title).chain(description).collect(),
        ));

        if index + 1 < steps.len() {
            let next = grid.cell(index + 1)?;
            let center = rect.center().midpoint(next.center());
            shapes.push(Shape::text_box(
                Rect::from_center(center, Size::new(gap, CONNECTOR_HEIGHT)),
                TextBlock::new(vec![
                    Paragraph::new(connector, CONNECTOR_SIZE, theme.role(ColorRole::MutedText))
                        .with_alignment(Alignment::Center),
                ]),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use slidecraft_core::theme::Theme;

    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn test_connectors_sit_between_steps() {
        let theme = Theme::dark();
        let config = LayoutConfig::default();
        let composer = SlideComposer::new(&theme, &config);
        let body = Rect::new(36.0, 144.0, 888.0, 360.0);
        let steps = [
            FlowStep::new("Plan"),
            FlowStep::new("Build").with_description(["Code", "Test"]),
            FlowStep::new("Ship").with_color("success"),
        ];

        let mut shapes = Vec::new();
        layout(&composer, body, &steps, None, &mut shapes).unwrap();

        // 3 shapes per step plus 2 connectors
        assert_eq!(shapes.len(), 11);

        let cards: Vec<_> = shapes
            .iter()
            .filter(|shape| shape.fill() == Some(theme.role(ColorRole::CardBackground)))
            .map(Shape::rect)
            .collect();
        let connectors: Vec<_> = shapes
            .iter()
            .filter(|shape| {
                shape
                    .text()
                    .is_some_and(|text| text.paragraphs()[0].text() == DEFAULT_CONNECTOR)
            })
            .map(Shape::rect)
            .collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(connectors.len(), 2);

        for (i, connector) in connectors.iter().enumerate() {
            assert_approx_eq!(f32, connector.x(), cards[i].max_x(), epsilon = 1e-3);
            assert_approx_eq!(f32, connector.max_x(), cards[i + 1].x(), epsilon = 1e-3);
            assert_approx_eq!(f32, connector.center().y(), cards[i].center().y(), epsilon = 1e-3);
        }

        // Band is vertically centered in the body
        assert_approx_eq!(f32, cards[0].center().y(), body.center().y(), epsilon = 1e-3);
    }

    #[test]
    fn test_custom_connector_and_step_color() {
        let theme = Theme::dark();
        let config = LayoutConfig::default();
        let composer = SlideComposer::new(&theme, &config);
        let steps = [FlowStep::new("A").with_color("danger"), FlowStep::new("B")];

        let mut shapes = Vec::new();
        layout(
            &composer,
            Rect::new(0.0, 0.0, 600.0, 200.0),
            &steps,
            Some("⇒"),
            &mut shapes,
        )
        .unwrap();

        assert_eq!(shapes[1].fill(), Some(theme.role(ColorRole::Danger)));
        let connector = shapes[3].text().unwrap();
        assert_eq!(connector.paragraphs()[0].text(), "⇒");
    }
}
