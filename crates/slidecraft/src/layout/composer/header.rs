//! Standard slide header, footnote band and the body area between them.

use slidecraft_core::{
    draw::{Paragraph, Shape, TextBlock},
    geometry::Rect,
    theme::ColorRole,
};

use super::SlideComposer;
use crate::layout::LayoutError;

const RULE_Y: f32 = 36.0;
const RULE_WIDTH: f32 = 252.0;
const RULE_HEIGHT: f32 = 2.88;

const TITLE_Y: f32 = 43.2;
const TITLE_HEIGHT: f32 = 50.4;
const TITLE_SIZE: f32 = 36.0;

const SUBTITLE_Y: f32 = 86.4;
const SUBTITLE_HEIGHT: f32 = 36.0;
const SUBTITLE_SIZE: f32 = 18.0;

const BODY_TOP: f32 = 144.0;

const FOOTNOTE_HEIGHT: f32 = 28.8;
const FOOTNOTE_SIZE: f32 = 11.0;

/// Accent rule, title and optional subtitle.
pub(super) fn header(composer: &SlideComposer, title: &str, subtitle: Option<&str>) -> Vec<Shape> {
    let theme = composer.theme();
    let metrics = composer.metrics();
    let margin = metrics.margin();
    let width = metrics.slide_width() - 2.0 * margin;

    let mut shapes = vec![
        Shape::rectangle(
            Rect::new(margin, RULE_Y, RULE_WIDTH.min(width), RULE_HEIGHT),
            theme.role(ColorRole::Accent),
        ),
        Shape::text_box(
            Rect::new(margin, TITLE_Y, width, TITLE_HEIGHT),
            TextBlock::new(vec![
                Paragraph::new(title, TITLE_SIZE, theme.role(ColorRole::Text)).with_bold(true),
            ]),
        ),
    ];

    if let Some(subtitle) = subtitle {
        shapes.push(Shape::text_box(
            Rect::new(margin, SUBTITLE_Y, width, SUBTITLE_HEIGHT),
            TextBlock::new(vec![Paragraph::new(
                subtitle,
                SUBTITLE_SIZE,
                theme.role(ColorRole::MutedText),
            )]),
        ));
    }

    shapes
}

/// Lowest y content may reach: the bottom margin, or the top of the
/// footnote band less a row gutter.
pub(super) fn content_bottom(composer: &SlideComposer, with_footnote: bool) -> f32 {
    let metrics = composer.metrics();
    let bottom = metrics.slide_height() - metrics.margin();
    if with_footnote {
        bottom - FOOTNOTE_HEIGHT - metrics.row_gutter()
    } else {
        bottom
    }
}

/// The area left for slide content below the header.
///
/// With a footnote the area also stops short of the footnote band.
pub(super) fn body_rect(composer: &SlideComposer, with_footnote: bool) -> Result<Rect, LayoutError> {
    let metrics = composer.metrics();
    let margin = metrics.margin();
    let bottom = content_bottom(composer, with_footnote);

    let width = metrics.slide_width() - 2.0 * margin;
    let height = bottom - BODY_TOP;
    if width <= 0.0 || height <= 0.0 {
        return Err(LayoutError::DegenerateContainer { width, height });
    }

    Ok(Rect::new(margin, BODY_TOP, width, height))
}

/// Small muted text along the bottom margin.
pub(super) fn footnote(composer: &SlideComposer, text: &str) -> Shape {
    let metrics = composer.metrics();
    let margin = metrics.margin();

    Shape::text_box(
        Rect::new(
            margin,
            metrics.slide_height() - margin - FOOTNOTE_HEIGHT,
            metrics.slide_width() - 2.0 * margin,
            FOOTNOTE_HEIGHT,
        ),
        TextBlock::new(vec![Paragraph::new(
            text,
            FOOTNOTE_SIZE,
            composer.theme().role(ColorRole::MutedText),
        )]),
    )
}
