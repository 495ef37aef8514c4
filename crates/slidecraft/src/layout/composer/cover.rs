//! Title slide.

use slidecraft_core::{
    draw::{Paragraph, Shape, TextBlock},
    geometry::Rect,
    theme::ColorRole,
};

use super::{SlideComposer, header};
use crate::content::ContentSpec;

const BAR_WIDTH: f32 = 10.8;
const INDENT: f32 = 108.0;

const TITLE_Y: f32 = 162.0;
const TITLE_HEIGHT: f32 = 79.2;
const TITLE_SIZE: f32 = 60.0;

const SUBTITLE_Y: f32 = 244.8;
const SUBTITLE_HEIGHT: f32 = 50.4;
const SUBTITLE_SIZE: f32 = 32.0;

const RULE_Y: f32 = 309.6;
const RULE_WIDTH: f32 = 180.0;
const RULE_HEIGHT: f32 = 2.88;

const LINES_Y: f32 = 331.2;
const LINE_SIZE: f32 = 16.0;
const LINE_SPACING: f32 = 4.0;

/// Left accent bar, large title, subtitle, a short rule and muted lines.
///
/// The cover ignores the standard header. Shapes collapse to zero size on
/// slides too small for the fixed offsets rather than failing.
pub(super) fn layout(composer: &SlideComposer, spec: &ContentSpec, lines: &[String]) -> Vec<Shape> {
    let theme = composer.theme();
    let metrics = composer.metrics();
    let width = metrics.slide_width() - INDENT - metrics.margin();

    let mut shapes = vec![
        Shape::rectangle(
            Rect::new(0.0, 0.0, BAR_WIDTH, metrics.slide_height()),
            theme.role(ColorRole::Accent),
        ),
        Shape::text_box(
            Rect::new(INDENT, TITLE_Y, width, TITLE_HEIGHT),
            TextBlock::new(vec![
                Paragraph::new(spec.title(), TITLE_SIZE, theme.role(ColorRole::Accent))
                    .with_bold(true),
            ]),
        ),
    ];

    if let Some(subtitle) = spec.subtitle() {
        shapes.push(Shape::text_box(
            Rect::new(INDENT, SUBTITLE_Y, width, SUBTITLE_HEIGHT),
            TextBlock::new(vec![
                Paragraph::new(subtitle, SUBTITLE_SIZE, theme.role(ColorRole::Text))
                    .with_bold(true),
            ]),
        ));
    }

    shapes.push(Shape::rectangle(
        Rect::new(INDENT, RULE_Y, RULE_WIDTH.min(width), RULE_HEIGHT),
        theme.role(ColorRole::Highlight),
    ));

    if !lines.is_empty() {
        let bottom = header::content_bottom(composer, spec.footnote().is_some());
        let text = lines
            .iter()
            .map(|line| {
                Paragraph::new(line.as_str(), LINE_SIZE, theme.role(ColorRole::MutedText))
                    .with_spacing(0.0, LINE_SPACING)
            })
            .collect();
        shapes.push(Shape::text_box(
            Rect::new(INDENT, LINES_Y, width, bottom - LINES_Y),
            text,
        ));
    }

    if let Some(footnote) = spec.footnote() {
        shapes.push(header::footnote(composer, footnote));
    }

    shapes
}

#[cfg(test)]
mod tests {
    use slidecraft_core::theme::Theme;

    use super::*;
    use crate::{config::LayoutConfig, content::SlideLayout};

    #[test]
    fn test_cover_shapes() {
        let theme = Theme::dark();
        let config = LayoutConfig::default();
        let composer = SlideComposer::new(&theme, &config);
        let spec = ContentSpec::new("PLM System", SlideLayout::Cover { lines: Vec::new() })
            .with_subtitle("Product Overview");
        let lines = ["Full-stack".to_string(), "2024".to_string()];

        let shapes = layout(&composer, &spec, &lines);

        // bar, title, subtitle, rule, lines
        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes[0].rect().height(), 540.0);
        let title = &shapes[1].text().unwrap().paragraphs()[0];
        assert_eq!(title.text(), "PLM System");
        assert_eq!(title.color(), theme.role(ColorRole::Accent));
        assert_eq!(shapes[4].text().unwrap().len(), 2);
    }

    #[test]
    fn test_cover_lines_stop_above_footnote() {
        let theme = Theme::dark();
        let config = LayoutConfig::default();
        let composer = SlideComposer::new(&theme, &config);
        let spec = ContentSpec::new("T", SlideLayout::Cover { lines: Vec::new() })
            .with_footnote("note");

        let shapes = layout(&composer, &spec, &["x".to_string()]);

        // bar, title, rule, lines, footnote
        assert_eq!(shapes.len(), 5);
        let text_boxes: Vec<_> = shapes
            .iter()
            .filter(|shape| shape.is_text_box())
            .map(Shape::rect)
            .collect();
        for (i, a) in text_boxes.iter().enumerate() {
            for b in &text_boxes[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }

        let lines = shapes[3].rect();
        let footnote = shapes[4].rect();
        assert!(lines.max_y() <= footnote.y() - config.row_gutter() + 1e-3);
    }
}
