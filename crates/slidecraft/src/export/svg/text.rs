//! Word wrapping with real font metrics.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

use super::LINE_HEIGHT;

/// Keeps one [`FontSystem`] for the whole process; loading system fonts is slow.
struct TextWrapper {
    font_system: Mutex<FontSystem>,
}

impl TextWrapper {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn wrap(&self, text: &str, family: &str, size: f32, bold: bool, width: f32) -> Vec<String> {
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(size, size * LINE_HEIGHT);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(family));
        if bold {
            attrs = attrs.weight(Weight::BOLD);
        }

        buffer.set_size(Some(width), None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        buffer
            .layout_runs()
            .filter_map(|run| {
                let start = run.glyphs.iter().map(|glyph| glyph.start).min()?;
                let end = run.glyphs.iter().map(|glyph| glyph.end).max()?;
                run.text
                    .get(start..end)
                    .map(|line| line.trim_end().to_string())
            })
            .collect()
    }
}

static TEXT_WRAPPER: OnceLock<TextWrapper> = OnceLock::new();

/// Splits `text` into lines no wider than `width` points.
///
/// Lines are broken at word boundaries; a single word wider than `width` gets
/// a line of its own. Returns the text unwrapped when shaping yields nothing.
pub(super) fn wrap_lines(
    text: &str,
    family: &str,
    size: f32,
    bold: bool,
    width: f32,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines = TEXT_WRAPPER
        .get_or_init(TextWrapper::new)
        .wrap(text, family, size, bold, width);
    if lines.is_empty() {
        vec![text.to_string()]
    } else {
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_lines("", "Segoe UI", 12.0, false, 100.0).is_empty());
    }

    #[test]
    fn test_wrapping_keeps_every_word() {
        let text = "Products have versions and every version moves through a lifecycle";
        let lines = wrap_lines(text, "Segoe UI", 13.0, true, 120.0);

        assert!(!lines.is_empty());
        let words: Vec<_> = lines.iter().flat_map(|line| line.split_whitespace()).collect();
        assert_eq!(words, text.split_whitespace().collect::<Vec<_>>());
    }
}
