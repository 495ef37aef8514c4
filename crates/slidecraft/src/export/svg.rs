//! SVG output.
//!
//! All slides go into one SVG document, stacked top to bottom with a fixed
//! gap. Each slide is a `<g>` translated to its offset, starting with a
//! background rectangle. Paragraphs are wrapped to their text box width when
//! rendered; text that overflows the box is still emitted.

mod text;

use std::{io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use slidecraft_core::{
    color::Color,
    draw::{Alignment, Paragraph, Shape},
    geometry::{Rect, Size},
    theme::DEFAULT_FONT_FAMILY,
};

use super::{DocumentWriter, WriterError};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// Writes slides into a single SVG document.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    slide_size: Size,
    slide_gap: f32,
    font_family: String,
    slides: Vec<svg_element::Group>,
}

impl SvgWriter {
    pub fn new(slide_size: Size) -> Self {
        Self {
            slide_size,
            slide_gap: 0.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            slides: Vec::new(),
        }
    }

    /// Sets the vertical space between stacked slides.
    pub fn with_slide_gap(mut self, gap: f32) -> Self {
        self.slide_gap = gap;
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Number of slides created so far.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Builds the SVG document from the slides written so far.
    pub fn to_document(&self) -> Document {
        let count = self.slides.len().max(1) as f32;
        let width = self.slide_size.width();
        let height = count * self.slide_size.height() + (count - 1.0) * self.slide_gap;

        self.slides.iter().fold(
            Document::new()
                .set("viewBox", format!("0 0 {width} {height}"))
                .set("width", width)
                .set("height", height),
            |doc, group| doc.add(group.clone()),
        )
    }

    /// Renders the SVG document to a string.
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }

    fn render_rectangle(rect: Rect, fill: Color) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", rect.x())
            .set("y", rect.y())
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", &fill)
            .set("fill-opacity", fill.alpha())
    }

    fn render_text_box<'a>(
        &self,
        rect: Rect,
        paragraphs: impl Iterator<Item = &'a Paragraph>,
    ) -> svg_element::Group {
        let mut group = svg_element::Group::new();
        let mut cursor = rect.y();

        for paragraph in paragraphs {
            let size = paragraph.font_size();
            let (x, anchor) = match paragraph.alignment() {
                Alignment::Left => (rect.x(), "start"),
                Alignment::Center => (rect.center().x(), "middle"),
                Alignment::Right => (rect.max_x(), "end"),
            };

            cursor += paragraph.space_before();
            let lines = text::wrap_lines(
                paragraph.text(),
                &self.font_family,
                size,
                paragraph.bold(),
                rect.width(),
            );

            for line in lines {
                // Baseline sits one font size below the top of the line box
                let baseline = cursor + size;
                let mut rendered = svg_element::Text::new(line)
                    .set("x", x)
                    .set("y", baseline)
                    .set("text-anchor", anchor)
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", size)
                    .set("fill", &paragraph.color())
                    .set("fill-opacity", paragraph.color().alpha());
                if paragraph.bold() {
                    rendered = rendered.set("font-weight", "bold");
                }
                group = group.add(rendered);
                cursor += size * LINE_HEIGHT;
            }

            cursor += paragraph.space_after();
        }

        group
    }

    fn check_geometry(rect: Rect) -> Result<(), WriterError> {
        let finite = [rect.x(), rect.y(), rect.width(), rect.height()]
            .iter()
            .all(|v| v.is_finite());
        if finite {
            Ok(())
        } else {
            Err(WriterError::Unsupported(format!(
                "non-finite geometry {rect:?}"
            )))
        }
    }
}

impl DocumentWriter for SvgWriter {
    type SlideHandle = usize;

    fn create_slide(&mut self, background: Color) -> Result<usize, WriterError> {
        let index = self.slides.len();
        let offset = index as f32 * (self.slide_size.height() + self.slide_gap);

        let group = svg_element::Group::new()
            .set("transform", format!("translate(0, {offset})"))
            .add(Self::render_rectangle(
                Rect::from_origin_size(Default::default(), self.slide_size),
                background,
            ));
        self.slides.push(group);

        debug!(slide = index, offset; "SVG slide created");
        Ok(index)
    }

    fn add_shape(&mut self, slide: &usize, shape: &Shape) -> Result<(), WriterError> {
        Self::check_geometry(shape.rect())?;

        let node: Box<dyn svg::Node> = match shape {
            Shape::Rectangle { rect, fill } => Box::new(Self::render_rectangle(*rect, *fill)),
            Shape::TextBox { rect, text } => Box::new(self.render_text_box(*rect, text.iter())),
        };

        let group = self
            .slides
            .get_mut(*slide)
            .ok_or(WriterError::UnknownSlide(*slide))?;
        *group = std::mem::replace(group, svg_element::Group::new()).add(node);
        Ok(())
    }

    /// Writes the document next to `path` and renames it into place, so a
    /// failed save never leaves a partial file behind.
    fn save(&mut self, path: &Path) -> Result<(), WriterError> {
        info!(path:? = path, slides = self.slides.len(); "Creating SVG file");

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = match tempfile::NamedTempFile::new_in(dir) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create temporary SVG file");
                return Err(err.into());
            }
        };

        write!(temp_file, "{}", self.to_document())?;
        temp_file.as_file().sync_all()?;

        if let Err(err) = temp_file.persist(path) {
            error!(path:? = path, err:err; "Failed to move SVG file into place");
            return Err(err.error.into());
        }

        Ok(())
    }
}
