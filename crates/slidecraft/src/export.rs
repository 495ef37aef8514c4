//! Handing a composed [`Document`] to an output format.
//!
//! A [`DocumentWriter`] receives slides and shapes in emission order and
//! persists them on [`save`](DocumentWriter::save). [`write_document`] drives
//! any writer and attaches slide and shape positions to its failures.

pub mod svg;

use std::{
    io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use slidecraft_core::{color::Color, document::Document, draw::Shape};

pub use self::svg::SvgWriter;

/// Failure inside a writer.
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown slide handle {0}")]
    UnknownSlide(usize),

    #[error("unsupported {0}")]
    Unsupported(String),
}

/// Writer failure annotated with where in the document it happened.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create slide {slide}")]
    Slide {
        slide: usize,
        #[source]
        source: WriterError,
    },

    #[error("failed to write shape {shape} on slide {slide}")]
    Shape {
        slide: usize,
        shape: usize,
        #[source]
        source: WriterError,
    },

    #[error("failed to save `{}`", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: WriterError,
    },
}

/// A sink for slides and shapes.
///
/// Writers see shapes in painter's order and must not reorder them.
pub trait DocumentWriter {
    /// Opaque reference to a slide created by this writer.
    type SlideHandle;

    fn create_slide(&mut self, background: Color) -> Result<Self::SlideHandle, WriterError>;

    fn add_shape(&mut self, slide: &Self::SlideHandle, shape: &Shape) -> Result<(), WriterError>;

    /// Persists everything written so far to `path`.
    fn save(&mut self, path: &Path) -> Result<(), WriterError>;
}

/// Feeds every slide and shape of `document` to `writer` in emission order.
///
/// Stops at the first failure; nothing is retried.
pub fn write_slides<W: DocumentWriter>(
    document: &Document,
    writer: &mut W,
) -> Result<(), ExportError> {
    for (slide_index, slide) in document.slides().iter().enumerate() {
        let handle = writer
            .create_slide(slide.background())
            .map_err(|source| ExportError::Slide {
                slide: slide_index,
                source,
            })?;

        for (shape_index, shape) in slide.shapes().iter().enumerate() {
            writer
                .add_shape(&handle, shape)
                .map_err(|source| ExportError::Shape {
                    slide: slide_index,
                    shape: shape_index,
                    source,
                })?;
        }
        debug!(slide = slide_index, shapes = slide.len(); "Slide written");
    }
    Ok(())
}

/// Writes `document` into `writer` and saves it to `path`.
///
/// Nothing is saved if any slide or shape fails.
pub fn write_document<W: DocumentWriter>(
    document: &Document,
    writer: &mut W,
    path: &Path,
) -> Result<(), ExportError> {
    write_slides(document, writer)?;

    writer.save(path).map_err(|source| ExportError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path:? = path, slides = document.len(); "Document saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use slidecraft_core::{document::Slide, geometry::{Rect, Size}};

    use super::*;

    /// Records calls and fails on the configured shape.
    #[derive(Default)]
    struct RecordingWriter {
        slides: Vec<Vec<&'static str>>,
        fail_on: Option<(usize, usize)>,
        saved: Option<PathBuf>,
    }

    impl DocumentWriter for RecordingWriter {
        type SlideHandle = usize;

        fn create_slide(&mut self, _background: Color) -> Result<usize, WriterError> {
            self.slides.push(Vec::new());
            Ok(self.slides.len() - 1)
        }

        fn add_shape(&mut self, slide: &usize, shape: &Shape) -> Result<(), WriterError> {
            let shapes = self
                .slides
                .get_mut(*slide)
                .ok_or(WriterError::UnknownSlide(*slide))?;
            if self.fail_on == Some((*slide, shapes.len())) {
                return Err(WriterError::Unsupported(shape.kind_name().to_string()));
            }
            shapes.push(shape.kind_name());
            Ok(())
        }

        fn save(&mut self, path: &Path) -> Result<(), WriterError> {
            self.saved = Some(path.to_path_buf());
            Ok(())
        }
    }

    fn document() -> Document {
        let fill = Color::new("gray").unwrap();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut document = Document::new(Size::new(100.0, 50.0));
        document.push(Slide::new(fill, vec![Shape::rectangle(rect, fill)]));
        document.push(Slide::new(
            fill,
            vec![
                Shape::rectangle(rect, fill),
                Shape::text_box(rect, Default::default()),
            ],
        ));
        document
    }

    #[test]
    fn test_writes_in_emission_order() {
        let mut writer = RecordingWriter::default();
        write_document(&document(), &mut writer, Path::new("deck.out")).unwrap();

        assert_eq!(writer.slides, [vec!["rectangle"], vec!["rectangle", "text box"]]);
        assert_eq!(writer.saved.as_deref(), Some(Path::new("deck.out")));
    }

    #[test]
    fn test_failure_carries_indices_and_skips_save() {
        let mut writer = RecordingWriter {
            fail_on: Some((1, 1)),
            ..Default::default()
        };
        let err = write_document(&document(), &mut writer, Path::new("deck.out")).unwrap_err();

        assert!(matches!(err, ExportError::Shape { slide: 1, shape: 1, .. }));
        assert_eq!(err.to_string(), "failed to write shape 1 on slide 1");
        assert!(writer.saved.is_none());
    }
}
