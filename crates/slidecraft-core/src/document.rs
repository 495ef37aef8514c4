//! The in-memory document tree handed to writers.
//!
//! A [`Document`] is an ordered list of [`Slide`]s; each slide is a background
//! color plus an ordered list of [`Shape`]s. Slides are built whole by the
//! composer and have no mutators. The document only grows by appending.

use crate::{color::Color, draw::Shape, geometry::Size};

/// One slide: a background color and shapes in painter's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    background: Color,
    shapes: Vec<Shape>,
}

impl Slide {
    pub fn new(background: Color, shapes: Vec<Shape>) -> Self {
        Self { background, shapes }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes on the slide.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// An ordered sequence of slides sharing one slide size.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    slide_size: Size,
    slides: Vec<Slide>,
}

impl Document {
    /// Creates an empty document whose slides measure `slide_size` points.
    pub fn new(slide_size: Size) -> Self {
        Self {
            slide_size,
            slides: Vec::new(),
        }
    }

    /// Appends a slide after all existing slides.
    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slide_size(&self) -> Size {
        self.slide_size
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
