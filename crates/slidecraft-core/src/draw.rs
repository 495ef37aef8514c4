//! Visual primitives placed on slides.
//!
//! - [`Paragraph`] and [`TextBlock`] describe styled text in logical
//!   paragraphs. Visual line wrapping is left to writers.
//! - [`Shape`] is a positioned rectangle or text box.

mod shape;
mod text;

pub use shape::Shape;
pub use text::{Alignment, Paragraph, TextBlock};
