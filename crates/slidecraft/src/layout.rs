//! Layout engine turning content specs into positioned shapes.
//!
//! - [`grid`] computes equal-pitch cell rectangles.
//! - [`text`] assembles styled paragraphs from a title and bullet items.
//! - [`card`] draws a background rectangle with a text block on top.
//! - [`composer`] dispatches on the layout kind of each slide.
//!
//! Everything here is pure: the same spec and theme always yield the same
//! shapes.

pub mod card;
pub mod composer;
pub mod grid;
pub mod text;

use thiserror::Error;

pub use card::CardRenderer;
pub use composer::{Composition, RejectedSlide, SlideComposer};
pub use grid::Grid;
pub use text::TextBlockBuilder;

/// Grid parameters that cannot produce a valid cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("grid requires at least one column")]
    ZeroColumns,

    #[error("grid requires at least one row")]
    ZeroRows,

    #[error("container {width}x{height} has no area")]
    DegenerateContainer { width: f32, height: f32 },

    #[error("gutters must not be negative (column {column}, row {row})")]
    NegativeGutter { column: f32, row: f32 },

    #[error("gutters leave no room for cells ({width}x{height})")]
    DegenerateCell { width: f32, height: f32 },

    #[error("cell index {index} is outside a grid of {capacity} cells")]
    IndexOutOfRange { index: usize, capacity: usize },
}
