//! Equal-pitch grid placement.
//!
//! Cells are numbered row-major: `row = index / columns`,
//! `col = index % columns`. Distinct indices never overlap.

use slidecraft_core::geometry::{Point, Rect, Size};

use super::LayoutError;

/// Number of rows needed to hold `item_count` items in `columns` columns.
///
/// Returns 0 when `columns` is 0.
pub fn rows_for(item_count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    item_count.div_ceil(columns)
}

/// Computes the rectangle of cell `index` in a grid laid over `container`.
///
/// # Errors
///
/// Fails when the grid has no rows or columns, the container has no area,
/// a gutter is negative, the gutters leave no room for cells, or `index`
/// is past the last cell.
pub fn cell(
    container: Rect,
    columns: usize,
    rows: usize,
    col_gutter: f32,
    row_gutter: f32,
    index: usize,
) -> Result<Rect, LayoutError> {
    Grid::new(container, columns, rows, col_gutter, row_gutter)?.cell(index)
}

/// A validated grid over a container rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Point,
    cell_size: Size,
    columns: usize,
    rows: usize,
    col_gutter: f32,
    row_gutter: f32,
}

impl Grid {
    /// Validates the grid parameters once so that every cell lookup is cheap.
    pub fn new(
        container: Rect,
        columns: usize,
        rows: usize,
        col_gutter: f32,
        row_gutter: f32,
    ) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        if rows == 0 {
            return Err(LayoutError::ZeroRows);
        }
        if container.width() <= 0.0 || container.height() <= 0.0 {
            return Err(LayoutError::DegenerateContainer {
                width: container.width(),
                height: container.height(),
            });
        }
        if col_gutter < 0.0 || row_gutter < 0.0 {
            return Err(LayoutError::NegativeGutter {
                column: col_gutter,
                row: row_gutter,
            });
        }

        let width = (container.width() - (columns - 1) as f32 * col_gutter) / columns as f32;
        let height = (container.height() - (rows - 1) as f32 * row_gutter) / rows as f32;
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::DegenerateCell { width, height });
        }

        Ok(Self {
            origin: container.origin(),
            cell_size: Size::new(width, height),
            columns,
            rows,
            col_gutter,
            row_gutter,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Returns the `(row, column)` of cell `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Returns the rectangle of cell `index`.
    pub fn cell(&self, index: usize) -> Result<Rect, LayoutError> {
        if index >= self.capacity() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }

        let (row, col) = self.position(index);
        let offset = Point::new(
            col as f32 * (self.cell_size.width() + self.col_gutter),
            row as f32 * (self.cell_size.height() + self.row_gutter),
        );
        Ok(Rect::from_origin_size(
            self.origin.add_point(offset),
            self.cell_size,
        ))
    }

    /// Iterates over every cell in index order.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.capacity()).filter_map(|index| self.cell(index).ok())
    }
}
