//! Geometric primitives for slide layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in slide space
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Margin values for four sides
//! - [`Rect`] - An axis-aligned rectangle anchored at its top-left corner
//!
//! # Coordinate System
//!
//! All values are device-independent points (1/72 inch). The origin is the
//! top-left corner of a slide:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

/// A 2D point in slide coordinate space.
///
/// # Examples
///
/// ```
/// # use slidecraft_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents spacing around an element with potentially different values
/// for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with one value for top/bottom and another for left/right
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
///
/// Width and height are never negative: every constructor clamps negative
/// dimensions to zero.
///
/// # Examples
///
/// ```
/// # use slidecraft_core::geometry::{Insets, Rect};
/// let card = Rect::new(36.0, 144.0, 200.0, 100.0);
/// assert_eq!(card.max_x(), 236.0);
///
/// let inner = card.inset(Insets::uniform(10.0));
/// assert_eq!(inner.x(), 46.0);
/// assert_eq!(inner.width(), 180.0);
///
/// let collapsed = Rect::new(0.0, 0.0, -5.0, 10.0);
/// assert_eq!(collapsed.width(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a rectangle from a top-left point and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x(), origin.y(), size.width(), size.height())
    }

    /// Creates a rectangle of the given size centered on `center`.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x() - size.width() / 2.0,
            center.y() - size.height() / 2.0,
            size.width(),
            size.height(),
        )
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the right edge
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the center point of the rectangle
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the rectangle has no area
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Shrinks the rectangle by the given insets.
    ///
    /// Insets larger than the rectangle collapse the corresponding dimension
    /// to zero rather than producing a negative size.
    pub fn inset(self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left(),
            self.y + insets.top(),
            self.width - insets.horizontal_sum(),
            self.height - insets.vertical_sum(),
        )
    }

    /// Returns a copy with the height replaced.
    pub fn with_height(self, height: f32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }

    /// Returns the overlapping region of two rectangles, if it has a positive area.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersection(self, other: Rect) -> Option<Rect> {
        let min_x = self.x.max(other.x);
        let min_y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if max_x > min_x && max_y > min_y {
            Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
        } else {
            None
        }
    }

    /// Returns true if the two rectangles overlap with a positive area.
    pub fn intersects(self, other: Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.0f32..500.0,
            0.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    /// Intersection does not depend on argument order.
    fn check_intersection_is_symmetric(a: Rect, b: Rect) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.intersects(b), b.intersects(a));
        Ok(())
    }

    /// An overlap is never larger than either rectangle.
    fn check_intersection_is_bounded(a: Rect, b: Rect) -> Result<(), TestCaseError> {
        const EPSILON: f32 = 1e-3;
        if let Some(overlap) = a.intersection(b) {
            prop_assert!(overlap.width() <= a.width().min(b.width()) + EPSILON);
            prop_assert!(overlap.height() <= a.height().min(b.height()) + EPSILON);
            prop_assert!(overlap.x() >= a.x().min(b.x()));
            prop_assert!(overlap.y() >= a.y().min(b.y()));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            check_intersection_is_symmetric(a, b)?;
        }

        #[test]
        fn intersection_is_bounded(a in rect_strategy(), b in rect_strategy()) {
            check_intersection_is_bounded(a, b)?;
        }
    }
}
