// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer cell rectangles and pointer-to-cell conversion.

use kurbo::Point;

/// An axis-aligned rectangle of grid cells, half-open on both axes.
///
/// Covers the cell range `[x, x + width) × [y, y + height)`. A rectangle with
/// zero width or height covers no cells; dividers use exactly that shape to
/// encode a zero-thickness line segment on a grid boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRect {
    /// Left cell column.
    pub x: i32,
    /// Top cell row.
    pub y: i32,
    /// Extent in columns.
    pub width: i32,
    /// Extent in rows.
    pub height: i32,
}

impl CellRect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost covered column.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottommost covered row.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if the two rectangles share at least one cell.
    ///
    /// Touching edges never count as overlap: `[0,2)` and `[2,4)` are
    /// disjoint. Empty rectangles overlap nothing.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Floor of `v` as an `i32`.
///
/// `v as i32` truncates toward zero, which is wrong for negative values; this
/// adjusts downward. Kept in core-only arithmetic so `no_std` builds do not
/// need `libm`.
const fn floor_to_i32(v: f64) -> i32 {
    let t = v as i32;
    if v < t as f64 { t - 1 } else { t }
}

/// Converts a pointer position to fractional grid coordinates.
///
/// The result is pointer-relative distance from `origin` divided by
/// `cell_size`, unclamped. Used for divider drags, where the interesting
/// coordinate is a (possibly off-line) position between grid lines that the
/// snap resolver then adjusts.
#[must_use]
pub fn fractional_cell(pointer: Point, origin: Point, cell_size: f64) -> (f64, f64) {
    (
        (pointer.x - origin.x) / cell_size,
        (pointer.y - origin.y) / cell_size,
    )
}

/// The grid line nearest to a fractional coordinate.
///
/// Used as the fallback anchor for a dragged divider when no sweet edge is
/// close enough to snap to.
#[must_use]
pub const fn nearest_line(v: f64) -> i32 {
    floor_to_i32(v + 0.5)
}

/// Converts a pointer position to the integer cell under it.
///
/// Floor-divides pointer-relative pixels by `cell_size` and clamps negative
/// results to 0. The upper bound is deliberately not clamped; whether the
/// cell is inside the grid is the validator's decision.
#[must_use]
pub fn cell_at(pointer: Point, origin: Point, cell_size: f64) -> (i32, i32) {
    let (fx, fy) = fractional_cell(pointer, origin, cell_size);
    (floor_to_i32(fx).max(0), floor_to_i32(fy).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = CellRect::new(0, 0, 2, 2);
        assert!(!a.overlaps(&CellRect::new(2, 0, 2, 2)));
        assert!(!a.overlaps(&CellRect::new(0, 2, 2, 2)));
        assert!(!a.overlaps(&CellRect::new(2, 2, 2, 2)));
    }

    #[test]
    fn intersecting_rects_overlap() {
        let a = CellRect::new(0, 0, 2, 2);
        assert!(a.overlaps(&CellRect::new(1, 1, 2, 2)));
        assert!(CellRect::new(1, 1, 2, 2).overlaps(&a));
        // Containment is overlap too.
        assert!(CellRect::new(0, 0, 4, 4).overlaps(&CellRect::new(1, 1, 1, 1)));
    }

    #[test]
    fn empty_rects_overlap_nothing() {
        let line = CellRect::new(1, 1, 3, 0);
        assert!(!line.overlaps(&CellRect::new(0, 0, 5, 5)));
        assert!(!CellRect::new(0, 0, 5, 5).overlaps(&line));
    }

    #[test]
    fn cell_at_floors_and_clamps_negatives() {
        let origin = Point::new(10.0, 10.0);
        assert_eq!(cell_at(Point::new(10.0, 10.0), origin, 32.0), (0, 0));
        assert_eq!(cell_at(Point::new(41.9, 74.0), origin, 32.0), (0, 2));
        assert_eq!(cell_at(Point::new(42.0, 74.0), origin, 32.0), (1, 2));
        // Left/above the origin clamps to 0.
        assert_eq!(cell_at(Point::new(0.0, 0.0), origin, 32.0), (0, 0));
    }

    #[test]
    fn cell_at_does_not_clamp_upper_bound() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(cell_at(Point::new(3200.0, 0.0), origin, 32.0), (100, 0));
    }

    #[test]
    fn nearest_line_rounds_half_up() {
        assert_eq!(nearest_line(2.4), 2);
        assert_eq!(nearest_line(2.5), 3);
        assert_eq!(nearest_line(-0.4), 0);
        assert_eq!(nearest_line(-0.6), -1);
    }

    #[test]
    fn fractional_cell_is_unclamped() {
        let (fx, fy) = fractional_cell(Point::new(-16.0, 48.0), Point::new(0.0, 0.0), 32.0);
        // Both quotients are exact in binary floating point.
        assert_eq!(fx, -0.5);
        assert_eq!(fy, 1.5);
    }
}
