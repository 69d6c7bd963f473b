// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement admissibility: bounds, overlap, and straddle rules.
//!
//! All checks are pure functions over an immutable snapshot of the placed
//! set. A candidate is tested against every other item; `exclude` skips one
//! id so an existing item can be tested against a moved/resized version of
//! itself.

use core::fmt;

use hakoiri_grid::{CellRect, GridSize, Orientation, Span};

use crate::types::{DividerLine, ItemKind, PlacedId, PlacedItem};

/// Why a candidate placement was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The candidate extends outside the grid.
    OutOfBounds,
    /// The candidate collides with an existing item of the same class.
    Overlap,
    /// A sweet would cross a divider line (or a divider a sweet) through its
    /// interior rather than merely touching it.
    Straddle,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("placement extends outside the grid"),
            Self::Overlap => f.write_str("placement overlaps an existing item"),
            Self::Straddle => f.write_str("placement crosses a divider or sweet interior"),
        }
    }
}

impl core::error::Error for PlacementError {}

/// Returns `true` if the rectangle's interior strictly crosses the line and
/// their extents along the line axis overlap.
///
/// Sharing the boundary exactly (the line coincides with the rectangle's
/// edge) is contact, not straddling.
fn rect_straddles_line(rect: &CellRect, line: &DividerLine) -> bool {
    let (crosses, rect_span) = match line.orientation {
        Orientation::Horizontal => (
            rect.y < line.anchor && line.anchor < rect.bottom(),
            Span::new(rect.x, rect.right()),
        ),
        Orientation::Vertical => (
            rect.x < line.anchor && line.anchor < rect.right(),
            Span::new(rect.y, rect.bottom()),
        ),
    };
    crosses && rect_span.overlaps(&line.span())
}

/// Validates a solid (sweet) rectangle against the grid and placed set.
///
/// Rejection order: bounds, then sweet overlap, then divider straddling.
/// Touching another sweet or lying flush against a divider line is legal.
///
/// # Errors
///
/// Returns the first applicable [`PlacementError`].
pub fn check_solid(
    grid: GridSize,
    items: &[PlacedItem],
    rect: CellRect,
    exclude: Option<PlacedId>,
) -> Result<(), PlacementError> {
    if rect.is_empty() || !grid.contains_rect(&rect) {
        return Err(PlacementError::OutOfBounds);
    }
    for item in items {
        if Some(item.id) == exclude {
            continue;
        }
        match item.kind {
            ItemKind::Sweet => {
                if rect.overlaps(&item.rect()) {
                    return Err(PlacementError::Overlap);
                }
            }
            ItemKind::Divider => {
                if let Some(line) = item.divider_line()
                    && rect_straddles_line(&rect, &line)
                {
                    return Err(PlacementError::Straddle);
                }
            }
        }
    }
    Ok(())
}

/// Boolean convenience over [`check_solid`].
#[must_use]
pub fn can_place_solid(
    grid: GridSize,
    items: &[PlacedItem],
    rect: CellRect,
    exclude: Option<PlacedId>,
) -> bool {
    check_solid(grid, items, rect, exclude).is_ok()
}

/// Validates a divider segment against the grid and placed set.
///
/// A segment must lie within the grid (its anchor may sit on the outer
/// boundary line), must not overlap a same-orientation segment on the same
/// line, and must not pass through any sweet's interior. Segments of
/// different orientation, or on different lines, cross freely.
///
/// # Errors
///
/// Returns the first applicable [`PlacementError`].
pub fn check_divider_line(
    grid: GridSize,
    items: &[PlacedItem],
    line: DividerLine,
    exclude: Option<PlacedId>,
) -> Result<(), PlacementError> {
    if line.length < 1
        || line.start < 0
        || line.start + line.length > grid.extent_along(line.orientation)
        || !grid.contains_line_anchor(line.anchor, line.orientation)
    {
        return Err(PlacementError::OutOfBounds);
    }
    for item in items {
        if Some(item.id) == exclude {
            continue;
        }
        if let Some(other) = item.divider_line()
            && other.orientation == line.orientation
            && other.anchor == line.anchor
            && other.span().overlaps(&line.span())
        {
            return Err(PlacementError::Overlap);
        }
    }
    if !no_sweet_intersection(items, line, exclude) {
        return Err(PlacementError::Straddle);
    }
    Ok(())
}

/// Boolean convenience over [`check_divider_line`].
#[must_use]
pub fn can_place_divider_line(
    grid: GridSize,
    items: &[PlacedItem],
    line: DividerLine,
    exclude: Option<PlacedId>,
) -> bool {
    check_divider_line(grid, items, line, exclude).is_ok()
}

/// Returns `true` if no placed sweet straddles the given line.
///
/// Shared by the validator and by the auto-layout synthesizer's defensive
/// re-check of each candidate segment.
#[must_use]
pub fn no_sweet_intersection(
    items: &[PlacedItem],
    line: DividerLine,
    exclude: Option<PlacedId>,
) -> bool {
    !items.iter().any(|item| {
        item.kind == ItemKind::Sweet
            && Some(item.id) != exclude
            && rect_straddles_line(&item.rect(), &line)
    })
}
