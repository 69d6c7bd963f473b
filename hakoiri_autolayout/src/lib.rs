// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hakoiri Auto-Layout: bulk divider synthesis from a sweet arrangement.
//!
//! Given the sweets currently placed on a grid, [`auto_layout`] computes a
//! complete set of divider segments that lines every boundary where two items
//! sit flush against each other and seals the rest of each such line out to
//! the grid edge. The caller replaces its entire divider set with the result.
//!
//! ## How lines are chosen
//!
//! A grid-line coordinate is a candidate separator only when some sweet ends
//! exactly where another begins: for horizontal lines, some sweet's bottom
//! edge and some sweet's top edge coincide at that y (vertical lines are the
//! symmetric case). This is a deliberate heuristic, not a general space
//! partition — items that are not flush-adjacent get no separator, and free
//! space away from any shared boundary is left alone.
//!
//! For each candidate line, the extents of every sweet touching the line
//! (from either side) are merged into maximal intervals. One segment is
//! emitted per merged interval — the separator between the adjacent groups —
//! and one per remaining gap, including the gaps to the grid boundary, so the
//! whole line ends up covered. Each segment is re-checked against the sweet
//! set before being emitted; a segment that would pass through some other
//! sweet's interior is dropped.
//!
//! The output is deterministic: horizontal lines first, then vertical, each
//! in ascending (line, start) order. Running the synthesis twice on the same
//! arrangement yields identical results.
//!
//! ## Minimal example
//!
//! ```rust
//! use hakoiri_grid::{GridSize, Orientation};
//! use hakoiri_placement::{CatalogId, PlacedId, PlacedItem};
//! use hakoiri_autolayout::auto_layout;
//!
//! // Two sweets sharing the boundary x = 2.
//! let items = [
//!     PlacedItem::sweet(PlacedId::from_raw(1), CatalogId::from_raw(0), 0, 0, 2, 2),
//!     PlacedItem::sweet(PlacedId::from_raw(2), CatalogId::from_raw(0), 2, 0, 2, 2),
//! ];
//! let segments = auto_layout(&items, GridSize::new(10, 10)).unwrap();
//!
//! assert!(segments.iter().all(|s| s.orientation == Orientation::Vertical && s.anchor == 2));
//! // Separator over the shared extent, seal out to the far edge.
//! assert_eq!(segments[0].span(), hakoiri_grid::Span::new(0, 2));
//! assert_eq!(segments[1].span(), hakoiri_grid::Span::new(2, 10));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use hakoiri_grid::{GridSize, Orientation, Span, merge_spans, span_gaps};
use hakoiri_placement::{DividerLine, ItemKind, PlacedItem, no_sweet_intersection};

/// Why no divider set could be synthesized.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutoLayoutError {
    /// Fewer than two sweets are placed; there is nothing to separate.
    InsufficientItems,
    /// No two sweets share a flush boundary, so no separator line exists.
    NoSeparatorFound,
}

impl fmt::Display for AutoLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientItems => f.write_str("fewer than two sweets placed"),
            Self::NoSeparatorFound => f.write_str("no flush-adjacent sweets to separate"),
        }
    }
}

impl core::error::Error for AutoLayoutError {}

/// Synthesizes a full divider set for the current sweet arrangement.
///
/// Dividers in `items` are ignored; only sweets drive the synthesis. The
/// returned segments carry no ids — the caller assigns fresh placements when
/// committing, replacing its previous divider set wholesale.
///
/// # Errors
///
/// [`AutoLayoutError::InsufficientItems`] with fewer than two sweets;
/// [`AutoLayoutError::NoSeparatorFound`] when no flush-adjacent boundary
/// yields any segment.
pub fn auto_layout(
    items: &[PlacedItem],
    grid: GridSize,
) -> Result<Vec<DividerLine>, AutoLayoutError> {
    let sweet_count = items.iter().filter(|i| i.kind == ItemKind::Sweet).count();
    if sweet_count < 2 {
        return Err(AutoLayoutError::InsufficientItems);
    }

    let mut segments = synthesize_axis(items, grid, Orientation::Horizontal);
    segments.extend(synthesize_axis(items, grid, Orientation::Vertical));

    if segments.is_empty() {
        return Err(AutoLayoutError::NoSeparatorFound);
    }
    Ok(segments)
}

/// The leading (top/left) and trailing (bottom/right) edge coordinates of a
/// sweet perpendicular to lines of the given orientation, plus its extent
/// along those lines.
fn edges_and_span(item: &PlacedItem, orientation: Orientation) -> (i32, i32, Span) {
    let rect = item.rect();
    match orientation {
        Orientation::Horizontal => (rect.y, rect.bottom(), Span::new(rect.x, rect.right())),
        Orientation::Vertical => (rect.x, rect.right(), Span::new(rect.y, rect.bottom())),
    }
}

/// Emits all accepted segments for one line orientation, in ascending
/// (line, start) order.
fn synthesize_axis(items: &[PlacedItem], grid: GridSize, orientation: Orientation) -> Vec<DividerLine> {
    let sweets: SmallVec<[&PlacedItem; 16]> = items
        .iter()
        .filter(|i| i.kind == ItemKind::Sweet)
        .collect();

    // A coordinate separates two flush-adjacent sweets only when one sweet
    // ends there and another begins there.
    let mut candidates: SmallVec<[i32; 16]> = SmallVec::new();
    for sweet in &sweets {
        let (_, trailing, _) = edges_and_span(sweet, orientation);
        let begins_here = sweets
            .iter()
            .any(|other| edges_and_span(other, orientation).0 == trailing);
        if begins_here {
            candidates.push(trailing);
        }
    }
    candidates.sort_unstable();
    candidates.dedup();

    let extent = grid.extent_along(orientation);
    let mut segments = Vec::new();
    for line in candidates {
        let touching: Vec<Span> = sweets
            .iter()
            .filter_map(|sweet| {
                let (leading, trailing, span) = edges_and_span(sweet, orientation);
                (leading == line || trailing == line).then_some(span)
            })
            .collect();

        let merged = merge_spans(&touching);
        let mut pieces = merged.clone();
        pieces.extend(span_gaps(&merged, Span::new(0, extent)));
        pieces.sort_unstable_by_key(|s| s.start);

        for piece in pieces {
            let segment = DividerLine::new(orientation, line, piece.start, piece.len());
            // A line coordinate chosen for one pair of sweets can still pass
            // through the interior of an unrelated sweet elsewhere on the
            // line; such pieces are dropped.
            if no_sweet_intersection(items, segment, None) {
                segments.push(segment);
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use hakoiri_placement::{CatalogId, PlacedId};

    fn sweet(id: u64, x: i32, y: i32, w: i32, h: i32) -> PlacedItem {
        PlacedItem::sweet(PlacedId::from_raw(id), CatalogId::from_raw(0), x, y, w, h)
    }

    const GRID: GridSize = GridSize::new(10, 10);

    #[test]
    fn fewer_than_two_sweets_is_insufficient() {
        assert_eq!(auto_layout(&[], GRID), Err(AutoLayoutError::InsufficientItems));
        assert_eq!(
            auto_layout(&[sweet(1, 0, 0, 2, 2)], GRID),
            Err(AutoLayoutError::InsufficientItems)
        );
    }

    #[test]
    fn non_adjacent_sweets_yield_no_separator() {
        // A gap of one column between them; no shared flush boundary.
        let items = [sweet(1, 0, 0, 2, 2), sweet(2, 3, 0, 2, 2)];
        assert_eq!(auto_layout(&items, GRID), Err(AutoLayoutError::NoSeparatorFound));
    }

    #[test]
    fn flush_pair_gets_separator_and_boundary_seal() {
        let items = [sweet(1, 0, 0, 2, 2), sweet(2, 2, 0, 2, 2)];
        let segments = auto_layout(&items, GRID).unwrap();
        assert_eq!(
            segments,
            vec![
                DividerLine::new(Orientation::Vertical, 2, 0, 2),
                DividerLine::new(Orientation::Vertical, 2, 2, 8),
            ]
        );
    }

    #[test]
    fn vertically_stacked_pair_gets_horizontal_separator() {
        let items = [sweet(1, 0, 0, 3, 2), sweet(2, 0, 2, 3, 3)];
        let segments = auto_layout(&items, GRID).unwrap();
        assert_eq!(
            segments,
            vec![
                DividerLine::new(Orientation::Horizontal, 2, 0, 3),
                DividerLine::new(Orientation::Horizontal, 2, 3, 7),
            ]
        );
    }

    #[test]
    fn seal_pieces_that_straddle_an_unrelated_sweet_are_dropped() {
        // Sweets 1 and 2 meet at x = 2; sweet 3 straddles x = 2 lower down,
        // so the seal along x = 2 must stop short of it.
        let items = [
            sweet(1, 0, 0, 2, 2),
            sweet(2, 2, 0, 2, 2),
            sweet(3, 1, 3, 2, 2),
        ];
        let segments = auto_layout(&items, GRID).unwrap();
        assert_eq!(
            segments,
            vec![DividerLine::new(Orientation::Vertical, 2, 0, 2)]
        );
    }

    #[test]
    fn both_axes_are_synthesized_with_horizontal_first() {
        // A 2x2 block of 2x2 sweets meeting at x = 2 and y = 2.
        let items = [
            sweet(1, 0, 0, 2, 2),
            sweet(2, 2, 0, 2, 2),
            sweet(3, 0, 2, 2, 2),
            sweet(4, 2, 2, 2, 2),
        ];
        let segments = auto_layout(&items, GRID).unwrap();
        let horizontal: Vec<_> = segments
            .iter()
            .filter(|s| s.orientation == Orientation::Horizontal)
            .collect();
        let vertical: Vec<_> = segments
            .iter()
            .filter(|s| s.orientation == Orientation::Vertical)
            .collect();
        assert!(!horizontal.is_empty());
        assert!(!vertical.is_empty());
        assert!(segments.iter().all(|s| s.anchor == 2));
        // Horizontal segments precede vertical ones in the output.
        let first_vertical = segments
            .iter()
            .position(|s| s.orientation == Orientation::Vertical)
            .unwrap();
        assert!(
            segments[..first_vertical]
                .iter()
                .all(|s| s.orientation == Orientation::Horizontal)
        );
    }

    #[test]
    fn synthesis_is_deterministic() {
        let items = [
            sweet(1, 0, 0, 2, 2),
            sweet(2, 2, 0, 2, 2),
            sweet(3, 0, 2, 4, 2),
        ];
        let first = auto_layout(&items, GRID).unwrap();
        let second = auto_layout(&items, GRID).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn existing_dividers_do_not_affect_synthesis() {
        let line = DividerLine::new(Orientation::Horizontal, 7, 0, 10);
        let divider =
            PlacedItem::divider(PlacedId::from_raw(9), CatalogId::from_raw(0), line);
        let items = [sweet(1, 0, 0, 2, 2), sweet(2, 2, 0, 2, 2), divider];
        let without: Vec<PlacedItem> = items[..2].to_vec();
        assert_eq!(
            auto_layout(&items, GRID).unwrap(),
            auto_layout(&without, GRID).unwrap()
        );
    }
}
