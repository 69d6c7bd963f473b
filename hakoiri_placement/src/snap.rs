// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-to-edge resolution for divider drags.
//!
//! While a divider is dragged, its anchor coordinate tracks the pointer and
//! is generally fractional. If the pointer is close enough to the edge of a
//! sweet whose extent overlaps the dragged segment's span, the anchor snaps
//! onto that edge so separators land flush against items without pixel
//! hunting. "Close enough" is [`SNAP_THRESHOLD`] cell units, inclusive.

use smallvec::SmallVec;

use hakoiri_grid::{Orientation, Span};

use crate::types::{ItemKind, PlacedId, PlacedItem};

/// Maximum distance, in cell units, at which a divider snaps to a sweet edge.
///
/// The boundary is inclusive: a drag exactly at the threshold still snaps.
pub const SNAP_THRESHOLD: f64 = 0.3;

/// A resolved snap target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    /// The grid-line coordinate to snap the divider's anchor to.
    pub anchor: i32,
    /// Distance from the proposed coordinate, in cell units.
    pub distance: f64,
}

/// `f64::abs` without `std`/`libm`.
const fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Finds the nearest sweet edge to snap a dragged divider onto.
///
/// `proposed_anchor` is the fractional line coordinate under the pointer;
/// `span` is the segment's extent along the line axis at its proposed
/// position. Candidates are the near and far edges (top/bottom for a
/// horizontal divider, left/right for a vertical one) of every sweet whose
/// extent along the line axis overlaps `span`. The closest candidate within
/// [`SNAP_THRESHOLD`] wins; ties keep the first-found candidate via a stable
/// sort. Returns `None` when nothing is in range.
///
/// `exclude` skips one placed item, for when the dragged divider is an
/// existing placement being repositioned.
#[must_use]
pub fn resolve_snap(
    proposed_anchor: f64,
    span: Span,
    orientation: Orientation,
    items: &[PlacedItem],
    exclude: Option<PlacedId>,
) -> Option<Snap> {
    let mut candidates: SmallVec<[Snap; 8]> = SmallVec::new();
    for item in items {
        if item.kind != ItemKind::Sweet || Some(item.id) == exclude {
            continue;
        }
        let rect = item.rect();
        let (item_span, near, far) = match orientation {
            Orientation::Horizontal => (Span::new(rect.x, rect.right()), rect.y, rect.bottom()),
            Orientation::Vertical => (Span::new(rect.y, rect.bottom()), rect.x, rect.right()),
        };
        if !item_span.overlaps(&span) {
            continue;
        }
        for anchor in [near, far] {
            let distance = abs(proposed_anchor - anchor as f64);
            if distance <= SNAP_THRESHOLD {
                candidates.push(Snap { anchor, distance });
            }
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates.first().copied()
}
