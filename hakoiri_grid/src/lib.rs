// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hakoiri Grid: integer grid geometry for the box-packing engine.
//!
//! A packaging box is modeled as a discrete grid of `width × height` unit
//! cells. This crate provides the stateless geometry that everything else in
//! the engine is built on:
//!
//! - [`GridSize`]: grid dimensions, parsed from a `"WxH"` box-size label.
//! - [`CellRect`]: an integer, half-open axis-aligned rectangle of cells.
//! - [`Span`]: a 1-D half-open interval along one axis, with merge and gap
//!   helpers shared by the divider auto-layout synthesizer.
//! - [`Orientation`]: the horizontal/vertical axis discriminator used by
//!   grid-line-anchored dividers.
//! - [`cell_at`] / [`fractional_cell`]: pointer-to-grid conversion for drag
//!   interactions.
//!
//! All cell coordinates are `i32` and all rectangles are half-open
//! (`[x, x + width) × [y, y + height)`), so two rectangles that merely share
//! an edge never overlap. That convention is load-bearing for the whole
//! engine: flush contact between items, and between an item and a divider
//! line, is always legal.
//!
//! ## Minimal example
//!
//! ```rust
//! use hakoiri_grid::{CellRect, GridSize};
//!
//! let grid = GridSize::parse("10x10").unwrap();
//! let a = CellRect::new(0, 0, 2, 2);
//! let b = CellRect::new(2, 0, 2, 2);
//!
//! assert!(grid.contains_rect(&a));
//! // Sharing the edge x = 2 is contact, not overlap.
//! assert!(!a.overlaps(&b));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod rect;
mod size;
mod span;

pub use rect::{CellRect, cell_at, fractional_cell, nearest_line};
pub use size::{GridSize, ParseGridSizeError};
pub use span::{Span, merge_spans, span_gaps};

/// Axis discriminator for grid-line-anchored dividers.
///
/// A `Horizontal` divider runs along the x axis and is anchored at a y
/// grid-line coordinate; a `Vertical` divider is the symmetric case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Runs along the x axis, anchored at a y grid line.
    Horizontal,
    /// Runs along the y axis, anchored at an x grid line.
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
