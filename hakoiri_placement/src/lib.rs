// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hakoiri Placement: the placed-item model and the rules for where things
//! may go.
//!
//! Two classes of objects live on a packaging grid:
//!
//! - A **sweet** is a solid rectangle of cells. Two sweets may touch but
//!   never overlap.
//! - A **divider** is a zero-thickness line segment anchored on a grid line.
//!   Dividers may cross each other freely, but two same-orientation segments
//!   on the same line must not overlap in span, and a divider must never pass
//!   through the interior of a sweet.
//!
//! The asymmetry at the boundary is deliberate and central: *contact is
//! always legal, straddling never is*. A divider flush against a sweet's edge
//! is exactly how separators are meant to be used.
//!
//! This crate provides:
//!
//! - [`PlacedItem`] and its supporting types ([`PlacedId`], [`CatalogId`],
//!   [`ItemKind`], [`Rotation`], [`ItemFlags`], [`DividerLine`]).
//! - The validator: [`check_solid`], [`check_divider_line`], and
//!   [`no_sweet_intersection`], all pure functions over an immutable
//!   snapshot of the placed set, returning [`PlacementError`] on rejection.
//! - The snap resolver: [`resolve_snap`], which pulls a dragged divider onto
//!   a nearby sweet edge within [`SNAP_THRESHOLD`] cell units.
//!
//! ## Minimal example
//!
//! ```rust
//! use hakoiri_grid::GridSize;
//! use hakoiri_placement::{
//!     CatalogId, PlacedId, PlacedItem, PlacementError, check_solid,
//! };
//!
//! let grid = GridSize::new(10, 10);
//! let a = PlacedItem::sweet(PlacedId::from_raw(1), CatalogId::from_raw(7), 0, 0, 2, 2);
//!
//! // Overlapping the existing sweet is rejected, flush contact is fine.
//! let items = [a];
//! assert_eq!(
//!     check_solid(grid, &items, hakoiri_grid::CellRect::new(1, 1, 2, 2), None),
//!     Err(PlacementError::Overlap)
//! );
//! assert!(check_solid(grid, &items, hakoiri_grid::CellRect::new(2, 0, 2, 2), None).is_ok());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod snap;
mod types;
mod validate;

pub use snap::{SNAP_THRESHOLD, Snap, resolve_snap};
pub use types::{CatalogId, DividerLine, ItemFlags, ItemKind, PlacedId, PlacedItem, Rotation};
pub use validate::{
    PlacementError, can_place_divider_line, can_place_solid, check_divider_line, check_solid,
    no_sweet_intersection,
};
