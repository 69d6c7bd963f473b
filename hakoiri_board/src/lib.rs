// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hakoiri Board: the interaction and state coordinator of the box-packing
//! engine.
//!
//! [`Board`] owns the canonical collection of placed items for one packaging
//! grid and is the only component that mutates it. Pointer input arrives as
//! [`DragPayload`] values — a new catalog sweet, a new divider template, or
//! an existing placement being moved — plus a pointer position and a
//! [`GridMetrics`] pixel mapping. The board converts the pointer to grid
//! coordinates, runs the snap resolver for dividers, asks the validator for a
//! verdict, and either reports a [`Preview`] (hover, pure) or commits a
//! mutation (drop).
//!
//! Beyond drag and drop, the board applies rotation, lock toggling, removal,
//! divider resizing, and keyboard nudges; runs the auto-layout synthesizer
//! and replaces the divider set with its output; reconciles placements
//! against an externally owned [`Catalog`] snapshot; tracks the running price
//! total; and saves/restores a [`LayoutSnapshot`].
//!
//! Every operation is synchronous and atomic at single-item granularity: a
//! rejected mutation leaves the collection untouched. A drop always
//! re-derives its target from the current collection rather than trusting an
//! earlier hover preview. Entry/exit animation state is modeled as explicit
//! transient flags on the item ([`hakoiri_placement::ItemFlags`]), cleared by
//! the UI layer via [`Board::clear_transient`] and [`Board::finish_remove`]
//! when its animation completes; the engine has no timers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use hakoiri_board::{Board, Catalog, CatalogSweet, DragPayload, DropOutcome, GridMetrics};
//! use hakoiri_placement::CatalogId;
//!
//! let mut board = Board::from_label("10x10").unwrap();
//! let metrics = GridMetrics::new(Point::ZERO, 32.0);
//! let manju = CatalogSweet::new(CatalogId::from_raw(1), "manju", 2, 2, 250);
//!
//! // Hover is pure; drop commits.
//! let preview = board.hover(Point::new(10.0, 10.0), metrics, &DragPayload::NewSweet(&manju));
//! assert!(preview.valid);
//! let outcome = board
//!     .drop(Point::new(10.0, 10.0), metrics, &DragPayload::NewSweet(&manju))
//!     .unwrap();
//! assert!(matches!(outcome, DropOutcome::Placed(_)));
//! assert_eq!(board.total_price(), 250);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
mod catalog;
mod snapshot;

pub use board::{
    Board, BoardError, Direction, DragPayload, DropOutcome, GridMetrics, Preview,
};
pub use catalog::{Catalog, CatalogDivider, CatalogSweet};
pub use snapshot::{InfoDisplaySettings, LayoutSnapshot, RestoreReport};
