// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted layout snapshots: save a board, rehydrate it defensively.
//!
//! A snapshot is plain data shaped for serialization by the surrounding
//! application (the `serde` feature derives the traits). Loading is never
//! trusted: a stored layout may reference catalog items that have since been
//! deleted, or coordinates that no longer fit the box, so [`Board::restore`]
//! re-validates every item and reports what it had to drop.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use hakoiri_placement::{CatalogId, ItemFlags, ItemKind, PlacedId, PlacedItem};

use crate::board::{Board, BoardError};
use crate::catalog::Catalog;

/// Which item details the UI overlays on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoDisplaySettings {
    /// Show each sweet's name.
    pub show_name: bool,
    /// Show each sweet's price.
    pub show_price: bool,
}

impl Default for InfoDisplaySettings {
    fn default() -> Self {
        Self {
            show_name: true,
            show_price: true,
        }
    }
}

/// A serializable layout: box size, placed items, display preferences.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    /// The `"WxH"` box-size label.
    pub box_size: String,
    /// The placed items, in placement order.
    pub items: Vec<PlacedItem>,
    /// Info-display preferences.
    pub info_display: InfoDisplaySettings,
}

/// What [`Board::restore`] had to drop while rehydrating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoreReport {
    /// Sweets whose catalog definition no longer exists.
    pub stale: Vec<PlacedId>,
    /// Items whose stored geometry is no longer admissible.
    pub invalid: Vec<PlacedId>,
}

impl RestoreReport {
    /// `true` when every stored item was restored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.invalid.is_empty()
    }
}

impl Board {
    /// Captures the current layout as plain data.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            box_size: format!("{}", self.grid),
            items: self.items.clone(),
            info_display: self.info_display,
        }
    }

    /// Rehydrates a board from a stored layout, defensively.
    ///
    /// Sweets referencing a catalog id that is gone are dropped as stale
    /// (the same policy as [`Board::reconcile_with_catalog`]); surviving
    /// items are then re-validated in placement order and geometric
    /// offenders dropped as invalid. Transient display flags are cleared;
    /// locks are kept. Fresh ids allocated later never collide with restored
    /// ones.
    ///
    /// # Errors
    ///
    /// [`BoardError::BadBoxSize`] if the stored label does not parse.
    pub fn restore(
        snapshot: LayoutSnapshot,
        catalog: &Catalog,
    ) -> Result<(Self, RestoreReport), BoardError> {
        let mut board = Self::from_label(&snapshot.box_size)?;
        board.info_display = snapshot.info_display;

        let known: HashSet<CatalogId> = catalog.sweets.iter().map(|s| s.id).collect();
        let mut report = RestoreReport::default();

        for mut item in snapshot.items {
            if item.kind == ItemKind::Sweet && !known.contains(&item.catalog_id) {
                report.stale.push(item.id);
                continue;
            }
            item.flags.remove(ItemFlags::JUST_ADDED | ItemFlags::REMOVING);
            board.next_id = board.next_id.max(item.id.raw());
            board.items.push(item);
        }
        report.invalid = board.revalidate_retaining();
        Ok((board, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSweet;
    use hakoiri_grid::GridSize;

    fn catalog_with(ids: &[u64]) -> Catalog {
        Catalog {
            sweets: ids
                .iter()
                .map(|&id| CatalogSweet::new(CatalogId::from_raw(id), "daifuku", 2, 2, 100))
                .collect(),
            dividers: Vec::new(),
        }
    }

    fn placed_sweet(id: u64, catalog: u64, x: i32, y: i32) -> PlacedItem {
        PlacedItem::sweet(
            PlacedId::from_raw(id),
            CatalogId::from_raw(catalog),
            x,
            y,
            2,
            2,
        )
    }

    #[test]
    fn snapshot_round_trips_a_clean_board() {
        let mut board = Board::new(GridSize::new(10, 10));
        board.items.push(placed_sweet(1, 7, 0, 0));
        board.next_id = 1;

        let snapshot = board.snapshot();
        assert_eq!(snapshot.box_size, "10x10");
        let (restored, report) = Board::restore(snapshot, &catalog_with(&[7])).unwrap();
        assert!(report.is_clean());
        assert_eq!(restored.items(), board.items());
        assert_eq!(restored.grid(), board.grid());
    }

    #[test]
    fn restore_drops_stale_and_invalid_items() {
        let snapshot = LayoutSnapshot {
            box_size: String::from("4x4"),
            items: alloc::vec![
                placed_sweet(1, 7, 0, 0),
                // Catalog id 99 no longer exists.
                placed_sweet(2, 99, 2, 0),
                // Overlaps item 1.
                placed_sweet(3, 7, 1, 1),
                // Off the 4x4 grid.
                placed_sweet(4, 7, 3, 3),
            ],
            info_display: InfoDisplaySettings::default(),
        };
        let (board, report) = Board::restore(snapshot, &catalog_with(&[7])).unwrap();
        assert_eq!(report.stale, alloc::vec![PlacedId::from_raw(2)]);
        assert_eq!(
            report.invalid,
            alloc::vec![PlacedId::from_raw(3), PlacedId::from_raw(4)]
        );
        assert_eq!(board.items().len(), 1);
    }

    #[test]
    fn restored_ids_never_collide_with_fresh_ones() {
        let snapshot = LayoutSnapshot {
            box_size: String::from("10x10"),
            items: alloc::vec![placed_sweet(41, 7, 0, 0)],
            info_display: InfoDisplaySettings::default(),
        };
        let (mut board, _) = Board::restore(snapshot, &catalog_with(&[7])).unwrap();
        let def = CatalogSweet::new(CatalogId::from_raw(7), "daifuku", 2, 2, 100);
        let outcome = board
            .drop(
                kurbo::Point::new(96.0, 0.0),
                crate::board::GridMetrics::new(kurbo::Point::ZERO, 32.0),
                &crate::board::DragPayload::NewSweet(&def),
            )
            .unwrap();
        let crate::board::DropOutcome::Placed(id) = outcome else {
            panic!("expected a placement");
        };
        assert_eq!(id, PlacedId::from_raw(42));
    }

    #[test]
    fn restore_rejects_bad_box_size() {
        let snapshot = LayoutSnapshot {
            box_size: String::from("banana"),
            items: Vec::new(),
            info_display: InfoDisplaySettings::default(),
        };
        assert!(matches!(
            Board::restore(snapshot, &Catalog::default()),
            Err(BoardError::BadBoxSize(_))
        ));
    }

    #[test]
    fn restore_clears_transient_flags_but_keeps_locks() {
        let mut item = placed_sweet(1, 7, 0, 0);
        item.flags = ItemFlags::LOCKED | ItemFlags::JUST_ADDED;
        let snapshot = LayoutSnapshot {
            box_size: String::from("10x10"),
            items: alloc::vec![item],
            info_display: InfoDisplaySettings::default(),
        };
        let (board, _) = Board::restore(snapshot, &catalog_with(&[7])).unwrap();
        let restored = board.item(PlacedId::from_raw(1)).unwrap();
        assert_eq!(restored.flags, ItemFlags::LOCKED);
    }
}
