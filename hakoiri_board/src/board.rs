// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The board: canonical placed-item collection and every mutation on it.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use kurbo::Point;

use hakoiri_autolayout::{AutoLayoutError, auto_layout};
use hakoiri_grid::{
    CellRect, GridSize, Orientation, ParseGridSizeError, Span, cell_at, fractional_cell,
    nearest_line,
};
use hakoiri_placement::{
    CatalogId, DividerLine, ItemFlags, ItemKind, PlacedId, PlacedItem, PlacementError,
    Rotation, check_divider_line, check_solid, resolve_snap,
};

use crate::catalog::Catalog;
use crate::snapshot::InfoDisplaySettings;

/// Pixel mapping of the rendered grid: where cell (0, 0) starts on screen
/// and how many pixels one cell covers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridMetrics {
    /// Top-left pixel of cell (0, 0).
    pub origin: Point,
    /// Cell edge length in pixels.
    pub cell_size: f64,
}

impl GridMetrics {
    /// Creates a pixel mapping.
    #[must_use]
    pub const fn new(origin: Point, cell_size: f64) -> Self {
        Self { origin, cell_size }
    }
}

/// What is being dragged over the grid.
///
/// Each variant carries only the data relevant to it and is dispatched by
/// exhaustive matching; there is no runtime field probing.
#[derive(Copy, Clone, Debug)]
pub enum DragPayload<'a> {
    /// A sweet from the catalog, not yet placed.
    NewSweet(&'a crate::catalog::CatalogSweet),
    /// A divider template from the catalog, not yet placed.
    NewDivider(&'a crate::catalog::CatalogDivider),
    /// An existing placement being repositioned.
    MoveExisting(PlacedId),
}

/// Hover feedback for the current drag position.
///
/// Geometry uses the placed-item encoding: sweets have both extents positive;
/// divider previews have zero extent on the anchor axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preview {
    /// Left coordinate (or the line coordinate for a vertical divider).
    pub x: i32,
    /// Top coordinate (or the line coordinate for a horizontal divider).
    pub y: i32,
    /// Extent in columns; 0 for a vertical divider.
    pub width: i32,
    /// Extent in rows; 0 for a horizontal divider.
    pub height: i32,
    /// Divider axis; `Horizontal` for sweets.
    pub orientation: Orientation,
    /// Whether dropping here would succeed against the current collection.
    pub valid: bool,
    /// Whether the divider anchor was pulled onto a nearby sweet edge.
    pub snapped: bool,
}

/// What a successful drop did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// A new item was placed, with a freshly generated id.
    Placed(PlacedId),
    /// An existing item was moved in place.
    Moved(PlacedId),
}

/// Keyboard nudge direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Why a board operation was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// No placed item has the given id.
    UnknownItem,
    /// The item is locked against move/rotate/resize.
    LockedItem,
    /// The operation does not apply to this kind of item.
    KindMismatch,
    /// The catalog item is out of stock and cannot be placed.
    OutOfStock,
    /// The target placement is geometrically inadmissible.
    Placement(PlacementError),
    /// Auto-layout could not produce any dividers.
    AutoLayout(AutoLayoutError),
    /// The box-size label could not be parsed.
    BadBoxSize(ParseGridSizeError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem => f.write_str("no placed item with that id"),
            Self::LockedItem => f.write_str("item is locked"),
            Self::KindMismatch => f.write_str("operation does not apply to this kind of item"),
            Self::OutOfStock => f.write_str("catalog item is out of stock"),
            Self::Placement(e) => write!(f, "placement rejected: {e}"),
            Self::AutoLayout(e) => write!(f, "auto-layout failed: {e}"),
            Self::BadBoxSize(e) => write!(f, "bad box size label: {e}"),
        }
    }
}

impl core::error::Error for BoardError {}

impl From<PlacementError> for BoardError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

impl From<AutoLayoutError> for BoardError {
    fn from(e: AutoLayoutError) -> Self {
        Self::AutoLayout(e)
    }
}

impl From<ParseGridSizeError> for BoardError {
    fn from(e: ParseGridSizeError) -> Self {
        Self::BadBoxSize(e)
    }
}

/// A fully derived drop target, shared between hover and drop so both see
/// the same geometry.
enum Target {
    Solid {
        rect: CellRect,
        exclude: Option<PlacedId>,
    },
    Line {
        line: DividerLine,
        exclude: Option<PlacedId>,
        snapped: bool,
    },
}

struct Derived {
    target: Target,
    /// A refusal that applies regardless of geometry (locked item,
    /// out-of-stock sweet). Hover shows these as invalid; drop errors.
    refused: Option<BoardError>,
}

/// The interaction/state coordinator for one packaging grid.
///
/// Exclusively owns the placed-item collection; every other engine component
/// receives an immutable snapshot and returns a pure verdict.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: GridSize,
    pub(crate) items: Vec<PlacedItem>,
    pub(crate) next_id: u64,
    pub(crate) info_display: InfoDisplaySettings,
}

impl Board {
    /// Creates an empty board over the given grid.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            items: Vec::new(),
            next_id: 0,
            info_display: InfoDisplaySettings::default(),
        }
    }

    /// Creates an empty board from a `"WxH"` box-size label.
    ///
    /// # Errors
    ///
    /// [`BoardError::BadBoxSize`] if the label does not parse.
    pub fn from_label(label: &str) -> Result<Self, BoardError> {
        Ok(Self::new(GridSize::parse(label)?))
    }

    /// The current grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Read-only view of the placed items.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Looks up one placed item.
    #[must_use]
    pub fn item(&self, id: PlacedId) -> Option<&PlacedItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Info-display preferences carried with the layout.
    #[must_use]
    pub fn info_display(&self) -> InfoDisplaySettings {
        self.info_display
    }

    /// Updates the info-display preferences.
    pub fn set_info_display(&mut self, settings: InfoDisplaySettings) {
        self.info_display = settings;
    }

    /// Sum of prices over all placed sweets.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .filter(|i| i.kind == ItemKind::Sweet)
            .map(|i| i.price)
            .sum()
    }

    fn alloc_id(&mut self) -> PlacedId {
        self.next_id += 1;
        PlacedId::from_raw(self.next_id)
    }

    fn position(&self, id: PlacedId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Derives the drop target for a payload at a pointer position.
    fn derive(
        &self,
        pointer: Point,
        metrics: GridMetrics,
        payload: &DragPayload<'_>,
    ) -> Result<Derived, BoardError> {
        match payload {
            DragPayload::NewSweet(def) => {
                let (cx, cy) = cell_at(pointer, metrics.origin, metrics.cell_size);
                Ok(Derived {
                    target: Target::Solid {
                        rect: CellRect::new(cx, cy, def.width, def.height),
                        exclude: None,
                    },
                    refused: (!def.in_stock).then_some(BoardError::OutOfStock),
                })
            }
            DragPayload::NewDivider(def) => Ok(Derived {
                target: self.derive_line(pointer, metrics, def.orientation, def.length, None),
                refused: None,
            }),
            DragPayload::MoveExisting(id) => {
                let item = self.item(*id).ok_or(BoardError::UnknownItem)?;
                let refused = item.is_locked().then_some(BoardError::LockedItem);
                let target = match item.divider_line() {
                    None => {
                        let (cx, cy) = cell_at(pointer, metrics.origin, metrics.cell_size);
                        Target::Solid {
                            rect: CellRect::new(cx, cy, item.width, item.height),
                            exclude: Some(*id),
                        }
                    }
                    Some(line) => self.derive_line(
                        pointer,
                        metrics,
                        line.orientation,
                        line.length,
                        Some(*id),
                    ),
                };
                Ok(Derived { target, refused })
            }
        }
    }

    /// Derives a divider target: start cell from the pointer, anchor snapped
    /// to a nearby sweet edge or rounded to the nearest grid line.
    fn derive_line(
        &self,
        pointer: Point,
        metrics: GridMetrics,
        orientation: Orientation,
        length: i32,
        exclude: Option<PlacedId>,
    ) -> Target {
        let (cx, cy) = cell_at(pointer, metrics.origin, metrics.cell_size);
        let (fx, fy) = fractional_cell(pointer, metrics.origin, metrics.cell_size);
        let (start, anchor_f) = match orientation {
            Orientation::Horizontal => (cx, fy),
            Orientation::Vertical => (cy, fx),
        };
        let span = Span::new(start, start + length);
        let snap = resolve_snap(anchor_f, span, orientation, &self.items, exclude);
        let anchor = snap.map_or_else(|| nearest_line(anchor_f), |s| s.anchor);
        Target::Line {
            line: DividerLine::new(orientation, anchor, start, length),
            exclude,
            snapped: snap.is_some(),
        }
    }

    fn validate(&self, target: &Target) -> Result<(), PlacementError> {
        match target {
            Target::Solid { rect, exclude } => check_solid(self.grid, &self.items, *rect, *exclude),
            Target::Line { line, exclude, .. } => {
                check_divider_line(self.grid, &self.items, *line, *exclude)
            }
        }
    }

    /// Computes hover feedback for the current drag position.
    ///
    /// Pure: never mutates the collection. A later hover in the same gesture
    /// simply supersedes this one; nothing here is remembered by the board,
    /// and [`Board::drop`] re-derives everything from scratch.
    #[must_use]
    pub fn hover(&self, pointer: Point, metrics: GridMetrics, payload: &DragPayload<'_>) -> Preview {
        match self.derive(pointer, metrics, payload) {
            Ok(derived) => {
                let valid =
                    derived.refused.is_none() && self.validate(&derived.target).is_ok();
                match derived.target {
                    Target::Solid { rect, .. } => Preview {
                        x: rect.x,
                        y: rect.y,
                        width: rect.width,
                        height: rect.height,
                        orientation: Orientation::Horizontal,
                        valid,
                        snapped: false,
                    },
                    Target::Line { line, snapped, .. } => {
                        let (x, y, width, height) = match line.orientation {
                            Orientation::Horizontal => (line.start, line.anchor, line.length, 0),
                            Orientation::Vertical => (line.anchor, line.start, 0, line.length),
                        };
                        Preview {
                            x,
                            y,
                            width,
                            height,
                            orientation: line.orientation,
                            valid,
                            snapped,
                        }
                    }
                }
            }
            Err(_) => {
                let (cx, cy) = cell_at(pointer, metrics.origin, metrics.cell_size);
                Preview {
                    x: cx,
                    y: cy,
                    width: 0,
                    height: 0,
                    orientation: Orientation::Horizontal,
                    valid: false,
                    snapped: false,
                }
            }
        }
    }

    /// Commits a drag gesture.
    ///
    /// Re-derives the target from the current collection state; a preview
    /// computed earlier in the gesture carries no authority. New placements
    /// get a fresh id and the `JUST_ADDED` flag; moves update the existing
    /// item's position in place.
    ///
    /// # Errors
    ///
    /// [`BoardError::Placement`] on geometric rejection, plus
    /// [`BoardError::OutOfStock`], [`BoardError::LockedItem`], or
    /// [`BoardError::UnknownItem`] depending on the payload.
    pub fn drop(
        &mut self,
        pointer: Point,
        metrics: GridMetrics,
        payload: &DragPayload<'_>,
    ) -> Result<DropOutcome, BoardError> {
        let derived = self.derive(pointer, metrics, payload)?;
        if let Some(refusal) = derived.refused {
            return Err(refusal);
        }
        self.validate(&derived.target)?;

        match (payload, derived.target) {
            (DragPayload::NewSweet(def), Target::Solid { rect, .. }) => {
                let id = self.alloc_id();
                let mut item = PlacedItem::sweet(id, def.id, rect.x, rect.y, rect.width, rect.height);
                item.price = def.price;
                item.name = def.name.clone();
                item.image_url = def.image_url.clone();
                item.flags = ItemFlags::JUST_ADDED;
                self.items.push(item);
                Ok(DropOutcome::Placed(id))
            }
            (DragPayload::NewDivider(def), Target::Line { line, .. }) => {
                let id = self.alloc_id();
                let mut item = PlacedItem::divider(id, def.id, line);
                item.name = def.name.clone();
                item.image_url = def.image_url.clone();
                item.flags = ItemFlags::JUST_ADDED;
                self.items.push(item);
                Ok(DropOutcome::Placed(id))
            }
            (DragPayload::MoveExisting(id), target) => {
                let (x, y) = match target {
                    Target::Solid { rect, .. } => (rect.x, rect.y),
                    Target::Line { line, .. } => match line.orientation {
                        Orientation::Horizontal => (line.start, line.anchor),
                        Orientation::Vertical => (line.anchor, line.start),
                    },
                };
                let idx = self.position(*id).ok_or(BoardError::UnknownItem)?;
                self.items[idx].x = x;
                self.items[idx].y = y;
                Ok(DropOutcome::Moved(*id))
            }
            // `derive` pairs sweets with solid targets and dividers with
            // line targets; any other pairing cannot commit.
            _ => Err(BoardError::KindMismatch),
        }
    }

    /// Rotates a sweet a quarter turn, swapping its extent.
    ///
    /// The swapped rectangle is validated (excluding the item itself) before
    /// anything changes; on rejection the item is untouched. After a
    /// successful swap the stored angle returns to 0° — only the extent swap
    /// is observable to placement.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownItem`], [`BoardError::KindMismatch`] for
    /// dividers, [`BoardError::LockedItem`], or [`BoardError::Placement`]
    /// when the swapped rectangle does not fit.
    pub fn rotate(&mut self, id: PlacedId) -> Result<(), BoardError> {
        let idx = self.position(id).ok_or(BoardError::UnknownItem)?;
        let item = &self.items[idx];
        if item.kind != ItemKind::Sweet {
            return Err(BoardError::KindMismatch);
        }
        if item.is_locked() {
            return Err(BoardError::LockedItem);
        }
        let swapped = CellRect::new(item.x, item.y, item.height, item.width);
        check_solid(self.grid, &self.items, swapped, Some(id))?;

        let item = &mut self.items[idx];
        core::mem::swap(&mut item.width, &mut item.height);
        item.rotation = Rotation::R0;
        Ok(())
    }

    /// Toggles the lock flag; returns the new locked state.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownItem`].
    pub fn toggle_lock(&mut self, id: PlacedId) -> Result<bool, BoardError> {
        let idx = self.position(id).ok_or(BoardError::UnknownItem)?;
        self.items[idx].flags.toggle(ItemFlags::LOCKED);
        Ok(self.items[idx].is_locked())
    }

    /// Marks an item as leaving, for the removal animation.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownItem`].
    pub fn begin_remove(&mut self, id: PlacedId) -> Result<(), BoardError> {
        let idx = self.position(id).ok_or(BoardError::UnknownItem)?;
        self.items[idx].flags.insert(ItemFlags::REMOVING);
        Ok(())
    }

    /// Actually removes an item, once the UI's exit animation is done.
    ///
    /// Returns whether anything was removed; calling this for an id that is
    /// already gone is a harmless no-op, like an animation callback firing
    /// after the item left for another reason.
    pub fn finish_remove(&mut self, id: PlacedId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Clears the entry-animation flag once the UI is done with it.
    ///
    /// Returns whether the item still exists.
    pub fn clear_transient(&mut self, id: PlacedId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.items[idx].flags.remove(ItemFlags::JUST_ADDED);
                true
            }
            None => false,
        }
    }

    /// Changes a divider's length at its existing anchor.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownItem`], [`BoardError::KindMismatch`] for sweets,
    /// [`BoardError::LockedItem`], or [`BoardError::Placement`] when the new
    /// length does not fit.
    pub fn resize_divider(&mut self, id: PlacedId, new_length: i32) -> Result<(), BoardError> {
        let idx = self.position(id).ok_or(BoardError::UnknownItem)?;
        let item = &self.items[idx];
        if item.is_locked() {
            return Err(BoardError::LockedItem);
        }
        let mut line = item.divider_line().ok_or(BoardError::KindMismatch)?;
        line.length = new_length;
        check_divider_line(self.grid, &self.items, line, Some(id))?;

        let item = &mut self.items[idx];
        match line.orientation {
            Orientation::Horizontal => item.width = new_length,
            Orientation::Vertical => item.height = new_length,
        }
        Ok(())
    }

    /// Nudges an item one cell in the given direction.
    ///
    /// Best-effort: returns `false` (and changes nothing) for unknown ids,
    /// locked items, and rejected targets. No error surfaces; a refused
    /// nudge is not worth a modal.
    pub fn move_by_keyboard(&mut self, id: PlacedId, direction: Direction) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let item = &self.items[idx];
        if item.is_locked() {
            return false;
        }
        let (dx, dy) = direction.delta();
        let (x, y) = (item.x + dx, item.y + dy);
        let admissible = match item.divider_line() {
            None => check_solid(
                self.grid,
                &self.items,
                CellRect::new(x, y, item.width, item.height),
                Some(id),
            )
            .is_ok(),
            Some(line) => {
                let shifted = match line.orientation {
                    Orientation::Horizontal => DividerLine::new(line.orientation, y, x, line.length),
                    Orientation::Vertical => DividerLine::new(line.orientation, x, y, line.length),
                };
                check_divider_line(self.grid, &self.items, shifted, Some(id)).is_ok()
            }
        };
        if !admissible {
            return false;
        }
        self.items[idx].x = x;
        self.items[idx].y = y;
        true
    }

    /// Replaces the entire divider set with a synthesized one.
    ///
    /// Runs the auto-layout synthesizer over the current sweets, removes all
    /// existing dividers, and places the result as fresh items referencing
    /// `template` (the divider template the placements are billed/displayed
    /// as). Returns how many dividers were placed. The caller is expected to
    /// confirm the destructive replacement with the user first.
    ///
    /// # Errors
    ///
    /// [`BoardError::AutoLayout`] when there is nothing to separate.
    pub fn apply_auto_layout(&mut self, template: CatalogId) -> Result<usize, BoardError> {
        let segments = auto_layout(&self.items, self.grid)?;
        self.items.retain(|i| i.kind == ItemKind::Sweet);
        let count = segments.len();
        for segment in segments {
            let id = self.alloc_id();
            self.items.push(PlacedItem::divider(id, template, segment));
        }
        Ok(count)
    }

    /// Drops placed sweets whose catalog definition no longer exists.
    ///
    /// Returns the removed ids so the UI can tell the user what disappeared.
    /// Dividers are untouched; divider templates are display-only.
    pub fn reconcile_with_catalog(&mut self, catalog: &Catalog) -> Vec<PlacedId> {
        let known: HashSet<CatalogId> = catalog.sweets.iter().map(|s| s.id).collect();
        let mut removed = Vec::new();
        self.items.retain(|item| {
            let keep = item.kind != ItemKind::Sweet || known.contains(&item.catalog_id);
            if !keep {
                removed.push(item.id);
            }
            keep
        });
        removed
    }

    /// Removes the given placements, as reported unavailable by the store's
    /// stock check. Returns how many were actually removed.
    pub fn remove_unavailable(&mut self, ids: &[PlacedId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        before - self.items.len()
    }

    /// Switches to a new box size, dropping placements that no longer fit.
    ///
    /// Every surviving item revalidates against the new grid in placement
    /// order; the removed ids are returned for user notice.
    ///
    /// # Errors
    ///
    /// [`BoardError::BadBoxSize`] if the label does not parse (the
    /// collection is untouched in that case).
    pub fn set_box_size(&mut self, label: &str) -> Result<Vec<PlacedId>, BoardError> {
        self.grid = GridSize::parse(label)?;
        Ok(self.revalidate_retaining())
    }

    /// Re-checks every item against the grid and the items accepted before
    /// it, dropping offenders. Shared by box-size changes and restore.
    pub(crate) fn revalidate_retaining(&mut self) -> Vec<PlacedId> {
        let mut accepted: Vec<PlacedItem> = Vec::with_capacity(self.items.len());
        let mut removed = Vec::new();
        for item in self.items.drain(..) {
            let ok = match item.divider_line() {
                None => check_solid(self.grid, &accepted, item.rect(), None).is_ok(),
                Some(line) => check_divider_line(self.grid, &accepted, line, None).is_ok(),
            };
            if ok {
                accepted.push(item);
            } else {
                removed.push(item.id);
            }
        }
        self.items = accepted;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSweet;

    fn metrics() -> GridMetrics {
        GridMetrics::new(Point::ZERO, 32.0)
    }

    fn sweet_def(id: u64, w: i32, h: i32, price: u64) -> CatalogSweet {
        CatalogSweet::new(CatalogId::from_raw(id), "yokan", w, h, price)
    }

    #[test]
    fn hover_does_not_mutate() {
        let board = Board::new(GridSize::new(10, 10));
        let def = sweet_def(1, 2, 2, 100);
        let preview = board.hover(Point::new(0.0, 0.0), metrics(), &DragPayload::NewSweet(&def));
        assert!(preview.valid);
        assert!(board.items().is_empty());
    }

    #[test]
    fn out_of_stock_is_refused_even_when_geometry_fits() {
        let mut board = Board::new(GridSize::new(10, 10));
        let mut def = sweet_def(1, 2, 2, 100);
        def.in_stock = false;
        let preview = board.hover(Point::new(0.0, 0.0), metrics(), &DragPayload::NewSweet(&def));
        assert!(!preview.valid);
        assert_eq!(
            board.drop(Point::new(0.0, 0.0), metrics(), &DragPayload::NewSweet(&def)),
            Err(BoardError::OutOfStock)
        );
    }

    #[test]
    fn drop_generates_fresh_ids_and_marks_new() {
        let mut board = Board::new(GridSize::new(10, 10));
        let def = sweet_def(1, 2, 2, 100);
        let DropOutcome::Placed(a) = board
            .drop(Point::new(0.0, 0.0), metrics(), &DragPayload::NewSweet(&def))
            .unwrap()
        else {
            panic!("expected a placement");
        };
        let DropOutcome::Placed(b) = board
            .drop(Point::new(96.0, 0.0), metrics(), &DragPayload::NewSweet(&def))
            .unwrap()
        else {
            panic!("expected a placement");
        };
        assert_ne!(a, b);
        assert!(board.item(a).unwrap().flags.contains(ItemFlags::JUST_ADDED));
        assert!(board.clear_transient(a));
        assert!(!board.item(a).unwrap().flags.contains(ItemFlags::JUST_ADDED));
    }

    #[test]
    fn unknown_move_payload_previews_invalid_and_errors_on_drop() {
        let mut board = Board::new(GridSize::new(10, 10));
        let ghost = DragPayload::MoveExisting(PlacedId::from_raw(42));
        let preview = board.hover(Point::new(0.0, 0.0), metrics(), &ghost);
        assert!(!preview.valid);
        assert_eq!(
            board.drop(Point::new(0.0, 0.0), metrics(), &ghost),
            Err(BoardError::UnknownItem)
        );
    }

    #[test]
    fn finish_remove_is_a_noop_for_missing_ids() {
        let mut board = Board::new(GridSize::new(10, 10));
        assert!(!board.finish_remove(PlacedId::from_raw(7)));
    }
}
