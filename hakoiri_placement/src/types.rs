// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placed-item data model: ids, kinds, rotation, flags, and geometry
//! accessors.

use alloc::string::String;

use hakoiri_grid::{CellRect, Orientation, Span};

/// Identifier for one placement on the grid.
///
/// Generated by the board when an item is dropped, monotonically increasing,
/// never reused. Stays stable across move/rotate/lock/resize mutations; only
/// creation and deletion change the set of live ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedId(u64);

impl PlacedId {
    /// Constructs an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value, for logging and serialization by higher layers.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Reference to a catalog definition (a confection or a divider template).
///
/// The catalog is externally owned; the engine only carries the id so the
/// surrounding application can reconcile placements against catalog changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogId(u64);

impl CatalogId {
    /// Constructs an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Discriminator between the two classes of placed objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// A solid rectangle of cells.
    Sweet,
    /// A zero-thickness segment on a grid line.
    Divider,
}

/// Quarter-turn rotation state of a sweet.
///
/// Only the extent swap matters for placement: 90° and 270° swap width and
/// height. Dividers do not rotate; their axis is [`Orientation`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// 0 degrees.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl Rotation {
    /// The next quarter turn clockwise.
    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    /// Whether this rotation swaps width and height relative to 0°.
    #[must_use]
    pub const fn swaps_extent(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }

    /// The angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }
}

bitflags::bitflags! {
    /// Per-item state bits.
    ///
    /// `JUST_ADDED` and `REMOVING` are transient display flags: the board
    /// sets them when an item enters or is about to leave, and the UI layer
    /// clears them (via `clear_transient` / `finish_remove`) once its
    /// entry/exit animation completes. No wall-clock timers are involved.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item cannot be moved, rotated, or resized until unlocked.
        const LOCKED     = 0b0000_0001;
        /// Item was placed recently; drives the entry animation.
        const JUST_ADDED = 0b0000_0010;
        /// Item is fading out ahead of removal.
        const REMOVING   = 0b0000_0100;
    }
}

// Bitflags types cannot carry serde derives; persist the raw bits instead.
#[cfg(feature = "serde")]
impl serde::Serialize for ItemFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.bits(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}

/// A divider's geometry in grid-line terms.
///
/// `anchor` is the coordinate of the grid line the segment sits on (y for
/// horizontal, x for vertical); the segment covers `[start, start + length)`
/// along the line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerLine {
    /// Which axis the segment runs along.
    pub orientation: Orientation,
    /// Grid-line coordinate on the perpendicular axis.
    pub anchor: i32,
    /// Start coordinate along the line.
    pub start: i32,
    /// Segment length in cell units.
    pub length: i32,
}

impl DividerLine {
    /// Creates a line from its parts.
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: i32, start: i32, length: i32) -> Self {
        Self {
            orientation,
            anchor,
            start,
            length,
        }
    }

    /// The covered interval along the line axis.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.start + self.length)
    }
}

/// One item placed on the grid: a sweet or a divider.
///
/// Sweets store their cell rectangle directly in `x, y, width, height`.
/// Dividers reuse the same fields in the grid-line representation: exactly
/// one of `width`/`height` is 0, and the position holds the line coordinate
/// on that axis. [`PlacedItem::divider_line`] decodes this.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    /// Unique placement id.
    pub id: PlacedId,
    /// The catalog definition this placement came from.
    pub catalog_id: CatalogId,
    /// Sweet or divider.
    pub kind: ItemKind,
    /// Left coordinate (or the line coordinate for a vertical divider).
    pub x: i32,
    /// Top coordinate (or the line coordinate for a horizontal divider).
    pub y: i32,
    /// Extent in columns; 0 for a vertical divider.
    pub width: i32,
    /// Extent in rows; 0 for a horizontal divider.
    pub height: i32,
    /// Divider axis; transient rotation bookkeeping for sweets.
    pub orientation: Orientation,
    /// Quarter-turn rotation; meaningful for sweets only.
    pub rotation: Rotation,
    /// Lock and transient display flags.
    pub flags: ItemFlags,
    /// Unit price, summed into the running total for sweets.
    pub price: u64,
    /// Display name.
    pub name: String,
    /// Display image location.
    pub image_url: String,
}

impl PlacedItem {
    /// Creates a sweet placement with empty display data.
    #[must_use]
    pub fn sweet(id: PlacedId, catalog_id: CatalogId, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            catalog_id,
            kind: ItemKind::Sweet,
            x,
            y,
            width,
            height,
            orientation: Orientation::Horizontal,
            rotation: Rotation::R0,
            flags: ItemFlags::empty(),
            price: 0,
            name: String::new(),
            image_url: String::new(),
        }
    }

    /// Creates a divider placement from its line geometry.
    #[must_use]
    pub fn divider(id: PlacedId, catalog_id: CatalogId, line: DividerLine) -> Self {
        let (x, y, width, height) = match line.orientation {
            Orientation::Horizontal => (line.start, line.anchor, line.length, 0),
            Orientation::Vertical => (line.anchor, line.start, 0, line.length),
        };
        Self {
            id,
            catalog_id,
            kind: ItemKind::Divider,
            x,
            y,
            width,
            height,
            orientation: line.orientation,
            rotation: Rotation::R0,
            flags: ItemFlags::empty(),
            price: 0,
            name: String::new(),
            image_url: String::new(),
        }
    }

    /// The cell rectangle this item covers.
    ///
    /// For dividers this is an empty rectangle (zero extent on one axis);
    /// divider collision logic goes through [`PlacedItem::divider_line`]
    /// instead.
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        CellRect::new(self.x, self.y, self.width, self.height)
    }

    /// Decodes the grid-line representation of a divider.
    ///
    /// Returns `None` for sweets.
    #[must_use]
    pub const fn divider_line(&self) -> Option<DividerLine> {
        match self.kind {
            ItemKind::Sweet => None,
            ItemKind::Divider => Some(match self.orientation {
                Orientation::Horizontal => {
                    DividerLine::new(Orientation::Horizontal, self.y, self.x, self.width)
                }
                Orientation::Vertical => {
                    DividerLine::new(Orientation::Vertical, self.x, self.y, self.height)
                }
            }),
        }
    }

    /// Whether the item is locked against move/rotate/resize.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.flags.contains(ItemFlags::LOCKED)
    }
}
