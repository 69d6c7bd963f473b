// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only catalog snapshot consumed by the board.
//!
//! The catalog itself is owned by the surrounding application (it is admin
//! data behind a database); the board only ever sees an occasionally
//! refreshed snapshot passed by reference, and never assumes entries stay
//! stable between operations.

use alloc::string::String;
use alloc::vec::Vec;

use hakoiri_grid::Orientation;
use hakoiri_placement::CatalogId;

/// A confection definition from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSweet {
    /// Catalog id.
    pub id: CatalogId,
    /// Display name.
    pub name: String,
    /// Footprint width in cells at 0° rotation.
    pub width: i32,
    /// Footprint height in cells at 0° rotation.
    pub height: i32,
    /// Unit price.
    pub price: u64,
    /// Display image location.
    pub image_url: String,
    /// Whether the item can currently be placed. Out-of-stock sweets are
    /// refused at drop even if the geometry fits.
    pub in_stock: bool,
    /// Display category label.
    pub category: String,
}

impl CatalogSweet {
    /// Creates an in-stock sweet definition with empty display metadata.
    #[must_use]
    pub fn new(id: CatalogId, name: &str, width: i32, height: i32, price: u64) -> Self {
        Self {
            id,
            name: String::from(name),
            width,
            height,
            price,
            image_url: String::new(),
            in_stock: true,
            category: String::new(),
        }
    }
}

/// A divider template from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogDivider {
    /// Catalog id.
    pub id: CatalogId,
    /// Display name.
    pub name: String,
    /// Which axis the divider runs along.
    pub orientation: Orientation,
    /// Segment length in cell units.
    pub length: i32,
    /// Display image location.
    pub image_url: String,
}

impl CatalogDivider {
    /// Creates a divider template with empty display metadata.
    #[must_use]
    pub fn new(id: CatalogId, name: &str, orientation: Orientation, length: i32) -> Self {
        Self {
            id,
            name: String::from(name),
            orientation,
            length,
            image_url: String::new(),
        }
    }
}

/// One refresh of the externally owned catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Sweet definitions, in display order.
    pub sweets: Vec<CatalogSweet>,
    /// Divider templates, in display order.
    pub dividers: Vec<CatalogDivider>,
}

impl Catalog {
    /// Looks up a sweet definition by id.
    #[must_use]
    pub fn sweet(&self, id: CatalogId) -> Option<&CatalogSweet> {
        self.sweets.iter().find(|s| s.id == id)
    }

    /// Looks up a divider template by id.
    #[must_use]
    pub fn divider(&self, id: CatalogId) -> Option<&CatalogDivider> {
        self.dividers.iter().find(|d| d.id == id)
    }
}
