// Copyright 2026 the Hakoiri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid dimensions and box-size label parsing.

use core::fmt;

use crate::{CellRect, Orientation};

/// Dimensions of one packaging grid, in unit cells.
///
/// Derived from a box-size label such as `"10x10"` via [`GridSize::parse`].
/// Both dimensions are positive; the practical range in the reference catalog
/// is 1–20 but any positive pair is accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
}

impl GridSize {
    /// Creates a grid size from raw dimensions.
    ///
    /// Callers are expected to pass positive dimensions; [`GridSize::parse`]
    /// enforces this for label input.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Parses a `"WxH"` box-size label, e.g. `"10x10"` or `"15x15"`.
    ///
    /// Surrounding whitespace on either component is tolerated. The separator
    /// is the ASCII letter `x`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridSizeError`] if the separator is missing, either
    /// component fails to parse as an integer, or a component is not positive.
    pub fn parse(label: &str) -> Result<Self, ParseGridSizeError> {
        let (w, h) = label
            .split_once('x')
            .ok_or(ParseGridSizeError::MissingSeparator)?;
        let width: i32 = w
            .trim()
            .parse()
            .map_err(|_| ParseGridSizeError::BadNumber)?;
        let height: i32 = h
            .trim()
            .parse()
            .map_err(|_| ParseGridSizeError::BadNumber)?;
        if width <= 0 || height <= 0 {
            return Err(ParseGridSizeError::NonPositive);
        }
        Ok(Self { width, height })
    }

    /// Returns `true` if the rectangle lies entirely within the grid.
    ///
    /// Uses the half-open cell space `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains_rect(&self, rect: &CellRect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// Returns `true` if a grid-line anchor is valid for the given orientation.
    ///
    /// Unlike cells, line anchors are valid on the closed range
    /// `[0, dimension]`: a divider may sit flush on the outer boundary.
    #[must_use]
    pub fn contains_line_anchor(&self, anchor: i32, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => anchor >= 0 && anchor <= self.height,
            Orientation::Vertical => anchor >= 0 && anchor <= self.width,
        }
    }

    /// The grid extent along the given orientation's line axis.
    ///
    /// A horizontal line spans x, so its extent is `width`; vertical spans y.
    #[must_use]
    pub const fn extent_along(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Failure to parse a box-size label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseGridSizeError {
    /// No `x` separator in the label.
    MissingSeparator,
    /// One of the components is not an integer.
    BadNumber,
    /// One of the components is zero or negative.
    NonPositive,
}

impl fmt::Display for ParseGridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("box size label has no 'x' separator"),
            Self::BadNumber => f.write_str("box size component is not an integer"),
            Self::NonPositive => f.write_str("box size components must be positive"),
        }
    }
}

impl core::error::Error for ParseGridSizeError {}
