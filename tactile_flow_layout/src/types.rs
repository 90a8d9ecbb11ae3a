// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output records for the flow layout pass.

use kurbo::{Point, Size};

/// An item identity paired with its externally measured size.
///
/// The identity type `I` is opaque to this crate; it only needs to be small
/// and copyable so it can be carried through to the matching [`Placement`].
/// Identities are expected to be unique within a single layout call.
/// Widths and heights are expected to be finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measured<I> {
    /// Caller-supplied identity, echoed back in the matching [`Placement`].
    pub id: I,
    /// Measured size of the item.
    pub size: Size,
}

impl<I> Measured<I> {
    /// Creates a measured item from an identity and a size.
    #[must_use]
    pub const fn new(id: I, size: Size) -> Self {
        Self { id, size }
    }
}

/// Horizontal and vertical gaps between placed items.
///
/// The horizontal gap is inserted between adjacent items in a row; the
/// vertical gap between adjacent rows. Neither gap is applied before the
/// first item of a row or above the first row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Gap between adjacent items within a row.
    pub horizontal: f64,
    /// Gap between adjacent rows.
    pub vertical: f64,
}

impl Spacing {
    /// Creates a spacing with independent horizontal and vertical gaps.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Creates a spacing with the same gap on both axes.
    #[must_use]
    pub const fn uniform(gap: f64) -> Self {
        Self::new(gap, gap)
    }
}

/// The computed top-left origin for one item.
///
/// Origins are relative to the layout's own top-left corner and are
/// non-negative by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<I> {
    /// Identity of the item this placement belongs to.
    pub id: I,
    /// Top-left corner of the item, relative to the layout origin.
    pub origin: Point,
}

impl<I> Placement<I> {
    pub(crate) const fn new(id: I, origin: Point) -> Self {
        Self { id, origin }
    }
}
