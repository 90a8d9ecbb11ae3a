// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid shape and displacement tuning parameters.

use kurbo::{Point, Size};

/// Shape of a uniform grid of square cells.
///
/// `pitch` is the edge-to-edge distance between neighboring cell origins,
/// including the inter-cell gap; the drawable cell side is `pitch - gap`.
/// Each cell's origin is inset by half the gap so that the gap is shared
/// evenly between neighbors, and cell centers follow from the origin plus
/// half the cell side.
///
/// Cells are addressed as `(row, col)` with row 0 at the top and column 0 at
/// the left, in the same coordinate space the touch point is expressed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of rows. Zero is valid and yields an empty modifier grid.
    pub rows: usize,
    /// Number of columns. Zero is valid and yields an empty modifier grid.
    pub cols: usize,
    /// Edge-to-edge cell spacing, gap included.
    pub pitch: f64,
    /// Gap between neighboring cells.
    pub gap: f64,
}

impl GridSpec {
    /// Creates a grid of `rows x cols` cells with the given pitch and gap.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, pitch: f64, gap: f64) -> Self {
        Self {
            rows,
            cols,
            pitch,
            gap,
        }
    }

    /// Returns the drawable side length of one cell (`pitch - gap`).
    #[must_use]
    pub const fn cell_side(&self) -> f64 {
        self.pitch - self.gap
    }

    /// Returns the top-left corner of the cell at `(row, col)`.
    #[must_use]
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        Point::new(
            col as f64 * self.pitch + self.gap / 2.0,
            row as f64 * self.pitch + self.gap / 2.0,
        )
    }

    /// Returns the center of the cell at `(row, col)`.
    #[must_use]
    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        let origin = self.cell_origin(row, col);
        let half = self.cell_side() / 2.0;
        Point::new(origin.x + half, origin.y + half)
    }

    /// Returns the overall footprint of the grid (`cols * pitch` by
    /// `rows * pitch`).
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(
            self.cols as f64 * self.pitch,
            self.rows as f64 * self.pitch,
        )
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Tuning parameters for the displacement effect.
///
/// Scale and opacity interpolate from their `min` at the touch point to
/// their `max` at (and beyond) `influence_radius`. The offset pulls cells
/// toward the touch point with a per-axis magnitude capped at `offset_cap`,
/// decaying to zero at the influence radius.
///
/// An `influence_radius` of zero or less disables the effect entirely: every
/// cell stays at rest even while a touch point is supplied.
///
/// There is no `Default`: sensible values scale with the grid's cell side,
/// so [`DisplacementParams::for_cell_side`] is the canonical starting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacementParams {
    /// Distance at which a touch stops affecting a cell.
    pub influence_radius: f64,
    /// Scale factor for a cell exactly at the touch point.
    pub min_scale: f64,
    /// Scale factor for cells at or beyond the influence radius.
    pub max_scale: f64,
    /// Opacity for a cell exactly at the touch point.
    pub min_opacity: f64,
    /// Opacity for cells at or beyond the influence radius; also the rest
    /// opacity when no touch point is supplied.
    pub max_opacity: f64,
    /// Upper bound on the offset magnitude per axis.
    pub offset_cap: f64,
}

impl DisplacementParams {
    /// Returns the cloth-demo tuning for a grid with the given cell side.
    ///
    /// The effect reaches six cell sides out, shrinks the nearest cells to
    /// 30% size and 25% opacity, and pulls them by at most half a cell side
    /// per axis.
    #[must_use]
    pub const fn for_cell_side(cell_side: f64) -> Self {
        Self {
            influence_radius: 6.0 * cell_side,
            min_scale: 0.3,
            max_scale: 1.0,
            min_opacity: 0.25,
            max_opacity: 0.95,
            offset_cap: cell_side / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{DisplacementParams, GridSpec};

    #[test]
    fn cell_geometry_accounts_for_the_gap() {
        let spec = GridSpec::new(20, 17, 20.0, 1.0);

        assert_eq!(spec.cell_side(), 19.0);
        assert_eq!(spec.cell_origin(0, 0), Point::new(0.5, 0.5));
        assert_eq!(spec.cell_origin(2, 3), Point::new(60.5, 40.5));
        assert_eq!(spec.cell_center(0, 0), Point::new(10.0, 10.0));
        assert_eq!(spec.size(), Size::new(17.0 * 20.0, 20.0 * 20.0));
    }

    #[test]
    fn centers_are_one_pitch_apart() {
        let spec = GridSpec::new(4, 4, 12.5, 0.5);
        let a = spec.cell_center(1, 1);
        let b = spec.cell_center(1, 2);
        let c = spec.cell_center(2, 1);

        assert_eq!(b.x - a.x, spec.pitch);
        assert_eq!(c.y - a.y, spec.pitch);
    }

    #[test]
    fn emptiness_checks_both_axes() {
        assert!(GridSpec::new(0, 5, 10.0, 1.0).is_empty());
        assert!(GridSpec::new(5, 0, 10.0, 1.0).is_empty());
        assert!(!GridSpec::new(1, 1, 10.0, 1.0).is_empty());
    }

    #[test]
    fn cloth_tuning_scales_with_the_cell_side() {
        let params = DisplacementParams::for_cell_side(19.0);

        assert_eq!(params.influence_radius, 114.0);
        assert_eq!(params.offset_cap, 9.5);
        assert!(params.min_scale < params.max_scale);
        assert!(params.min_opacity < params.max_opacity);
    }
}
