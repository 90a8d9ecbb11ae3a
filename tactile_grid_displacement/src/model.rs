// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-grid modifier computation.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::grid::{DisplacementParams, GridSpec};
use crate::lerp::lerp;

/// Derived visual modifiers for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellModifier {
    /// Size scale factor. `1.0` means the cell is drawn at full size.
    pub scale: f64,
    /// Opacity of the cell.
    pub opacity: f64,
    /// Positional offset from the cell's resting origin.
    pub offset: Vec2,
}

impl CellModifier {
    /// The rest-state modifier: full size, no offset, rest opacity.
    #[must_use]
    pub const fn rest(max_opacity: f64) -> Self {
        Self {
            scale: 1.0,
            opacity: max_opacity,
            offset: Vec2::ZERO,
        }
    }
}

/// One [`CellModifier`] per grid cell, stored row-major.
///
/// Rebuilt from scratch by every [`compute_modifiers`] call; holds no state
/// beyond the cells themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifierGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellModifier>,
}

impl ModifierGrid {
    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the modifier for the cell at `(row, col)`, or `None` when the
    /// coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&CellModifier> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Iterates over all cells in row-major order as `((row, col), modifier)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &CellModifier)> {
        // `cells` is empty whenever `cols` is zero, so the division below
        // only runs with a non-zero column count.
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i / self.cols, i % self.cols), cell))
    }
}

/// Computes the modifier for every cell of `spec` under the given touch point.
///
/// With no touch point every cell is at rest: scale `1.0`, opacity
/// `params.max_opacity`, zero offset. With a touch point, each cell's
/// distance from its center to the touch is normalized against
/// `params.influence_radius` and drives three linear ramps:
///
/// - scale from `min_scale` (at the touch) up to `max_scale`,
/// - opacity from `min_opacity` up to `max_opacity`,
/// - a per-axis pull toward the touch point whose magnitude is the axis
///   distance capped at `offset_cap`, fading out at the influence radius.
///
/// Cells at or beyond the influence radius are exactly at rest, as is the
/// whole grid when `influence_radius` is zero or negative. An empty grid
/// yields an empty result. The computation is total and deterministic; the
/// caller triggers it on every change to `spec`, `touch`, or `params`.
#[must_use]
pub fn compute_modifiers(
    spec: GridSpec,
    touch: Option<Point>,
    params: &DisplacementParams,
) -> ModifierGrid {
    let mut cells = Vec::with_capacity(spec.rows.saturating_mul(spec.cols));

    for row in 0..spec.rows {
        for col in 0..spec.cols {
            let modifier = match touch {
                Some(touch) => cell_modifier(spec.cell_center(row, col), touch, params),
                None => CellModifier::rest(params.max_opacity),
            };
            cells.push(modifier);
        }
    }

    ModifierGrid {
        rows: spec.rows,
        cols: spec.cols,
        cells,
    }
}

fn cell_modifier(center: Point, touch: Point, params: &DisplacementParams) -> CellModifier {
    let delta = touch - center;
    let t = if params.influence_radius > 0.0 {
        (delta.hypot() / params.influence_radius).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let pull = |axis_distance: f64| {
        let magnitude = (1.0 - t) * axis_distance.abs().min(params.offset_cap);
        if axis_distance < 0.0 { -magnitude } else { magnitude }
    };

    CellModifier {
        scale: lerp(t, params.min_scale, params.max_scale),
        opacity: lerp(t, params.min_opacity, params.max_opacity),
        offset: Vec2::new(pull(delta.x), pull(delta.y)),
    }
}
