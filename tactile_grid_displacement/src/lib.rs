// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Grid Displacement: distance-driven cell modifiers for touch-reactive grids.
//!
//! This crate computes, for every cell of a uniform grid, a scale factor, an
//! opacity, and a positional offset as a function of an optional touch point.
//! Cells near the touch point shrink, dim, and are pulled toward it; the
//! effect decays linearly with distance and vanishes at a configurable
//! influence radius. It is the "cloth" effect behind touch-reactive grid
//! demos, reduced to its portable math.
//!
//! The core concepts are:
//!
//! - [`GridSpec`]: grid shape and cell pitch, from which cell centers derive.
//! - [`DisplacementParams`]: influence radius, scale/opacity ranges, and the
//!   per-axis offset cap.
//! - [`CellModifier`]: the derived scale/opacity/offset triple for one cell.
//! - [`ModifierGrid`]: one [`CellModifier`] per cell, in row-major order.
//! - [`compute_modifiers`]: the whole-grid computation.
//! - [`lerp`]: the clamped interpolation primitives the model is built on.
//!
//! The model is stateless. Hosts own the touch lifecycle (`rest → tracking →
//! rest`), feed the current touch point — or `None` for the rest state — into
//! [`compute_modifiers`] on every change to the grid, the touch point, or the
//! parameters, and apply the returned modifiers to their own drawing
//! primitives. Any eased transition between rest and tracking is likewise the
//! host's concern; this crate only computes the instantaneous modifier set.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_grid_displacement::{DisplacementParams, GridSpec, compute_modifiers};
//!
//! let spec = GridSpec::new(3, 3, 20.0, 1.0);
//! let params = DisplacementParams::for_cell_side(spec.cell_side());
//!
//! // No touch: every cell is at rest.
//! let rest = compute_modifiers(spec, None, &params);
//! assert_eq!(rest.get(1, 1).unwrap().scale, 1.0);
//!
//! // Touch the center cell: it shrinks the most, corners stay near full size.
//! let touched = compute_modifiers(spec, Some(spec.cell_center(1, 1)), &params);
//! let center = touched.get(1, 1).unwrap();
//! let corner = touched.get(0, 0).unwrap();
//! assert!(center.scale < corner.scale);
//! ```
//!
//! All coordinates live in the same caller-chosen 2D space as the cell
//! centers (typically logical pixels) and are expected to be finite. This
//! crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod lerp;

mod grid;
mod model;

pub use grid::{DisplacementParams, GridSpec};
pub use lerp::{lerp, remap};
pub use model::{CellModifier, ModifierGrid, compute_modifiers};
