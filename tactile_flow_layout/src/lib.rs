// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Flow Layout: greedy wrapping placement for measured items.
//!
//! This crate provides a small, renderer-agnostic core for placing a sequence
//! of pre-measured items left-to-right, wrapping to a new row when the
//! container width is exhausted. It is the classic "tag cloud" / flow layout
//! placement pass, with measurement and drawing left to the host.
//!
//! The core concepts are:
//!
//! - [`Measured`]: an item identity paired with its measured size.
//! - [`Spacing`]: horizontal and vertical gaps inserted between items and rows.
//! - [`Placement`]: an item identity paired with its computed top-left origin.
//! - [`flow_layout`]: the placement pass as a free function.
//! - [`FlowLayout`]: a small engine value holding the container width and
//!   spacing as an input snapshot, for hosts that prefer a reusable handle.
//!
//! This crate deliberately does **not** know about widgets, text, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Measuring each item (for example via a first layout pass or a size
//!   reporting channel) and supplying the results as [`Measured`] values.
//! - Calling [`flow_layout`] again whenever the container width, the spacing,
//!   or any item size changes. Placements are recomputed from scratch on each
//!   call; there is no caching or incremental relayout.
//! - Applying the returned origins as drawing or alignment offsets.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use tactile_flow_layout::{Measured, Spacing, flow_layout};
//!
//! let items = [
//!     Measured::new(0_u32, Size::new(100.0, 20.0)),
//!     Measured::new(1, Size::new(100.0, 20.0)),
//!     Measured::new(2, Size::new(100.0, 20.0)),
//! ];
//! let placements = flow_layout(&items, 250.0, Spacing::uniform(10.0));
//!
//! // Two items fit on the first row; the third wraps below it.
//! assert_eq!(placements[0].origin.x, 0.0);
//! assert_eq!(placements[1].origin.x, 110.0);
//! assert_eq!(placements[2].origin, kurbo::Point::new(0.0, 30.0));
//! ```
//!
//! All coordinates live in a caller-chosen 2D space (typically logical
//! pixels) and are expected to be finite and non-negative. This crate is
//! `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod types;

pub use engine::{FlowLayout, flow_layout};
pub use types::{Measured, Placement, Spacing};
