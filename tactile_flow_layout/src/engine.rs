// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The greedy wrapping placement pass.

use alloc::vec::Vec;

use kurbo::Point;

use crate::types::{Measured, Placement, Spacing};

/// Places `items` left-to-right, wrapping when `container_width` is exhausted.
///
/// Items are placed strictly in input order; earlier items are never moved by
/// later ones. A row wraps when the next item would overflow the container
/// *and* the row already has content, so an item wider than the container is
/// still placed at the start of its own row rather than being dropped or
/// wrapped against itself. Row advance uses the tallest item of the finished
/// row plus the vertical gap.
///
/// A `container_width` of zero (or anything narrower than the first item)
/// still yields one item per row starting at `x = 0`. Identical inputs always
/// produce identical placements.
#[must_use]
pub fn flow_layout<I: Copy>(
    items: &[Measured<I>],
    container_width: f64,
    spacing: Spacing,
) -> Vec<Placement<I>> {
    let mut placements = Vec::with_capacity(items.len());
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_max_height = 0.0_f64;

    for item in items {
        if x > 0.0 && x + item.size.width > container_width {
            x = 0.0;
            y += row_max_height + spacing.vertical;
            row_max_height = 0.0;
        }
        placements.push(Placement::new(item.id, Point::new(x, y)));
        row_max_height = row_max_height.max(item.size.height);
        x += item.size.width + spacing.horizontal;
    }

    placements
}

/// A flow layout engine holding the container width and spacing.
///
/// This is a thin convenience over [`flow_layout`] for hosts that keep the
/// container width and spacing alongside other per-view state. The engine
/// holds no result cache; [`FlowLayout::layout`] recomputes every placement
/// from the items it is given.
///
/// Typical host wiring:
///
/// 1. Observe the container's width (for example from a resize event) and
///    call [`FlowLayout::set_container_width`].
/// 2. Re-measure items whose content changed.
/// 3. Call [`FlowLayout::layout`] and apply the returned origins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    container_width: f64,
    spacing: Spacing,
}

impl FlowLayout {
    /// Creates an engine for the given container width and spacing.
    #[must_use]
    pub const fn new(container_width: f64, spacing: Spacing) -> Self {
        Self {
            container_width,
            spacing,
        }
    }

    /// Returns the current container width.
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Sets the container width used by subsequent [`FlowLayout::layout`] calls.
    pub const fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Returns the current spacing.
    #[must_use]
    pub const fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Sets the spacing used by subsequent [`FlowLayout::layout`] calls.
    pub const fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = spacing;
    }

    /// Places `items` under the engine's current width and spacing.
    #[must_use]
    pub fn layout<I: Copy>(&self, items: &[Measured<I>]) -> Vec<Placement<I>> {
        flow_layout(items, self.container_width, self.spacing)
    }
}
