// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped linear interpolation primitives.
//!
//! Both functions clamp at their domain boundaries instead of extrapolating:
//! a distance far beyond the influence radius saturates at the rest value.

use core::ops::Range;

/// Linearly interpolates between `from` and `to` by the ratio `t`.
///
/// `t` values at or below `0.0` return `from`; values at or above `1.0`
/// return `to`.
#[must_use]
pub fn lerp(t: f64, from: f64, to: f64) -> f64 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    from * (1.0 - t) + to * t
}

/// Maps `value` from `domain` into `range`, clamping at the boundaries.
///
/// Values at or below `domain.start` map to `range.start`; values at or
/// above `domain.end` map to `range.end`. A zero-width domain cannot be
/// divided through, so it falls back to the domain midpoint
/// `(domain.start + domain.end) / 2.0`.
#[must_use]
pub fn remap(value: f64, domain: Range<f64>, range: Range<f64>) -> f64 {
    if domain.start == domain.end {
        return (domain.start + domain.end) / 2.0;
    }
    if value <= domain.start {
        return range.start;
    }
    if value >= domain.end {
        return range.end;
    }
    let t = (value - domain.start) / (domain.end - domain.start);
    range.start * (1.0 - t) + range.end * t
}
