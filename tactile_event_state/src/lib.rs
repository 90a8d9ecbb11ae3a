// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Event State: touch lifecycle tracking for touch-reactive views.
//!
//! This crate provides a small state machine for the `rest → tracking → rest`
//! touch lifecycle that drives touch-reactive effects. It does not assume any
//! particular UI framework or gesture system; hosts translate their own
//! pointer events into [`TouchState`] calls and read the current touch point
//! back out each frame, typically to feed a displacement model such as
//! `tactile_grid_displacement`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_event_state::TouchState;
//!
//! let mut touch = TouchState::default();
//! assert!(touch.point().is_none()); // rest state
//!
//! // Pointer goes down and moves.
//! touch.begin(Point::new(40.0, 60.0));
//! let delta = touch.update(Point::new(45.0, 58.0)).unwrap();
//! assert_eq!(delta, kurbo::Vec2::new(5.0, -2.0));
//! assert_eq!(touch.point(), Some(Point::new(45.0, 58.0)));
//!
//! // Pointer is released: back to rest.
//! touch.end();
//! assert!(!touch.is_tracking());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod touch;

pub use touch::TouchState;
