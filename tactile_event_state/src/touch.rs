// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch state helper: track the current touch point across a gesture.

use kurbo::{Point, Vec2};

/// Tracks one touch (or pointer) through its `rest → tracking → rest` cycle.
///
/// While tracking, the state remembers the position where the touch began
/// and the most recent position. [`TouchState::point`] exposes the latter as
/// an `Option`, matching the "absent means rest" convention consumers such
/// as grid displacement models expect: hosts can pass it through unchanged
/// on every frame.
#[derive(Debug, Clone, Default, Copy)]
pub struct TouchState {
    /// Position where the current touch began.
    pub start_pos: Option<Point>,
    /// Most recent touch position.
    pub last_pos: Option<Point>,
}

impl TouchState {
    /// Starts tracking a touch at the given position.
    ///
    /// Calling this while already tracking restarts the cycle from `pos`.
    pub fn begin(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the delta since the previous one.
    ///
    /// Returns `None` when no touch is being tracked; a stray move event
    /// without a preceding [`TouchState::begin`] leaves the state at rest.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Total offset from the start of the touch to the current position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }

    /// Ends the touch and returns to the rest state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns the current touch point, or `None` in the rest state.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        self.last_pos
    }

    /// Returns `true` while a touch is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_at_rest() {
        let touch = TouchState::default();
        assert!(!touch.is_tracking());
        assert_eq!(touch.point(), None);
        assert_eq!(touch.total_offset(), None);
    }

    #[test]
    fn begin_starts_tracking_at_the_given_point() {
        let mut touch = TouchState::default();
        let start = Point::new(10.0, 20.0);

        touch.begin(start);

        assert!(touch.is_tracking());
        assert_eq!(touch.point(), Some(start));
        assert_eq!(touch.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn update_returns_the_delta_since_the_last_position() {
        let mut touch = TouchState::default();
        touch.begin(Point::new(0.0, 0.0));

        assert_eq!(touch.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(touch.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(touch.point(), Some(Point::new(8.0, 7.0)));
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut touch = TouchState::default();

        assert_eq!(touch.update(Point::new(15.0, 25.0)), None);
        assert_eq!(touch.point(), None);
        assert!(!touch.is_tracking());
    }

    #[test]
    fn total_offset_measures_from_the_start() {
        let mut touch = TouchState::default();
        touch.begin(Point::new(10.0, 20.0));
        touch.update(Point::new(15.0, 25.0));
        touch.update(Point::new(20.0, 35.0));

        assert_eq!(touch.total_offset(), Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn end_returns_to_rest() {
        let mut touch = TouchState::default();
        touch.begin(Point::new(10.0, 20.0));
        touch.update(Point::new(15.0, 25.0));

        touch.end();

        assert!(!touch.is_tracking());
        assert_eq!(touch.point(), None);
        assert_eq!(touch.total_offset(), None);
    }

    #[test]
    fn begin_restarts_an_active_cycle() {
        let mut touch = TouchState::default();
        touch.begin(Point::new(0.0, 0.0));
        touch.update(Point::new(10.0, 10.0));

        let restart = Point::new(50.0, 60.0);
        touch.begin(restart);

        assert_eq!(touch.point(), Some(restart));
        assert_eq!(touch.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn negative_and_zero_deltas_are_reported_as_is() {
        let mut touch = TouchState::default();
        touch.begin(Point::new(100.0, 100.0));

        assert_eq!(
            touch.update(Point::new(90.0, 85.0)),
            Some(Vec2::new(-10.0, -15.0))
        );
        assert_eq!(
            touch.update(Point::new(90.0, 85.0)),
            Some(Vec2::new(0.0, 0.0))
        );
    }
}
