// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition from a stream of single taps.
//!
//! The recognizer remembers the last tap. A new tap that lands close enough
//! to it, soon enough after it, is reported as the second tap of a double
//! tap and consumes the memory, so a triple tap is a double tap followed by
//! a fresh single tap.
//!
//! ```
//! use kurbo::Point;
//! use meridian_gesture::tap::TapRecognizer;
//!
//! let mut taps = TapRecognizer::new();
//! let p = Point::new(10.0, 10.0);
//! assert!(!taps.on_tap(p, Some(0), 48.0, 300));
//! assert!(taps.on_tap(p, Some(250), 48.0, 300));
//! ```

use kurbo::Point;

/// Remembers the previous single tap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapRecognizer {
    previous: Option<Point>,
    previous_timestamp: Option<i64>,
}

impl TapRecognizer {
    /// Creates a recognizer with no tap memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a single tap and returns `true` if it completes a double tap.
    ///
    /// The tap is a double tap when the previous tap is closer than
    /// `max_distance` pixels and less than `max_interval_ms` older. Taps
    /// without a timestamp never complete a double tap but are still
    /// remembered.
    pub fn on_tap(
        &mut self,
        position: Point,
        timestamp: Option<i64>,
        max_distance: f64,
        max_interval_ms: i64,
    ) -> bool {
        if let (Some(previous), Some(then), Some(now)) =
            (self.previous, self.previous_timestamp, timestamp)
        {
            let close_by = previous.distance(position) < max_distance;
            let recent = now.saturating_sub(then) < max_interval_ms;
            if close_by && recent {
                log::debug!("double tap at {position:?} ({} ms)", now - then);
                self.reset();
                return true;
            }
        }
        self.previous = Some(position);
        self.previous_timestamp = timestamp;
        false
    }

    /// Position of the remembered tap, if any.
    #[must_use]
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Forgets the remembered tap.
    pub fn reset(&mut self) {
        self.previous = None;
        self.previous_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::TapRecognizer;

    const DISTANCE: f64 = 48.0;
    const INTERVAL: i64 = 300;

    #[test]
    fn second_tap_inside_window_is_double() {
        let mut taps = TapRecognizer::new();
        let p = Point::new(5.0, 5.0);
        assert!(!taps.on_tap(p, Some(0), DISTANCE, INTERVAL));
        assert!(taps.on_tap(p, Some(250), DISTANCE, INTERVAL));
        assert_eq!(taps.previous(), None);
    }

    #[test]
    fn slow_second_tap_is_single() {
        let mut taps = TapRecognizer::new();
        let p = Point::new(5.0, 5.0);
        assert!(!taps.on_tap(p, Some(0), DISTANCE, INTERVAL));
        assert!(!taps.on_tap(p, Some(400), DISTANCE, INTERVAL));
        // The slow tap starts a new window.
        assert!(taps.on_tap(p, Some(500), DISTANCE, INTERVAL));
    }

    #[test]
    fn interval_bound_is_exclusive() {
        let mut taps = TapRecognizer::new();
        let p = Point::ORIGIN;
        taps.on_tap(p, Some(0), DISTANCE, INTERVAL);
        assert!(!taps.on_tap(p, Some(300), DISTANCE, INTERVAL));
    }

    #[test]
    fn distant_second_tap_is_single() {
        let mut taps = TapRecognizer::new();
        assert!(!taps.on_tap(Point::new(0.0, 0.0), Some(0), DISTANCE, INTERVAL));
        assert!(!taps.on_tap(Point::new(60.0, 0.0), Some(100), DISTANCE, INTERVAL));
        assert_eq!(taps.previous(), Some(Point::new(60.0, 0.0)));
    }

    #[test]
    fn missing_timestamps_never_promote() {
        let mut taps = TapRecognizer::new();
        let p = Point::ORIGIN;
        assert!(!taps.on_tap(p, None, DISTANCE, INTERVAL));
        assert!(!taps.on_tap(p, Some(10), DISTANCE, INTERVAL));
        assert!(!taps.on_tap(p, None, DISTANCE, INTERVAL));
    }

    #[test]
    fn triple_tap_is_double_then_single() {
        let mut taps = TapRecognizer::new();
        let p = Point::ORIGIN;
        assert!(!taps.on_tap(p, Some(0), DISTANCE, INTERVAL));
        assert!(taps.on_tap(p, Some(100), DISTANCE, INTERVAL));
        assert!(!taps.on_tap(p, Some(200), DISTANCE, INTERVAL));
    }
}
