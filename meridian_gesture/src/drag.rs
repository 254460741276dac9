// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer drag bookkeeping: where the pointer went down and where it
//! was last seen.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] when the pointer goes down.
//! 2) On each move, [`DragState::update`] returns the previous position so the
//!    caller can pan from it to the new one.
//! 3) On release, [`DragState::is_click`] tells whether the pointer stayed
//!    within the drag threshold, i.e. whether the gesture was really a tap.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use meridian_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! let previous = drag.update(Point::new(15.0, 25.0));
//! assert_eq!(previous, Some(Point::new(10.0, 20.0)));
//!
//! // Released 2px away from the start with a 4px threshold: a click.
//! assert!(drag.is_click(Point::new(12.0, 21.0), Vec2::new(4.0, 4.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the start and last position of a single-pointer drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position and returns the previous one.
    ///
    /// Returns `None` when no drag is active; the position is still recorded
    /// if a start exists but no last position does.
    pub fn update(&mut self, pos: Point) -> Option<Point> {
        self.start_pos?;
        self.last_pos.replace(pos)
    }

    /// Offset from the drag start to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` if `release_pos` is closer to the drag start than
    /// `threshold` on both axes (strictly).
    ///
    /// Without an active drag this is always `false`.
    pub fn is_click(&self, release_pos: Point, threshold: Vec2) -> bool {
        self.total_offset(release_pos)
            .is_some_and(|d| d.x.abs() < threshold.x && d.y.abs() < threshold.y)
    }
}
