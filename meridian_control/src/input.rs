// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::events::TouchPoints;

/// Normalized pointer input, as translated by a host binding.
///
/// Positions are in screen pixels relative to the map control and
/// timestamps in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointers went down. `points` are all pointers now down.
    Down {
        /// All pointers currently down.
        points: TouchPoints,
        /// Click count reported by mouse hosts; `1` for touch.
        click_count: u32,
        /// Event timestamp.
        timestamp: Option<i64>,
    },
    /// Pointers moved.
    Move {
        /// All pointers currently down.
        points: TouchPoints,
    },
    /// A pointer went up.
    Up {
        /// Pointers still down.
        remaining: TouchPoints,
        /// Where the lifted pointer went up.
        released: Point,
        /// Event timestamp.
        timestamp: Option<i64>,
    },
    /// A pointer moved with no button pressed.
    Hover {
        /// Pointer position.
        position: Point,
    },
    /// A mouse wheel notch. Positive deltas zoom in.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Wheel delta.
        delta: f64,
    },
    /// A long press recognized by the host.
    LongPress {
        /// Press position.
        position: Point,
    },
    /// A swipe recognized by the host.
    Swipe {
        /// Release velocity in pixels per second.
        velocity: Vec2,
    },
    /// A fling recognized by the host.
    Fling {
        /// Release velocity in pixels per second.
        velocity: Vec2,
    },
    /// Pointer capture was lost or the pointer left the control.
    Cancel,
}
