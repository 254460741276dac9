// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use meridian_hit::{HoveredEvent, Modifiers, TappedEvent};
use smallvec::SmallVec;

/// Pointer positions of one touch event; two fingers fit inline.
pub type TouchPoints = SmallVec<[Point; 4]>;

/// Events that carry a `handled` flag.
pub trait Handled {
    /// Returns `true` once a handler consumed the event.
    fn is_handled(&self) -> bool;
}

/// Pointers went down, moved or went up.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchedEvent {
    /// Positions of the pointers down, in screen pixels. For a release these
    /// are the pointers still down.
    pub points: TouchPoints,
    /// Host timestamp in milliseconds, if known.
    pub timestamp: Option<i64>,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
    /// Set by a handler to stop further handlers and, for start and move,
    /// the gesture processing.
    pub handled: bool,
}

impl TouchedEvent {
    /// Creates an unhandled touch event.
    pub fn new(points: &[Point], timestamp: Option<i64>, modifiers: Modifiers) -> Self {
        Self {
            points: points.iter().copied().collect(),
            timestamp,
            modifiers,
            handled: false,
        }
    }
}

/// A swipe or fling released with some velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipedEvent {
    /// Release velocity in pixels per second.
    pub velocity: Vec2,
    /// Set by a handler that consumed the event.
    pub handled: bool,
}

impl SwipedEvent {
    /// Creates an unhandled swipe event.
    #[must_use]
    pub fn new(velocity: Vec2) -> Self {
        Self {
            velocity,
            handled: false,
        }
    }
}

/// Direction of a stepwise zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomDirection {
    /// Toward smaller resolutions.
    In,
    /// Toward larger resolutions.
    Out,
}

/// A stepwise zoom request from the wheel or a double tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomedEvent {
    /// Screen position to zoom about.
    pub position: Point,
    /// Zoom direction.
    pub direction: ZoomDirection,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
    /// Set by a handler to suppress the default zoom.
    pub handled: bool,
}

impl ZoomedEvent {
    /// Creates an unhandled zoom event.
    #[must_use]
    pub fn new(position: Point, direction: ZoomDirection, modifiers: Modifiers) -> Self {
        Self {
            position,
            direction,
            modifiers,
            handled: false,
        }
    }
}

impl Handled for TouchedEvent {
    fn is_handled(&self) -> bool {
        self.handled
    }
}

impl Handled for SwipedEvent {
    fn is_handled(&self) -> bool {
        self.handled
    }
}

impl Handled for ZoomedEvent {
    fn is_handled(&self) -> bool {
        self.handled
    }
}

impl Handled for TappedEvent {
    fn is_handled(&self) -> bool {
        self.handled
    }
}

impl Handled for HoveredEvent {
    fn is_handled(&self) -> bool {
        self.handled
    }
}
