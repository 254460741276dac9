// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::layer::FeatureId;
use crate::stack::LayerId;

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer event happened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control (or Command on macOS hosts).
        const CTRL  = 0b0000_0001;
        /// Shift.
        const SHIFT = 0b0000_0010;
    }
}

/// A single or multiple tap routed to layers and features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TappedEvent {
    /// Screen position of the tap.
    pub position: Point,
    /// Number of taps: 1 for a single tap, 2 or more for a double tap.
    pub taps: u32,
    /// Modifier keys held at the time of the tap.
    pub modifiers: Modifiers,
    /// Set by a receiver to stop further dispatch and the default action.
    pub handled: bool,
    /// Set by a receiver that changed something visible.
    pub map_needs_refresh: bool,
    /// Layer the event is currently attributed to.
    pub layer: Option<LayerId>,
    /// Feature the event is currently attributed to.
    pub feature: Option<FeatureId>,
}

impl TappedEvent {
    /// Creates an unhandled tap event.
    #[must_use]
    pub fn new(position: Point, taps: u32, modifiers: Modifiers) -> Self {
        Self {
            position,
            taps,
            modifiers,
            handled: false,
            map_needs_refresh: false,
            layer: None,
            feature: None,
        }
    }

    /// Returns `true` for a double (or higher) tap.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.taps >= 2
    }
}

/// A pointer hovering over the map without buttons pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoveredEvent {
    /// Screen position of the pointer.
    pub position: Point,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
    /// Set by a receiver to stop further dispatch.
    pub handled: bool,
    /// Set by a receiver that changed something visible.
    pub map_needs_refresh: bool,
    /// Layer the event is currently attributed to.
    pub layer: Option<LayerId>,
    /// Feature the event is currently attributed to.
    pub feature: Option<FeatureId>,
}

impl HoveredEvent {
    /// Creates an unhandled hover event.
    #[must_use]
    pub fn new(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
            handled: false,
            map_needs_refresh: false,
            layer: None,
            feature: None,
        }
    }
}
