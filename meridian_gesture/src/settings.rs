// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Platform drag threshold used when the host does not supply one, in pixels.
pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 4.0;

/// Knobs for the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureSettings {
    /// Ignore translation: drags do not pan and pinches zoom about their
    /// starting center.
    pub pan_lock: bool,
    /// Ignore scale: pinches never change the resolution and the default
    /// wheel/double-tap zoom is disabled.
    pub zoom_lock: bool,
    /// Let pinch gestures rotate the map.
    pub allow_rotation: bool,
    /// Accumulated pinch rotation, in degrees, needed before an unrotated map
    /// starts to rotate.
    pub unsnap_rotation_degrees: f64,
    /// A rotated map snaps back to north-up when the accumulated pinch
    /// rotation comes within this many degrees of zero.
    pub resnap_rotation_degrees: f64,
    /// Horizontal movement, in pixels, below which a press/release is a tap.
    pub min_horizontal_drag_distance: f64,
    /// Vertical movement, in pixels, below which a press/release is a tap.
    pub min_vertical_drag_distance: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            pan_lock: false,
            zoom_lock: false,
            allow_rotation: false,
            unsnap_rotation_degrees: 30.0,
            resnap_rotation_degrees: 5.0,
            min_horizontal_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
            min_vertical_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
        }
    }
}

impl GestureSettings {
    /// Drag threshold as a per-axis vector.
    #[must_use]
    pub fn drag_threshold(&self) -> Vec2 {
        Vec2::new(
            self.min_horizontal_drag_distance,
            self.min_vertical_drag_distance,
        )
    }

    /// Pinch radius, in pixels, a two-finger gesture must exceed before it
    /// may start rotating an unrotated map.
    #[must_use]
    pub fn min_rotation_radius(&self) -> f64 {
        self.min_horizontal_drag_distance * 20.0
    }

    /// Larger of the two drag thresholds.
    #[must_use]
    pub fn max_drag_distance(&self) -> f64 {
        self.min_horizontal_drag_distance
            .max(self.min_vertical_drag_distance)
    }
}

/// Knobs for promoting two single taps into a double tap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TapSettings {
    /// Maximum distance, in pixels, between the two taps.
    ///
    /// `None` means 12 times the larger drag threshold.
    pub max_double_tap_distance: Option<f64>,
    /// Maximum time between the two taps, in milliseconds (exclusive).
    pub max_double_tap_interval_ms: i64,
}

impl Default for TapSettings {
    fn default() -> Self {
        Self {
            max_double_tap_distance: None,
            max_double_tap_interval_ms: 300,
        }
    }
}

impl TapSettings {
    /// Effective double-tap distance for the given gesture settings.
    #[must_use]
    pub fn double_tap_distance(&self, gestures: &GestureSettings) -> f64 {
        self.max_double_tap_distance
            .unwrap_or_else(|| 12.0 * gestures.max_drag_distance())
    }
}
