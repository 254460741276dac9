// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use meridian_gesture::{GestureSettings, TapSettings};

/// Interaction settings of a map control.
///
/// The defaults allow panning and zooming, keep the map north-up, use a
/// 4 pixel drag threshold and promote taps less than 300 ms apart to double
/// taps.
///
/// ```
/// use meridian_control::InteractionConfig;
///
/// let config = InteractionConfig::default()
///     .with_rotation(true)
///     .with_min_drag_distance(6.0, 6.0);
/// assert!(config.gestures.allow_rotation);
/// assert_eq!(config.double_tap_distance(), 72.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionConfig {
    /// Drag, pinch and rotation settings.
    pub gestures: GestureSettings,
    /// Double-tap promotion settings.
    pub taps: TapSettings,
}

impl InteractionConfig {
    /// Locks or unlocks panning.
    #[must_use]
    pub fn with_pan_lock(mut self, locked: bool) -> Self {
        self.gestures.pan_lock = locked;
        self
    }

    /// Locks or unlocks zooming.
    #[must_use]
    pub fn with_zoom_lock(mut self, locked: bool) -> Self {
        self.gestures.zoom_lock = locked;
        self
    }

    /// Allows or forbids pinch rotation.
    #[must_use]
    pub fn with_rotation(mut self, allowed: bool) -> Self {
        self.gestures.allow_rotation = allowed;
        self
    }

    /// Sets the rotation unsnap and resnap thresholds, in degrees.
    #[must_use]
    pub fn with_rotation_thresholds(mut self, unsnap: f64, resnap: f64) -> Self {
        self.gestures.unsnap_rotation_degrees = unsnap;
        self.gestures.resnap_rotation_degrees = resnap;
        self
    }

    /// Sets the platform drag threshold, in pixels per axis.
    #[must_use]
    pub fn with_min_drag_distance(mut self, horizontal: f64, vertical: f64) -> Self {
        self.gestures.min_horizontal_drag_distance = horizontal;
        self.gestures.min_vertical_drag_distance = vertical;
        self
    }

    /// Sets the double-tap distance (`None` derives it from the drag
    /// threshold) and interval.
    #[must_use]
    pub fn with_double_tap(mut self, max_distance: Option<f64>, max_interval_ms: i64) -> Self {
        self.taps.max_double_tap_distance = max_distance;
        self.taps.max_double_tap_interval_ms = max_interval_ms;
        self
    }

    /// Effective double-tap distance in pixels.
    #[must_use]
    pub fn double_tap_distance(&self) -> f64 {
        self.taps.double_tap_distance(&self.gestures)
    }
}
