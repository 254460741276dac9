// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The parts of a drawing style that decide whether a feature can be hit.
///
/// Sizes are in screen pixels; visibility bounds are resolutions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Disabled styles are not drawn and never hit.
    pub enabled: bool,
    /// Smallest resolution at which the style is drawn.
    pub min_visible: f64,
    /// Largest resolution at which the style is drawn.
    pub max_visible: f64,
    /// Radius of the symbol drawn for point geometries.
    pub symbol_radius: f64,
    /// Width of the outline or line stroke.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            enabled: true,
            min_visible: 0.0,
            max_visible: f64::INFINITY,
            symbol_radius: 8.0,
            stroke_width: 1.0,
        }
    }
}

impl Style {
    /// Returns `true` if the style is drawn at `resolution`.
    #[must_use]
    pub fn is_visible_at(&self, resolution: f64) -> bool {
        self.enabled && self.min_visible <= resolution && resolution <= self.max_visible
    }

    /// Sets the visible resolution range.
    #[must_use]
    pub fn with_visible_range(mut self, min_visible: f64, max_visible: f64) -> Self {
        self.min_visible = min_visible;
        self.max_visible = max_visible;
        self
    }

    /// Sets the symbol radius.
    #[must_use]
    pub fn with_symbol_radius(mut self, symbol_radius: f64) -> Self {
        self.symbol_radius = symbol_radius;
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}
