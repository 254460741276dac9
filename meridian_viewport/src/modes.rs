// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Policy applied to the viewport resolution by [`crate::ViewportLimiter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomMode {
    /// Any positive resolution is accepted.
    Unlimited,
    /// Keep the resolution between the zoom limits, or between the smallest
    /// and largest available resolution when no explicit limits are set.
    #[default]
    KeepWithinResolutions,
    /// Like [`ZoomMode::KeepWithinResolutions`], and additionally never zoom
    /// out further than the resolution at which the map envelope fills the
    /// viewport.
    ///
    /// If filling the viewport would require a resolution below the minimum
    /// limit, the fill constraint is dropped.
    KeepWithinResolutionsAndAlwaysFillViewport,
}

/// Policy applied to the viewport center by [`crate::ViewportLimiter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanMode {
    /// The view may be panned anywhere.
    Unlimited,
    /// Keep the viewport center inside the pan limits.
    #[default]
    KeepCenterWithinExtent,
    /// Keep the whole visible extent inside the pan limits.
    ///
    /// On an axis where the visible extent is larger than the limits, the
    /// view is centered on the limits instead.
    KeepViewportWithinExtent,
}
