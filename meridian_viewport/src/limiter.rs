// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::modes::{PanMode, ZoomMode};
use crate::viewport::Viewport;

/// Inclusive range of allowed resolutions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Smallest allowed resolution (most zoomed in).
    pub min: f64,
    /// Largest allowed resolution (most zoomed out).
    pub max: f64,
}

impl ZoomLimits {
    /// Creates a range, swapping the bounds if they are given in the wrong order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

/// Clamps a [`Viewport`] to the zoom and pan policies of a map.
///
/// The limiter owns the map-side configuration: the available resolutions
/// (kept sorted from largest to smallest, i.e. from zoomed out to zoomed in),
/// the zoom and pan modes, optional explicit limits and the map envelope.
///
/// ```
/// use kurbo::{Point, Rect};
/// use meridian_viewport::{PanMode, Viewport, ViewportLimiter, ZoomMode};
///
/// let mut limiter = ViewportLimiter::new();
/// limiter.set_resolutions([8.0, 4.0, 2.0, 1.0]);
/// limiter.zoom_mode = ZoomMode::KeepWithinResolutions;
/// limiter.pan_mode = PanMode::KeepCenterWithinExtent;
/// limiter.envelope = Some(Rect::new(0.0, 0.0, 1000.0, 1000.0));
///
/// let mut vp = Viewport::new();
/// vp.try_initialize(100.0, 100.0, limiter.envelope);
/// vp.set_resolution(0.1);
/// vp.set_center(Point::new(-50.0, 2000.0));
///
/// limiter.limit(&mut vp);
/// assert_eq!(vp.resolution(), 1.0);
/// assert_eq!(vp.center(), Point::new(0.0, 1000.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewportLimiter {
    /// Policy for the resolution.
    pub zoom_mode: ZoomMode,
    /// Explicit resolution range; overrides the extremes of the available resolutions.
    pub zoom_limits: Option<ZoomLimits>,
    /// Policy for the center.
    pub pan_mode: PanMode,
    /// Explicit pan area; defaults to [`ViewportLimiter::envelope`] when unset.
    pub pan_limits: Option<Rect>,
    /// World bounding box of the map contents.
    pub envelope: Option<Rect>,
    resolutions: Vec<f64>,
}

impl ViewportLimiter {
    /// Creates a limiter with default modes, no limits and no resolutions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the available discrete resolutions.
    ///
    /// Non-positive and non-finite values are dropped and the remainder is
    /// sorted from largest to smallest.
    pub fn set_resolutions(&mut self, resolutions: impl IntoIterator<Item = f64>) {
        self.resolutions = resolutions
            .into_iter()
            .filter(|r| *r > 0.0 && r.is_finite())
            .collect();
        self.resolutions.sort_by(|a, b| b.total_cmp(a));
        self.resolutions.dedup();
    }

    /// Available resolutions, largest first.
    #[must_use]
    pub fn resolutions(&self) -> &[f64] {
        &self.resolutions
    }

    /// Returns the resolution range in effect: the explicit zoom limits or
    /// the extremes of the available resolutions.
    #[must_use]
    pub fn resolution_extremes(&self) -> Option<ZoomLimits> {
        if let Some(limits) = self.zoom_limits {
            return Some(limits);
        }
        let max = *self.resolutions.first()?;
        let min = *self.resolutions.last()?;
        Some(ZoomLimits { min, max })
    }

    /// Clamps `resolution` according to the zoom mode.
    ///
    /// `width` and `height` are the screen size in pixels; they are only
    /// consulted by [`ZoomMode::KeepWithinResolutionsAndAlwaysFillViewport`].
    /// The result is always positive and finite.
    #[must_use]
    pub fn limit_resolution(&self, resolution: f64, width: f64, height: f64) -> f64 {
        let extremes = self.resolution_extremes();
        let limited = match (self.zoom_mode, extremes) {
            (ZoomMode::Unlimited, _) | (_, None) => resolution,
            (ZoomMode::KeepWithinResolutions, Some(ext)) => {
                if resolution < ext.min {
                    ext.min
                } else if resolution > ext.max {
                    ext.max
                } else {
                    resolution
                }
            }
            (ZoomMode::KeepWithinResolutionsAndAlwaysFillViewport, Some(ext)) => {
                if resolution < ext.min {
                    ext.min
                } else {
                    match self.fill_resolution(width, height) {
                        // Both constraints cannot hold; keep the minimum only.
                        Some(fill) if fill < ext.min => resolution,
                        Some(fill) => resolution.min(ext.max.min(fill)),
                        None => resolution.min(ext.max),
                    }
                }
            }
        };
        if limited > 0.0 && limited.is_finite() {
            limited
        } else {
            extremes
                .map(|ext| ext.min)
                .filter(|min| *min > 0.0 && min.is_finite())
                .unwrap_or(f64::MIN_POSITIVE)
        }
    }

    /// Moves the viewport center according to the pan mode.
    ///
    /// The pan area is [`ViewportLimiter::pan_limits`], falling back to the
    /// envelope. Without either, nothing happens.
    pub fn limit_extent(&self, viewport: &mut Viewport) {
        let Some(area) = self.pan_limits.or(self.envelope).map(|r| r.abs()) else {
            return;
        };
        let center = viewport.center();
        let target = match self.pan_mode {
            PanMode::Unlimited => return,
            PanMode::KeepCenterWithinExtent => Point::new(
                center.x.clamp(area.x0, area.x1),
                center.y.clamp(area.y0, area.y1),
            ),
            PanMode::KeepViewportWithinExtent => {
                let visible = viewport.extent();
                let dx = axis_shift(visible.x0, visible.x1, area.x0, area.x1);
                let dy = axis_shift(visible.y0, visible.y1, area.y0, area.y1);
                Point::new(center.x + dx, center.y + dy)
            }
        };
        if target != center {
            log::debug!("pan limited: {center:?} -> {target:?}");
            viewport.set_center(target);
        }
    }

    /// Applies [`ViewportLimiter::limit_resolution`] and then
    /// [`ViewportLimiter::limit_extent`].
    ///
    /// The order matters: pan limits are evaluated against the visible extent
    /// at the already clamped resolution. Calling this twice in a row leaves
    /// the viewport where the first call put it.
    ///
    /// Returns `true` if the viewport changed.
    pub fn limit(&self, viewport: &mut Viewport) -> bool {
        let before = (viewport.center(), viewport.resolution());
        let resolution =
            self.limit_resolution(viewport.resolution(), viewport.width(), viewport.height());
        if resolution != viewport.resolution() {
            log::debug!(
                "resolution limited: {} -> {resolution}",
                viewport.resolution()
            );
            viewport.set_resolution(resolution);
        }
        self.limit_extent(viewport);
        before != (viewport.center(), viewport.resolution())
    }

    fn fill_resolution(&self, width: f64, height: f64) -> Option<f64> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let envelope = self.envelope?.abs();
        let fill = (envelope.width() / width).min(envelope.height() / height);
        (fill > 0.0 && fill.is_finite()).then_some(fill)
    }
}

/// Shift that moves `[lo, hi]` inside `[min, max]`, or centers it on the
/// range when it does not fit.
///
/// Shifts within rounding noise of the coordinates are reported as zero so
/// that limiting an already limited viewport leaves it untouched.
fn axis_shift(lo: f64, hi: f64, min: f64, max: f64) -> f64 {
    let shift = if hi - lo >= max - min {
        (min + max) * 0.5 - (lo + hi) * 0.5
    } else if lo < min {
        min - lo
    } else if hi > max {
        max - hi
    } else {
        0.0
    };
    let magnitude = lo.abs().max(hi.abs()).max(min.abs()).max(max.abs()).max(1.0);
    if shift.abs() <= magnitude * 1e-12 {
        0.0
    } else {
        shift
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{ViewportLimiter, ZoomLimits};
    use crate::modes::{PanMode, ZoomMode};
    use crate::viewport::Viewport;

    fn viewport(width: f64, height: f64, extent: Rect) -> Viewport {
        let mut vp = Viewport::new();
        assert!(vp.try_initialize(width, height, Some(extent)));
        vp
    }

    #[test]
    fn resolutions_are_sorted_and_filtered() {
        let mut limiter = ViewportLimiter::new();
        limiter.set_resolutions([1.0, 16.0, -2.0, 4.0, f64::NAN, 4.0]);
        assert_eq!(limiter.resolutions(), &[16.0, 4.0, 1.0]);
        assert_eq!(limiter.resolution_extremes(), Some(ZoomLimits::new(16.0, 1.0)));
    }

    #[test]
    fn unlimited_zoom_passes_through() {
        let mut limiter = ViewportLimiter::new();
        limiter.zoom_mode = ZoomMode::Unlimited;
        limiter.set_resolutions([4.0, 2.0]);
        assert_eq!(limiter.limit_resolution(100.0, 10.0, 10.0), 100.0);
    }

    #[test]
    fn keep_within_resolutions_clamps_both_ways() {
        let mut limiter = ViewportLimiter::new();
        limiter.set_resolutions([8.0, 4.0, 2.0]);
        assert_eq!(limiter.limit_resolution(1.0, 10.0, 10.0), 2.0);
        assert_eq!(limiter.limit_resolution(9.0, 10.0, 10.0), 8.0);
        assert_eq!(limiter.limit_resolution(3.0, 10.0, 10.0), 3.0);
    }

    #[test]
    fn explicit_limits_win_over_resolutions() {
        let mut limiter = ViewportLimiter::new();
        limiter.set_resolutions([8.0, 4.0, 2.0]);
        limiter.zoom_limits = Some(ZoomLimits::new(5.0, 0.5));
        assert_eq!(limiter.limit_resolution(0.1, 10.0, 10.0), 0.5);
        assert_eq!(limiter.limit_resolution(1.0, 10.0, 10.0), 1.0);
    }

    #[test]
    fn fill_viewport_caps_zoom_out() {
        let mut limiter = ViewportLimiter::new();
        limiter.zoom_mode = ZoomMode::KeepWithinResolutionsAndAlwaysFillViewport;
        limiter.set_resolutions([100.0, 1.0]);
        limiter.envelope = Some(Rect::new(0.0, 0.0, 1000.0, 500.0));
        // On a 100x100 screen the envelope fills the viewport at resolution 5.
        assert_eq!(limiter.limit_resolution(50.0, 100.0, 100.0), 5.0);
        assert_eq!(limiter.limit_resolution(3.0, 100.0, 100.0), 3.0);
        assert_eq!(limiter.limit_resolution(0.5, 100.0, 100.0), 1.0);
    }

    #[test]
    fn fill_viewport_gives_up_when_impossible() {
        let mut limiter = ViewportLimiter::new();
        limiter.zoom_mode = ZoomMode::KeepWithinResolutionsAndAlwaysFillViewport;
        limiter.zoom_limits = Some(ZoomLimits::new(10.0, 100.0));
        limiter.envelope = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(limiter.limit_resolution(50.0, 100.0, 100.0), 50.0);
    }

    #[test]
    fn never_returns_non_positive() {
        let limiter = ViewportLimiter {
            zoom_mode: ZoomMode::Unlimited,
            ..ViewportLimiter::default()
        };
        assert!(limiter.limit_resolution(0.0, 10.0, 10.0) > 0.0);
        assert!(limiter.limit_resolution(-1.0, 10.0, 10.0) > 0.0);
        assert!(limiter.limit_resolution(f64::NAN, 10.0, 10.0) > 0.0);
    }

    #[test]
    fn keep_center_within_extent() {
        let mut limiter = ViewportLimiter::new();
        limiter.pan_mode = PanMode::KeepCenterWithinExtent;
        limiter.envelope = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut vp = viewport(10.0, 10.0, Rect::new(0.0, 0.0, 10.0, 10.0));
        vp.set_center(Point::new(150.0, -20.0));
        limiter.limit_extent(&mut vp);
        assert_eq!(vp.center(), Point::new(100.0, 0.0));
    }

    #[test]
    fn pan_limits_override_envelope() {
        let mut limiter = ViewportLimiter::new();
        limiter.envelope = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        limiter.pan_limits = Some(Rect::new(40.0, 40.0, 60.0, 60.0));
        let mut vp = viewport(10.0, 10.0, Rect::new(0.0, 0.0, 10.0, 10.0));
        limiter.limit_extent(&mut vp);
        assert_eq!(vp.center(), Point::new(40.0, 40.0));
    }

    #[test]
    fn keep_viewport_within_extent_shifts_inside() {
        let mut limiter = ViewportLimiter::new();
        limiter.pan_mode = PanMode::KeepViewportWithinExtent;
        limiter.envelope = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        // 20x20 world units visible.
        let mut vp = viewport(20.0, 20.0, Rect::new(0.0, 0.0, 20.0, 20.0));
        vp.set_center(Point::new(95.0, 3.0));
        limiter.limit_extent(&mut vp);
        let c = vp.center();
        assert!((c.x - 90.0).abs() < 1e-9);
        assert!((c.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn keep_viewport_centers_when_too_large() {
        let mut limiter = ViewportLimiter::new();
        limiter.pan_mode = PanMode::KeepViewportWithinExtent;
        limiter.envelope = Some(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut vp = viewport(100.0, 100.0, Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_center(Point::new(70.0, 30.0));
        limiter.limit_extent(&mut vp);
        let c = vp.center();
        assert!((c.x - 5.0).abs() < 1e-9);
        assert!((c.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn limit_clamps_resolution_before_extent() {
        let mut limiter = ViewportLimiter::new();
        limiter.pan_mode = PanMode::KeepViewportWithinExtent;
        limiter.set_resolutions([1.0, 0.5]);
        limiter.envelope = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut vp = viewport(10.0, 10.0, Rect::new(0.0, 0.0, 10.0, 10.0));
        vp.set_resolution(0.1);
        vp.set_center(Point::new(0.0, 0.0));
        assert!(limiter.limit(&mut vp));
        assert_eq!(vp.resolution(), 0.5);
        // At resolution 0.5 the view spans 5 world units: center ends at 2.5.
        let c = vp.center();
        assert!((c.x - 2.5).abs() < 1e-9);
        assert!((c.y - 2.5).abs() < 1e-9);
        assert!(!limiter.limit(&mut vp));
    }
}
