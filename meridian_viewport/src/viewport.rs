// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::math::normalize_degrees;

/// Mutable map viewport: a center, a resolution and a rotation over a screen
/// of `width × height` pixels.
///
/// World space is y-up (north is up); screen space is y-down with the origin
/// in the top-left corner. The world point at [`Viewport::center`] is drawn
/// at the middle of the screen, one screen pixel covers
/// [`Viewport::resolution`] world units, and the map is rotated by
/// [`Viewport::rotation`] degrees about the screen center.
///
/// The world→screen and screen→world matrices are cached and rebuilt on
/// every mutation, so conversions are a single affine multiply and are exact
/// inverses of each other up to floating-point rounding.
///
/// Gesture-driven changes go through [`Viewport::transform`], which is a
/// no-op until the viewport has been initialized with
/// [`Viewport::try_initialize`].
#[derive(Clone, Debug)]
pub struct Viewport {
    center: Point,
    resolution: f64,
    rotation: f64,
    width: f64,
    height: f64,
    initialized: bool,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an uninitialized viewport.
    ///
    /// - Center is the world origin.
    /// - Resolution is `1.0` and rotation is `0.0`.
    /// - Width and height are zero until the host reports a size.
    #[must_use]
    pub fn new() -> Self {
        let mut vp = Self {
            center: Point::ORIGIN,
            resolution: 1.0,
            rotation: 0.0,
            width: 0.0,
            height: 0.0,
            initialized: false,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Sets up the viewport from a screen size and an initial world extent.
    ///
    /// The extent is fitted into the screen: the resolution becomes the larger
    /// of the horizontal and vertical world-units-per-pixel ratios and the
    /// center becomes the extent center. This only succeeds when the size is
    /// positive and finite and the extent has a positive area.
    ///
    /// Returns `true` when the viewport was initialized by this call. An
    /// already initialized viewport is left untouched and `false` is returned.
    pub fn try_initialize(&mut self, width: f64, height: f64, extent: Option<Rect>) -> bool {
        if self.initialized {
            return false;
        }
        if !is_positive(width) || !is_positive(height) {
            return false;
        }
        let Some(extent) = extent.map(|r| r.abs()) else {
            return false;
        };
        if !is_positive(extent.width()) || !is_positive(extent.height()) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.resolution = (extent.width() / width).max(extent.height() / height);
        self.center = extent.center();
        self.initialized = true;
        self.rebuild_transforms();
        true
    }

    /// Returns `true` once [`Viewport::try_initialize`] has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// World position drawn at the middle of the screen.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Moves the world position drawn at the middle of the screen.
    pub fn set_center(&mut self, center: Point) {
        if self.center == center || !center.is_finite() {
            return;
        }
        self.center = center;
        self.rebuild_transforms();
    }

    /// World units per screen pixel; smaller is more zoomed in.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Sets the resolution. Values that are not positive and finite are ignored.
    pub fn set_resolution(&mut self, resolution: f64) {
        if !is_positive(resolution) || self.resolution == resolution {
            return;
        }
        self.resolution = resolution;
        self.rebuild_transforms();
    }

    /// Map rotation in degrees, in `(-180, 180]`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the rotation in degrees; the value is wrapped into `(-180, 180]`.
    pub fn set_rotation(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            return;
        }
        let degrees = normalize_degrees(degrees);
        if self.rotation == degrees {
            return;
        }
        self.rotation = degrees;
        self.rebuild_transforms();
    }

    /// Screen width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Screen height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Updates the screen size. Negative or non-finite sizes are ignored.
    ///
    /// This does not change center, resolution or rotation; the visible
    /// extent grows or shrinks around the center.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if !(width >= 0.0 && width.is_finite() && height >= 0.0 && height.is_finite()) {
            return;
        }
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.rebuild_transforms();
    }

    /// Converts a world position into screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen position in pixels into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// World-space bounding box of the visible screen rectangle.
    ///
    /// When the map is rotated this is the axis-aligned box around the
    /// rotated screen rectangle, so it covers slightly more than what is
    /// actually visible.
    #[must_use]
    pub fn extent(&self) -> Rect {
        let q0 = self.screen_to_world * Point::new(0.0, 0.0);
        let q1 = self.screen_to_world * Point::new(self.width, 0.0);
        let q2 = self.screen_to_world * Point::new(0.0, self.height);
        let q3 = self.screen_to_world * Point::new(self.width, self.height);
        let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
        let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
        let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
        let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Applies an incremental pan, zoom and rotation.
    ///
    /// The world point that was under `previous` ends up under `position`,
    /// the resolution is divided by `scale_delta` and the rotation grows by
    /// `rotation_delta` degrees, both about `position`. Because every call
    /// pins one world point to one screen point, repeated small calls compose
    /// into the same result as a single call with the aggregate deltas.
    ///
    /// A `scale_delta` that is not positive and finite is treated as `1.0`.
    ///
    /// Returns `false` without changing anything when the viewport is not
    /// initialized yet.
    pub fn transform(
        &mut self,
        position: Point,
        previous: Point,
        scale_delta: f64,
        rotation_delta: f64,
    ) -> bool {
        if !self.initialized {
            return false;
        }
        let anchor = self.screen_to_world(previous);
        if is_positive(scale_delta) && scale_delta != 1.0 {
            let resolution = self.resolution / scale_delta;
            if is_positive(resolution) {
                self.resolution = resolution;
            }
        }
        if rotation_delta != 0.0 && rotation_delta.is_finite() {
            self.rotation = normalize_degrees(self.rotation + rotation_delta);
        }
        self.rebuild_transforms();
        // Resolution and rotation act about the screen center; shift the
        // center so that the anchor lands under `position` again.
        let landed = self.screen_to_world(position);
        self.center += anchor - landed;
        self.rebuild_transforms();
        true
    }

    /// Zooms to `resolution` keeping the world point under `position` fixed.
    ///
    /// Returns `false` when the viewport is not initialized or the resolution
    /// is not positive and finite.
    pub fn zoom_about(&mut self, position: Point, resolution: f64) -> bool {
        if !is_positive(resolution) {
            return false;
        }
        self.transform(position, position, self.resolution / resolution, 0.0)
    }

    /// Centers on `extent` and picks the resolution at which it fits the screen.
    ///
    /// This is a no-op when the screen has no size or the extent has no area.
    pub fn zoom_to_extent(&mut self, extent: Rect) {
        let extent = extent.abs();
        if !is_positive(self.width) || !is_positive(self.height) {
            return;
        }
        if !is_positive(extent.width()) || !is_positive(extent.height()) {
            return;
        }
        self.resolution = (extent.width() / self.width).max(extent.height() / self.height);
        self.center = extent.center();
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        let screen_center = Vec2::new(self.width * 0.5, self.height * 0.5);
        let inv = 1.0 / self.resolution;
        // World → screen: move the center to the origin, flip y and scale into
        // pixels, rotate, then move the origin to the screen center.
        self.world_to_screen = Affine::translate(screen_center)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale_non_uniform(inv, -inv)
            * Affine::translate(-self.center.to_vec2());
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}
