// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use meridian_gesture::tap::TapRecognizer;
use meridian_gesture::{GestureStateMachine, TouchEnd, TouchMode};
use meridian_hit::{DispatchError, HitTestRouter, HoveredEvent, LayerStack, Modifiers, TappedEvent};
use meridian_viewport::zoom::{zoom_in, zoom_out};
use meridian_viewport::{Viewport, ViewportLimiter};

use crate::config::InteractionConfig;
use crate::error::InteractionError;
use crate::events::{SwipedEvent, TouchedEvent, ZoomDirection, ZoomedEvent};
use crate::handlers::Handlers;
use crate::host::{MapHost, NullHost};
use crate::input::PointerInput;

/// The interaction core of one map control.
///
/// Owns the viewport, its limits, the layers and all gesture scratch state.
/// Hosts forward input through the `on_*` entry points (or
/// [`MapInteraction::feed_pointer`]) and receive outward signals through
/// their [`MapHost`].
#[derive(Debug)]
pub struct MapInteraction<H = NullHost> {
    viewport: Viewport,
    limiter: ViewportLimiter,
    layers: LayerStack,
    gestures: GestureStateMachine,
    taps: TapRecognizer,
    router: HitTestRouter,
    config: InteractionConfig,
    modifiers: Modifiers,
    invalid: bool,
    host: H,
    /// Application-level observers, run before the built-in behavior.
    pub handlers: Handlers,
}

impl Default for MapInteraction {
    fn default() -> Self {
        Self::new(NullHost)
    }
}

impl<H: MapHost> MapInteraction<H> {
    /// Creates an interaction core with default settings and no layers.
    pub fn new(host: H) -> Self {
        Self {
            viewport: Viewport::new(),
            limiter: ViewportLimiter::new(),
            layers: LayerStack::new(),
            gestures: GestureStateMachine::new(),
            taps: TapRecognizer::new(),
            router: HitTestRouter::new(),
            config: InteractionConfig::default(),
            modifiers: Modifiers::empty(),
            invalid: false,
            host,
            handlers: Handlers::default(),
        }
    }

    /// Replaces the interaction settings.
    #[must_use]
    pub fn with_config(mut self, config: InteractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the viewport limits.
    #[must_use]
    pub fn with_limiter(mut self, limiter: ViewportLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The viewport limits.
    pub fn limiter(&self) -> &ViewportLimiter {
        &self.limiter
    }

    /// The viewport limits, for changing the zoom and pan policy.
    ///
    /// Call [`MapInteraction::refresh_limits`] afterwards to apply them.
    pub fn limiter_mut(&mut self) -> &mut ViewportLimiter {
        &mut self.limiter
    }

    /// The layers, bottom first.
    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// The layers, for adding and removing.
    pub fn layers_mut(&mut self) -> &mut LayerStack {
        &mut self.layers
    }

    /// Current settings.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replaces the settings. A gesture in progress continues with them.
    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    /// The host receiving outward signals.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host receiving outward signals.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current gesture mode.
    pub fn mode(&self) -> TouchMode {
        self.gestures.mode()
    }

    /// Sets the modifier keys snapshotted into subsequent events.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Returns and clears the "needs repaint" flag.
    pub fn take_invalid(&mut self) -> bool {
        core::mem::take(&mut self.invalid)
    }

    /// Converts a world position into screen pixels.
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.viewport.world_to_screen(world)
    }

    /// Converts a screen position into world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.viewport.screen_to_world(screen)
    }

    /// Reports a new control size.
    ///
    /// The first call with a positive size and a known extent (the limiter
    /// envelope, or else the layers' envelopes) initializes the viewport and
    /// signals [`MapHost::viewport_initialized`].
    pub fn resize(&mut self, width: f64, height: f64) {
        let extent = self.home_extent();
        if self.viewport.try_initialize(width, height, extent) {
            log::debug!("viewport initialized at {width}x{height}");
            self.host.viewport_initialized(&self.viewport);
        } else {
            self.viewport.set_size(width, height);
        }
        self.limiter.limit(&mut self.viewport);
        self.view_changed(false);
    }

    /// Re-applies the limiter after its policy changed.
    pub fn refresh_limits(&mut self) {
        if self.limiter.limit(&mut self.viewport) {
            self.view_changed(false);
        }
    }

    /// Pointers went down.
    ///
    /// Returns `true` if a `touch_started` handler consumed the event, in
    /// which case no gesture starts.
    pub fn on_touch_start(&mut self, points: &[Point], timestamp: Option<i64>) -> bool {
        let mut event = TouchedEvent::new(points, timestamp, self.modifiers);
        if self.handlers.touch_started.run(&mut event) {
            return true;
        }
        self.gestures.touch_start(points, &self.viewport);
        false
    }

    /// Pointers moved.
    ///
    /// Returns `true` if a handler consumed the move or the viewport changed.
    ///
    /// # Errors
    ///
    /// Fails when a pinch in progress receives fewer than two pointers.
    pub fn on_touch_move(&mut self, points: &[Point]) -> Result<bool, InteractionError> {
        let mut event = TouchedEvent::new(points, None, self.modifiers);
        if self.handlers.touch_moved.run(&mut event) {
            return Ok(true);
        }
        let changed = self.gestures.touch_move(
            points,
            &mut self.viewport,
            &self.limiter,
            &self.config.gestures,
        )?;
        if changed {
            self.view_changed(true);
        }
        Ok(changed)
    }

    /// A pointer went up.
    ///
    /// `touch_ended` handlers see the pointers still down. A single pointer that never left the drag threshold becomes a single
    /// tap. Returns whether the resulting tap (if any) was handled.
    ///
    /// # Errors
    ///
    /// Propagates errors from tap routing.
    pub fn on_touch_end(
        &mut self,
        remaining: &[Point],
        released: Point,
        timestamp: Option<i64>,
    ) -> Result<bool, InteractionError> {
        let mut event = TouchedEvent::new(remaining, timestamp, self.modifiers);
        self.handlers.touch_ended.run(&mut event);
        match self.gestures.touch_end(
            remaining,
            released,
            &self.viewport,
            &self.config.gestures,
        ) {
            TouchEnd::Tap(position) => self.on_single_tapped(position, timestamp),
            TouchEnd::Finished => {
                self.view_changed(true);
                Ok(false)
            }
            TouchEnd::Continuing => Ok(false),
        }
    }

    /// Abandons the gesture in progress without producing a tap.
    pub fn cancel(&mut self) {
        self.gestures.cancel();
    }

    /// The pointer hovers at `position`.
    ///
    /// `hovered` handlers run first; when none handles the event it is routed
    /// to layers and features. Returns whether it was handled.
    pub fn on_hovered(&mut self, position: Point) -> bool {
        let mut event = HoveredEvent::new(position, self.modifiers);
        if !self.handlers.hovered.run(&mut event) {
            self.router
                .dispatch_hover(&mut self.layers, &self.viewport, &mut event);
        }
        if event.map_needs_refresh {
            self.refresh();
        }
        event.handled
    }

    /// A single tap at `position`.
    ///
    /// When it lands close to and soon after the previous single tap, a
    /// double tap is dispatched first. The single tap is then offered to the
    /// `single_tapped` handlers and routed to layers. Returns whether the
    /// single tap was handled.
    ///
    /// # Errors
    ///
    /// Propagates errors from tap routing.
    pub fn on_single_tapped(
        &mut self,
        position: Point,
        timestamp: Option<i64>,
    ) -> Result<bool, InteractionError> {
        let promoted = self.taps.on_tap(
            position,
            timestamp,
            self.config.double_tap_distance(),
            self.config.taps.max_double_tap_interval_ms,
        );
        if promoted {
            self.on_double_tapped(position, 2)?;
        }
        let mut event = TappedEvent::new(position, 1, self.modifiers);
        self.route_tap(&mut event, false)?;
        Ok(event.handled)
    }

    /// A double (or higher) tap at `position`.
    ///
    /// Cancels any drag in progress, offers the tap to the `double_tapped`
    /// handlers and routes it to layers. When nothing handled it, it becomes
    /// a zoom in about `position`, which `zoomed` handlers may take over.
    /// Returns whether the tap was handled by a handler, a receiver or the
    /// zoom.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidTapCount`]
    /// when `taps` is zero.
    pub fn on_double_tapped(&mut self, position: Point, taps: u32) -> Result<bool, InteractionError> {
        self.gestures.cancel();
        let mut event = TappedEvent::new(position, taps, self.modifiers);
        self.route_tap(&mut event, true)?;
        if event.handled {
            return Ok(true);
        }
        Ok(self.on_zoomed(position, ZoomDirection::In))
    }

    /// A long press at `position`. Returns whether a handler consumed it.
    pub fn on_long_tapped(&mut self, position: Point) -> bool {
        let mut event = TappedEvent::new(position, 1, self.modifiers);
        self.handlers.long_tapped.run(&mut event)
    }

    /// A swipe. Returns whether a handler consumed it.
    pub fn on_swiped(&mut self, velocity: Vec2) -> bool {
        self.handlers.swiped.run(&mut SwipedEvent::new(velocity))
    }

    /// A fling. Returns whether a handler consumed it.
    pub fn on_flinged(&mut self, velocity: Vec2) -> bool {
        self.handlers.flinged.run(&mut SwipedEvent::new(velocity))
    }

    /// A mouse wheel notch at `position`.
    ///
    /// Positive deltas zoom in, negative ones zoom out, zero is ignored.
    pub fn on_wheel(&mut self, position: Point, delta: f64) -> bool {
        if delta > 0.0 {
            self.on_zoomed(position, ZoomDirection::In)
        } else if delta < 0.0 {
            self.on_zoomed(position, ZoomDirection::Out)
        } else {
            false
        }
    }

    /// A stepwise zoom about `position`.
    ///
    /// `zoomed` handlers run first; the default zoom only applies when none
    /// handled the event. Returns whether the event was handled by either.
    pub fn on_zoomed(&mut self, position: Point, direction: ZoomDirection) -> bool {
        let mut event = ZoomedEvent::new(position, direction, self.modifiers);
        if self.handlers.zoomed.run(&mut event) {
            return true;
        }
        self.default_zoom(position, direction)
    }

    /// Zooms to `resolution` about the screen center.
    ///
    /// Returns `false` when the viewport is not initialized.
    pub fn zoom_to_resolution(&mut self, resolution: f64) -> bool {
        if !self.viewport.is_initialized() {
            return false;
        }
        let limited = self.limiter.limit_resolution(
            resolution,
            self.viewport.width(),
            self.viewport.height(),
        );
        let center = Point::new(self.viewport.width() * 0.5, self.viewport.height() * 0.5);
        self.viewport.zoom_about(center, limited);
        self.limiter.limit(&mut self.viewport);
        self.view_changed(false);
        true
    }

    /// Shows `extent` as large as it fits.
    pub fn zoom_to_extent(&mut self, extent: Rect) {
        self.viewport.zoom_to_extent(extent);
        self.limiter.limit(&mut self.viewport);
        self.view_changed(false);
    }

    /// Centers the map on a world position.
    pub fn center_on(&mut self, world: Point) {
        self.viewport.set_center(world);
        self.limiter.limit_extent(&mut self.viewport);
        self.view_changed(false);
    }

    /// Feeds one normalized input event.
    ///
    /// Returns whether the event was handled or changed the view, following
    /// the entry point it maps to.
    ///
    /// # Errors
    ///
    /// Propagates errors from the gesture machine and tap routing.
    pub fn feed_pointer(&mut self, input: PointerInput) -> Result<bool, InteractionError> {
        match input {
            PointerInput::Down {
                points,
                click_count,
                timestamp,
            } => match (click_count, points.first()) {
                (2.., Some(&position)) => self.on_double_tapped(position, click_count),
                _ => Ok(self.on_touch_start(&points, timestamp)),
            },
            PointerInput::Move { points } => self.on_touch_move(&points),
            PointerInput::Up {
                remaining,
                released,
                timestamp,
            } => self.on_touch_end(&remaining, released, timestamp),
            PointerInput::Hover { position } => Ok(self.on_hovered(position)),
            PointerInput::Wheel { position, delta } => Ok(self.on_wheel(position, delta)),
            PointerInput::LongPress { position } => Ok(self.on_long_tapped(position)),
            PointerInput::Swipe { velocity } => Ok(self.on_swiped(velocity)),
            PointerInput::Fling { velocity } => Ok(self.on_flinged(velocity)),
            PointerInput::Cancel => {
                self.cancel();
                Ok(false)
            }
        }
    }

    /// Runs the single or double tap handlers, then layer routing.
    fn route_tap(&mut self, event: &mut TappedEvent, double: bool) -> Result<(), InteractionError> {
        if event.taps < 1 {
            return Err(DispatchError::InvalidTapCount { taps: event.taps }.into());
        }
        let handlers = if double {
            &mut self.handlers.double_tapped
        } else {
            &mut self.handlers.single_tapped
        };
        if !handlers.run(event) {
            self.router
                .dispatch_tap(&mut self.layers, &self.viewport, event)?;
        }
        if event.map_needs_refresh {
            self.refresh();
        }
        Ok(())
    }

    /// Steps the resolution about `position` unless zooming is locked.
    fn default_zoom(&mut self, position: Point, direction: ZoomDirection) -> bool {
        if !self.viewport.is_initialized() || self.config.gestures.zoom_lock {
            return false;
        }
        let current = self.viewport.resolution();
        let stepped = match direction {
            ZoomDirection::In => zoom_in(self.limiter.resolutions(), current),
            ZoomDirection::Out => zoom_out(self.limiter.resolutions(), current),
        };
        let limited =
            self.limiter
                .limit_resolution(stepped, self.viewport.width(), self.viewport.height());
        log::debug!("default zoom {direction:?} at {position:?}: {current} -> {limited}");
        self.viewport.zoom_about(position, limited);
        self.limiter.limit(&mut self.viewport);
        self.view_changed(true);
        true
    }

    fn home_extent(&self) -> Option<Rect> {
        self.limiter.envelope.or_else(|| {
            self.layers
                .ids()
                .iter()
                .filter_map(|&id| self.layers.get(id).and_then(|layer| layer.envelope()))
                .reduce(|a, b| a.union(b))
        })
    }

    fn view_changed(&mut self, user_action: bool) {
        self.host.view_changed(&self.viewport, user_action);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.invalid = true;
        self.host.refresh_graphics();
    }
}
