// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use meridian_viewport::math::normalize_degrees;
use meridian_viewport::{Viewport, ViewportLimiter};

use crate::drag::DragState;
use crate::error::GestureError;
use crate::pinch::PinchState;
use crate::settings::GestureSettings;

/// What the pointers currently down are doing to the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchMode {
    /// No gesture in progress.
    #[default]
    None,
    /// One pointer is panning the map.
    Dragging,
    /// Two or more pointers are zooming (and possibly rotating) the map.
    Zooming,
}

/// Scratch state of the gesture in progress.
///
/// Everything here is reset when a gesture starts and dropped when it ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Current mode.
    pub mode: TouchMode,
    /// Start and last position of a single-pointer drag.
    pub drag: DragState,
    /// Pinch baseline from the previous multi-pointer event.
    pub pinch: Option<PinchState>,
    /// Rotation accumulated over the pinch, in degrees.
    ///
    /// Starts at the viewport rotation and follows the pointers without any
    /// snapping; the snap thresholds are evaluated against it.
    pub inner_rotation: f64,
}

/// How a pointer release ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEnd {
    /// A single pointer went down and up without moving past the drag
    /// threshold. Carries the release position.
    Tap(Point),
    /// The last pointer went up after a pan or pinch.
    Finished,
    /// Pointers remain down; the gesture restarted from them.
    Continuing,
}

/// Classifies pointer sequences into drag and pinch gestures and applies them
/// to a [`Viewport`].
///
/// The machine holds only the current [`GestureSession`]. The viewport, its
/// limiter and the settings are borrowed per call, so one machine can be
/// driven by any owner of those.
#[derive(Clone, Debug, Default)]
pub struct GestureStateMachine {
    session: GestureSession,
}

impl GestureStateMachine {
    /// Creates a machine with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> TouchMode {
        self.session.mode
    }

    /// The gesture in progress.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Starts a gesture from the pointers currently down.
    ///
    /// Two or more pointers start a pinch; one pointer starts a drag. An
    /// empty list leaves the machine idle.
    pub fn touch_start(&mut self, points: &[Point], viewport: &Viewport) -> TouchMode {
        self.session = GestureSession::default();
        match points {
            [] => {
                log::warn!("touch start without pointers ignored");
            }
            [single] => {
                self.session.mode = TouchMode::Dragging;
                self.session.drag.start(*single);
            }
            _ => {
                if let Ok(pinch) = PinchState::from_points(points) {
                    self.session.mode = TouchMode::Zooming;
                    self.session.pinch = Some(pinch);
                    self.session.inner_rotation = viewport.rotation();
                }
            }
        }
        log::debug!("touch start with {} pointers: {:?}", points.len(), self.session.mode);
        self.session.mode
    }

    /// Applies a pointer move to the viewport.
    ///
    /// Returns `true` if the viewport changed.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::TooFewPointers`] when a pinch receives a move
    /// with fewer than two pointers.
    pub fn touch_move(
        &mut self,
        points: &[Point],
        viewport: &mut Viewport,
        limiter: &ViewportLimiter,
        settings: &GestureSettings,
    ) -> Result<bool, GestureError> {
        match self.session.mode {
            TouchMode::None => Ok(false),
            TouchMode::Dragging => match points {
                [position] => Ok(self.drag_to(*position, viewport, limiter, settings)),
                [] => {
                    log::warn!("drag move without pointers ignored");
                    Ok(false)
                }
                _ => {
                    // A second finger landed mid-drag: start over as a pinch.
                    self.touch_start(points, viewport);
                    Ok(false)
                }
            },
            TouchMode::Zooming => {
                let pinch = PinchState::from_points(points)?;
                Ok(self.pinch_to(pinch, viewport, limiter, settings))
            }
        }
    }

    /// Handles a pointer release.
    ///
    /// `remaining` are the pointers still down and `released` is where the
    /// lifted pointer went up. With pointers remaining the gesture restarts
    /// from them; otherwise the session ends, as a tap when a drag never left
    /// the drag threshold.
    pub fn touch_end(
        &mut self,
        remaining: &[Point],
        released: Point,
        viewport: &Viewport,
        settings: &GestureSettings,
    ) -> TouchEnd {
        if !remaining.is_empty() {
            self.touch_start(remaining, viewport);
            return TouchEnd::Continuing;
        }
        let session = core::mem::take(&mut self.session);
        if session.mode == TouchMode::Dragging
            && session.drag.is_click(released, settings.drag_threshold())
        {
            log::debug!("drag at {released:?} reclassified as tap");
            TouchEnd::Tap(released)
        } else {
            TouchEnd::Finished
        }
    }

    /// Abandons the gesture in progress without reporting a tap.
    pub fn cancel(&mut self) {
        if self.session.mode != TouchMode::None {
            log::debug!("gesture {:?} cancelled", self.session.mode);
        }
        self.session = GestureSession::default();
    }

    fn drag_to(
        &mut self,
        position: Point,
        viewport: &mut Viewport,
        limiter: &ViewportLimiter,
        settings: &GestureSettings,
    ) -> bool {
        let Some(previous) = self.session.drag.update(position) else {
            return false;
        };
        if settings.pan_lock || previous == position {
            return false;
        }
        log::trace!("pan {previous:?} -> {position:?}");
        if !viewport.transform(position, previous, 1.0, 0.0) {
            return false;
        }
        limiter.limit_extent(viewport);
        true
    }

    fn pinch_to(
        &mut self,
        pinch: PinchState,
        viewport: &mut Viewport,
        limiter: &ViewportLimiter,
        settings: &GestureSettings,
    ) -> bool {
        let Some(previous) = self.session.pinch.replace(pinch) else {
            return false;
        };
        let rotation_delta = self.rotation_delta(&pinch, &previous, viewport, settings);
        let scale_delta = if settings.zoom_lock || previous.radius <= 0.0 {
            1.0
        } else {
            pinch.radius / previous.radius
        };
        let position = if settings.pan_lock {
            previous.center
        } else {
            pinch.center
        };
        log::trace!(
            "pinch at {position:?}: scale {scale_delta}, rotate {rotation_delta}, inner {}",
            self.session.inner_rotation
        );
        if !viewport.transform(position, previous.center, scale_delta, rotation_delta) {
            return false;
        }
        limiter.limit(viewport);
        true
    }

    fn rotation_delta(
        &mut self,
        pinch: &PinchState,
        previous: &PinchState,
        viewport: &Viewport,
        settings: &GestureSettings,
    ) -> f64 {
        if !settings.allow_rotation {
            return 0.0;
        }
        self.session.inner_rotation =
            normalize_degrees(self.session.inner_rotation + pinch.angle - previous.angle);
        let inner = self.session.inner_rotation;
        let current = viewport.rotation();
        if current == 0.0 {
            if inner.abs() >= settings.unsnap_rotation_degrees
                && pinch.radius > settings.min_rotation_radius()
            {
                log::debug!("rotation unsnapped at {inner} degrees");
                inner
            } else {
                0.0
            }
        } else if inner.abs() <= settings.resnap_rotation_degrees {
            log::debug!("rotation snapped back to north");
            -current
        } else {
            normalize_degrees(inner - current)
        }
    }
}
