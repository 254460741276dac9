// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meridian Gesture: turns raw pointer positions into map gestures.
//!
//! - [`GestureStateMachine`]: classifies pointer sequences as drags or
//!   pinches, applies them to a [`Viewport`](meridian_viewport::Viewport)
//!   and reports taps when a single pointer barely moved.
//! - [`PinchState`]: centroid, radius and angle of a multi-pointer gesture.
//! - [`tap::TapRecognizer`]: promotes two nearby, quick single taps into a
//!   double tap.
//! - [`drag::DragState`]: start and last position of a single-pointer drag.
//!
//! Pinch rotation is gated by two thresholds. An unrotated map only starts
//! rotating once the accumulated pinch rotation reaches
//! [`GestureSettings::unsnap_rotation_degrees`] with the fingers far enough
//! apart, and a rotated map snaps back to north-up when the accumulated
//! rotation returns within [`GestureSettings::resnap_rotation_degrees`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use meridian_gesture::{GestureSettings, GestureStateMachine, TouchEnd, TouchMode};
//! use meridian_viewport::{Viewport, ViewportLimiter};
//!
//! let mut view = Viewport::new();
//! view.try_initialize(400.0, 400.0, Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
//! let limiter = ViewportLimiter::new();
//! let settings = GestureSettings::default();
//!
//! let mut gestures = GestureStateMachine::new();
//! assert_eq!(gestures.touch_start(&[Point::new(100.0, 100.0)], &view), TouchMode::Dragging);
//! gestures.touch_move(&[Point::new(160.0, 100.0)], &mut view, &limiter, &settings).unwrap();
//! assert!((view.center() - Point::new(140.0, 200.0)).hypot() < 1e-9);
//!
//! let end = gestures.touch_end(&[], Point::new(160.0, 100.0), &view, &settings);
//! assert_eq!(end, TouchEnd::Finished);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod tap;

mod error;
mod pinch;
mod settings;
mod touch;

pub use error::GestureError;
pub use pinch::PinchState;
pub use settings::{DEFAULT_MIN_DRAG_DISTANCE, GestureSettings, TapSettings};
pub use touch::{GestureSession, GestureStateMachine, TouchEnd, TouchMode};
