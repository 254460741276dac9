// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meridian Viewport: the transform state behind an interactive map.
//!
//! This crate provides a small, headless model of a map view:
//! - [`Viewport`]: center, resolution (world units per pixel) and rotation
//!   over a screen of a given size, with world↔screen conversion and
//!   incremental pan/zoom/rotate.
//! - [`ViewportLimiter`]: clamps resolution and center to the map's zoom and
//!   pan policies.
//! - [`zoom`]: stepping through a list of discrete resolutions.
//! - [`math`]: the few vector helpers gesture code needs (centroids, angles).
//!
//! It does **not** capture input or render anything. Gesture recognition
//! lives in `meridian_gesture`, which drives [`Viewport::transform`] and
//! [`ViewportLimiter::limit`] from pointer movement.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use meridian_viewport::Viewport;
//!
//! let mut view = Viewport::new();
//! // Host layout reports an 800x600 control showing a 8000x6000 world area.
//! assert!(view.try_initialize(800.0, 600.0, Some(Rect::new(0.0, 0.0, 8000.0, 6000.0))));
//! assert_eq!(view.resolution(), 10.0);
//!
//! // Drag the map 50 pixels to the right.
//! let grabbed = view.screen_to_world(Point::new(400.0, 300.0));
//! view.transform(Point::new(450.0, 300.0), Point::new(400.0, 300.0), 1.0, 0.0);
//! let under_pointer = view.screen_to_world(Point::new(450.0, 300.0));
//! assert!((under_pointer - grabbed).hypot() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! - World space is y-up; screen space is y-down with the origin top-left.
//! - Angles are in degrees and rotations are kept in `(-180, 180]`.
//! - Resolutions are always positive; setters ignore anything else.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod math;
pub mod zoom;

mod limiter;
mod modes;
mod viewport;

pub use limiter::{ViewportLimiter, ZoomLimits};
pub use modes::{PanMode, ZoomMode};
pub use viewport::Viewport;
