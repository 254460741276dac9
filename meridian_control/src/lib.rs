// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meridian Control: the host-agnostic interaction core of a map control.
//!
//! [`MapInteraction`] ties the other Meridian crates together:
//! - pointer input drives the gesture machine of `meridian_gesture`, which
//!   pans, pinch-zooms and rotates the `meridian_viewport` viewport within
//!   the limiter's bounds;
//! - released pointers that barely moved become taps, and quick repeated
//!   taps become double taps;
//! - taps and hovers go to application [`handlers`] first and are then
//!   routed to layers and features by `meridian_hit`;
//! - unhandled double taps and wheel notches zoom one step.
//!
//! Outward signals (repaint, view changed, viewport initialized) go to a
//! [`MapHost`]. Hosts translate their native events either by calling the
//! `on_*` entry points or by feeding [`PointerInput`] values.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use meridian_control::MapInteraction;
//!
//! let mut map = MapInteraction::default();
//! map.limiter_mut().envelope = Some(Rect::new(0.0, 0.0, 1000.0, 1000.0));
//! map.resize(500.0, 500.0);
//! assert_eq!(map.viewport().resolution(), 2.0);
//!
//! // Two quick taps at the same spot zoom in one step.
//! map.on_single_tapped(Point::new(250.0, 250.0), Some(0)).unwrap();
//! map.on_single_tapped(Point::new(250.0, 250.0), Some(120)).unwrap();
//! assert_eq!(map.viewport().resolution(), 1.0);
//! assert!(map.take_invalid());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod handlers;

mod config;
mod control;
mod error;
mod events;
mod host;
mod input;

pub use config::InteractionConfig;
pub use control::MapInteraction;
pub use error::InteractionError;
pub use events::{Handled, SwipedEvent, TouchPoints, TouchedEvent, ZoomDirection, ZoomedEvent};
pub use host::{MapHost, NullHost};
pub use input::PointerInput;
