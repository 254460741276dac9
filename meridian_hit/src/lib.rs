// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Meridian Hit: deterministic routing of map pointer events to layers and
//! features.
//!
//! - [`LayerStack`]: layers in drawing order under generational [`LayerId`]s.
//! - [`Layer`] and [`Feature`]: the query surface the router reads, with
//!   [`MemoryLayer`] and [`MemoryFeature`] as ready-made in-memory versions.
//! - [`TouchPredicate`]: decides whether a world position touches a feature;
//!   [`SymbolAwarePredicate`] accounts for symbol sizes and strokes as
//!   described by a [`Style`].
//! - [`HitTestRouter`]: walks layers top to bottom, notifies the first hit
//!   feature and then its layer, stops when an event is handled, and tracks
//!   hover enter/leave.
//!
//! Receivers implement [`UiEventReceiver`]; every method has a no-op default.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use meridian_hit::{
//!     FeatureId, Geometry, HitTestRouter, LayerStack, MemoryFeature, MemoryLayer, Modifiers,
//!     TappedEvent, UiEventReceiver,
//! };
//! use meridian_viewport::Viewport;
//!
//! struct Consume;
//! impl UiEventReceiver for Consume {
//!     fn on_single_tap(&mut self, event: &mut TappedEvent) {
//!         event.handled = true;
//!     }
//! }
//!
//! let mut view = Viewport::new();
//! view.try_initialize(100.0, 100.0, Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! let mut layers = LayerStack::new();
//! let pins = layers.push(MemoryLayer::new("pins").with_feature(
//!     MemoryFeature::new(FeatureId(7), Geometry::Point(Point::new(50.0, 50.0)))
//!         .with_receiver(Consume),
//! ));
//!
//! let router = HitTestRouter::new();
//! // World (50, 50) is drawn at the screen center.
//! let mut tap = TappedEvent::new(Point::new(50.0, 50.0), 1, Modifiers::empty());
//! router.dispatch_tap(&mut layers, &view, &mut tap).unwrap();
//! assert!(tap.handled);
//! assert_eq!((tap.layer, tap.feature), (Some(pins), Some(FeatureId(7))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod geometry;
mod hover;
mod layer;
mod predicate;
mod receiver;
mod router;
mod stack;
mod style;

pub use error::DispatchError;
pub use event::{HoveredEvent, Modifiers, TappedEvent};
pub use geometry::Geometry;
pub use hover::HoverTarget;
pub use layer::{Feature, FeatureId, Layer, MemoryFeature, MemoryLayer};
pub use predicate::{SymbolAwarePredicate, TouchPredicate};
pub use receiver::UiEventReceiver;
pub use router::HitTestRouter;
pub use stack::{LayerId, LayerStack};
pub use style::Style;
