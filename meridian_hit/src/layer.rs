// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use meridian_viewport::Viewport;

use crate::event::{HoveredEvent, TappedEvent};
use crate::geometry::Geometry;
use crate::receiver::UiEventReceiver;
use crate::style::Style;

/// Identifier of a feature within its layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureId(pub u64);

/// A map object that can be hit and notified.
pub trait Feature: UiEventReceiver {
    /// Identifier, unique within the owning layer.
    fn id(&self) -> FeatureId;

    /// World-space geometry.
    fn geometry(&self) -> &Geometry;

    /// Styles drawn for this feature. When empty, the layer style applies.
    fn styles(&self) -> &[Style] {
        &[]
    }
}

/// The query surface of a map layer.
///
/// The router reads layers only through this trait and notifies them through
/// [`UiEventReceiver`] as the fallback for pointer events on the layer.
pub trait Layer: UiEventReceiver {
    /// Default style for features without their own styles.
    fn style(&self) -> Option<&Style> {
        None
    }

    /// World-space bounding box of all features, if there are any.
    fn envelope(&self) -> Option<Rect>;

    /// Returns `true` if the layer is drawn for this viewport.
    fn is_visible_on_viewport(&self, viewport: &Viewport) -> bool;

    /// Identifiers of the features intersecting `extent` at `resolution`.
    ///
    /// The result is a snapshot; the router resolves each id again before
    /// using it, so the layer may change while it is being walked.
    fn features_in_view(&self, extent: Rect, resolution: f64) -> Vec<FeatureId>;

    /// Looks up a feature.
    fn feature(&self, id: FeatureId) -> Option<&dyn Feature>;

    /// Looks up a feature for notification.
    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut dyn Feature>;
}

macro_rules! forward_to_receiver {
    ($ty:ty $(, $generic:ident)?) => {
        impl$(<$generic: Feature>)? UiEventReceiver for $ty {
            fn on_single_tap(&mut self, event: &mut TappedEvent) {
                if let Some(receiver) = &mut self.receiver {
                    receiver.on_single_tap(event);
                }
            }

            fn on_double_tap(&mut self, event: &mut TappedEvent) {
                if let Some(receiver) = &mut self.receiver {
                    receiver.on_double_tap(event);
                }
            }

            fn on_hovered(&mut self, event: &mut HoveredEvent) {
                if let Some(receiver) = &mut self.receiver {
                    receiver.on_hovered(event);
                }
            }

            fn on_hovered_once(&mut self, event: &mut HoveredEvent) {
                if let Some(receiver) = &mut self.receiver {
                    receiver.on_hovered_once(event);
                }
            }

            fn on_hover_stopped(&mut self, event: &mut HoveredEvent) {
                if let Some(receiver) = &mut self.receiver {
                    receiver.on_hover_stopped(event);
                }
            }
        }
    };
}

/// A feature held in memory, with an optional event receiver.
pub struct MemoryFeature {
    id: FeatureId,
    /// World-space geometry.
    pub geometry: Geometry,
    /// Feature styles; empty to use the layer style.
    pub styles: Vec<Style>,
    receiver: Option<Box<dyn UiEventReceiver>>,
}

impl MemoryFeature {
    /// Creates a feature without styles or receiver.
    #[must_use]
    pub fn new(id: FeatureId, geometry: Geometry) -> Self {
        Self {
            id,
            geometry,
            styles: Vec::new(),
            receiver: None,
        }
    }

    /// Adds a style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Routes events on this feature to `receiver`.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl UiEventReceiver + 'static) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }
}

impl fmt::Debug for MemoryFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFeature")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("styles", &self.styles)
            .field("has_receiver", &self.receiver.is_some())
            .finish()
    }
}

forward_to_receiver!(MemoryFeature);

impl Feature for MemoryFeature {
    fn id(&self) -> FeatureId {
        self.id
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn styles(&self) -> &[Style] {
        &self.styles
    }
}

/// A layer keeping its features in a `Vec`.
///
/// The layer is drawn while its resolution range contains the viewport
/// resolution. Features are filtered for a view by their bounding boxes.
pub struct MemoryLayer<F> {
    /// Display name.
    pub name: String,
    /// Hidden layers are skipped by the router.
    pub enabled: bool,
    /// Smallest resolution at which the layer is drawn.
    pub min_visible: f64,
    /// Largest resolution at which the layer is drawn.
    pub max_visible: f64,
    /// Default style for features without their own.
    pub style: Option<Style>,
    features: Vec<F>,
    receiver: Option<Box<dyn UiEventReceiver>>,
}

impl<F: Feature> MemoryLayer<F> {
    /// Creates an empty, always visible layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            min_visible: 0.0,
            max_visible: f64::INFINITY,
            style: Some(Style::default()),
            features: Vec::new(),
            receiver: None,
        }
    }

    /// Sets the default style.
    #[must_use]
    pub fn with_style(mut self, style: Option<Style>) -> Self {
        self.style = style;
        self
    }

    /// Sets the resolution range in which the layer is drawn.
    #[must_use]
    pub fn with_visible_range(mut self, min_visible: f64, max_visible: f64) -> Self {
        self.min_visible = min_visible;
        self.max_visible = max_visible;
        self
    }

    /// Routes layer-level events to `receiver`.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl UiEventReceiver + 'static) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }

    /// Adds a feature on top of the existing ones.
    #[must_use]
    pub fn with_feature(mut self, feature: F) -> Self {
        self.features.push(feature);
        self
    }

    /// Adds a feature on top of the existing ones.
    pub fn add(&mut self, feature: F) {
        self.features.push(feature);
    }

    /// Removes the feature with `id`.
    pub fn remove(&mut self, id: FeatureId) -> Option<F> {
        let idx = self.features.iter().position(|f| f.id() == id)?;
        Some(self.features.remove(idx))
    }

    /// Removes all features.
    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// Features in insertion order.
    #[must_use]
    pub fn features(&self) -> &[F] {
        &self.features
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the layer holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<F: fmt::Debug> fmt::Debug for MemoryLayer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLayer")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .field("min_visible", &self.min_visible)
            .field("max_visible", &self.max_visible)
            .field("style", &self.style)
            .field("features", &self.features)
            .field("has_receiver", &self.receiver.is_some())
            .finish()
    }
}

forward_to_receiver!(MemoryLayer<F>, F);

impl<F: Feature> Layer for MemoryLayer<F> {
    fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn envelope(&self) -> Option<Rect> {
        self.features
            .iter()
            .map(|f| f.geometry().bounds())
            .reduce(|a, b| a.union(b))
    }

    fn is_visible_on_viewport(&self, viewport: &Viewport) -> bool {
        let resolution = viewport.resolution();
        self.enabled && self.min_visible <= resolution && resolution <= self.max_visible
    }

    fn features_in_view(&self, extent: Rect, _resolution: f64) -> Vec<FeatureId> {
        self.features
            .iter()
            .filter(|f| touches(f.geometry().bounds(), extent))
            .map(|f| f.id())
            .collect()
    }

    fn feature(&self, id: FeatureId) -> Option<&dyn Feature> {
        self.features
            .iter()
            .find(|f| f.id() == id)
            .map(|f| f as &dyn Feature)
    }

    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut dyn Feature> {
        self.features
            .iter_mut()
            .find(|f| f.id() == id)
            .map(|f| f as &mut dyn Feature)
    }
}

/// Closed-interval overlap, so zero-sized point bounds still match.
fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
