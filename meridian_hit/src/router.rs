// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of taps and hovers to the layer and feature under the pointer.
//!
//! ## Order
//!
//! Layers are visited top to bottom (reverse drawing order). Hidden layers
//! are skipped. Within a layer only the features the layer reports as in
//! view are tested, last drawn first, and the first one the
//! [`TouchPredicate`] accepts is the hit. The hit feature is notified, then
//! the layer itself; the layer is notified even when nothing in it was hit,
//! which makes layer handlers a catch-all for the layer. The walk stops as
//! soon as a receiver sets `handled`.
//!
//! ## Hover enter/leave
//!
//! Each pass has one hover target: the topmost hit feature across all
//! visible layers or, when no feature is hit, the topmost visible layer.
//! When it differs from the previous target the previous one gets
//! `on_hover_stopped`, `handled` is reset, and the new target gets
//! `on_hovered_once`. Regular `on_hovered` notifications then follow in
//! routing order. When no visible layer is reached at all, the previous
//! target is left.
//!
//! ## Attribution
//!
//! While a receiver runs, `event.layer` and `event.feature` name the layer
//! being visited and its hit feature. When the walk ends unhandled they name
//! the topmost hit, if any.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use meridian_viewport::Viewport;

use crate::error::DispatchError;
use crate::event::{HoveredEvent, TappedEvent};
use crate::hover::{HoverEdge, HoverTarget, notify_edge};
use crate::layer::{FeatureId, Layer};
use crate::predicate::{SymbolAwarePredicate, TouchPredicate};
use crate::receiver::UiEventReceiver;
use crate::stack::{LayerId, LayerStack};

/// Routes pointer events through a [`LayerStack`].
#[derive(Clone, Debug, Default)]
pub struct HitTestRouter<P = SymbolAwarePredicate> {
    predicate: P,
    previous_hover: Option<HoverTarget>,
}

impl HitTestRouter {
    /// Creates a router with the default [`SymbolAwarePredicate`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: TouchPredicate> HitTestRouter<P> {
    /// Creates a router with a custom touch predicate.
    pub fn with_predicate(predicate: P) -> Self {
        Self {
            predicate,
            previous_hover: None,
        }
    }

    /// The touch predicate in use.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// The current hover target.
    pub fn previous_hover(&self) -> Option<HoverTarget> {
        self.previous_hover
    }

    /// Finds the topmost hit at a screen position without notifying anyone.
    pub fn hit_test(
        &self,
        layers: &LayerStack,
        viewport: &Viewport,
        position: Point,
    ) -> Option<(LayerId, FeatureId)> {
        let world = viewport.screen_to_world(position);
        let extent = viewport.extent();
        let resolution = viewport.resolution();
        layers.ids().iter().rev().find_map(|&id| {
            let layer = layers.get(id)?;
            if !layer.is_visible_on_viewport(viewport) {
                return None;
            }
            self.hit_in_layer(layer, world, extent, resolution)
                .map(|feature| (id, feature))
        })
    }

    /// Routes a tap.
    ///
    /// One tap is delivered through [`UiEventReceiver::on_single_tap`], two or
    /// more through [`UiEventReceiver::on_double_tap`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidTapCount`] when `event.taps` is zero.
    pub fn dispatch_tap(
        &self,
        layers: &mut LayerStack,
        viewport: &Viewport,
        event: &mut TappedEvent,
    ) -> Result<(), DispatchError> {
        if event.taps < 1 {
            return Err(DispatchError::InvalidTapCount { taps: event.taps });
        }
        let world = viewport.screen_to_world(event.position);
        let extent = viewport.extent();
        let resolution = viewport.resolution();
        let mut topmost = None;

        for id in snapshot(layers) {
            let Some(layer) = layers.get_mut(id) else {
                continue;
            };
            if !layer.is_visible_on_viewport(viewport) {
                continue;
            }
            let hit = self.hit_in_layer(&*layer, world, extent, resolution);
            event.layer = Some(id);
            event.feature = hit;
            if topmost.is_none() && hit.is_some() {
                topmost = Some((id, hit));
            }
            if let Some(fid) = hit {
                if let Some(feature) = layer.feature_mut(fid) {
                    tap(feature, event);
                    if event.handled {
                        log::debug!("tap handled by feature {fid:?} of {id:?}");
                        return Ok(());
                    }
                }
            }
            tap(layer, event);
            if event.handled {
                log::debug!("tap handled by layer {id:?}");
                return Ok(());
            }
        }

        (event.layer, event.feature) = topmost.map_or((None, None), |(l, f)| (Some(l), f));
        Ok(())
    }

    /// Routes a hover and tracks enter/leave transitions.
    pub fn dispatch_hover(
        &mut self,
        layers: &mut LayerStack,
        viewport: &Viewport,
        event: &mut HoveredEvent,
    ) {
        if self.previous_hover.is_some_and(|t| !t.is_alive(layers)) {
            log::debug!("hover target {:?} is gone", self.previous_hover);
            self.previous_hover = None;
        }
        let visits = self.visible_hits(layers, viewport, event.position);
        let topmost = visits
            .iter()
            .find_map(|&(id, hit)| hit.map(|feature| (id, feature)));
        let target = match topmost {
            Some((layer, feature)) => Some(HoverTarget::Feature { layer, feature }),
            None => visits.first().map(|&(id, _)| HoverTarget::Layer(id)),
        };

        if self.previous_hover != target {
            self.leave(layers, event);
            if let Some(target) = target {
                log::debug!("hover entered {target:?}");
                self.previous_hover = Some(target);
                notify_edge(layers, target, HoverEdge::Entered, event);
                if event.handled {
                    return;
                }
            }
        }

        for (id, hit) in visits {
            event.layer = Some(id);
            event.feature = hit;
            let Some(layer) = layers.get_mut(id) else {
                continue;
            };
            if let Some(fid) = hit {
                if let Some(feature) = layer.feature_mut(fid) {
                    feature.on_hovered(event);
                    if event.handled {
                        return;
                    }
                }
            }
            layer.on_hovered(event);
            if event.handled {
                return;
            }
        }

        (event.layer, event.feature) =
            topmost.map_or((None, None), |(l, f)| (Some(l), Some(f)));
    }

    /// Notifies the previous hover target that the pointer left it.
    fn leave(&mut self, layers: &mut LayerStack, event: &mut HoveredEvent) {
        if let Some(previous) = self.previous_hover.take() {
            log::debug!("hover stopped on {previous:?}");
            notify_edge(layers, previous, HoverEdge::Stopped, event);
            event.handled = false;
        }
    }

    /// Visible layers top to bottom, each with its hit feature.
    ///
    /// Taken before any receiver runs, so receivers may change the stack.
    fn visible_hits(
        &self,
        layers: &LayerStack,
        viewport: &Viewport,
        position: Point,
    ) -> Vec<(LayerId, Option<FeatureId>)> {
        let world = viewport.screen_to_world(position);
        let extent = viewport.extent();
        let resolution = viewport.resolution();
        layers
            .ids()
            .iter()
            .rev()
            .filter_map(|&id| {
                let layer = layers.get(id)?;
                layer
                    .is_visible_on_viewport(viewport)
                    .then(|| (id, self.hit_in_layer(layer, world, extent, resolution)))
            })
            .collect()
    }

    fn hit_in_layer(
        &self,
        layer: &dyn Layer,
        world: Point,
        extent: Rect,
        resolution: f64,
    ) -> Option<FeatureId> {
        let style = layer.style();
        layer
            .features_in_view(extent, resolution)
            .into_iter()
            .rev()
            .find(|&fid| {
                layer.feature(fid).is_some_and(|feature| {
                    self.predicate
                        .is_touching(world, feature, style, resolution)
                })
            })
    }
}

/// Layer ids top to bottom, copied so receivers may change the stack.
fn snapshot(layers: &LayerStack) -> Vec<LayerId> {
    layers.ids().iter().rev().copied().collect()
}

fn tap<R: UiEventReceiver + ?Sized>(receiver: &mut R, event: &mut TappedEvent) {
    if event.is_double() {
        receiver.on_double_tap(event);
    } else {
        receiver.on_single_tap(event);
    }
}
