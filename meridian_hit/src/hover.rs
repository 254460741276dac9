// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::HoveredEvent;
use crate::layer::FeatureId;
use crate::receiver::UiEventReceiver;
use crate::stack::{LayerId, LayerStack};

/// What the pointer was last found hovering over.
///
/// Stored as ids rather than references: the target is looked up again on
/// every pass and silently dropped if its layer or feature is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// A feature of a layer.
    Feature {
        /// Owning layer.
        layer: LayerId,
        /// The feature within the layer.
        feature: FeatureId,
    },
    /// A layer, when none of its features was under the pointer.
    Layer(LayerId),
}

impl HoverTarget {
    /// Layer of the target.
    #[must_use]
    pub fn layer(self) -> LayerId {
        match self {
            Self::Feature { layer, .. } | Self::Layer(layer) => layer,
        }
    }

    /// Feature of the target, if it is one.
    #[must_use]
    pub fn feature(self) -> Option<FeatureId> {
        match self {
            Self::Feature { feature, .. } => Some(feature),
            Self::Layer(_) => None,
        }
    }

    /// Returns `true` if the target still exists in `layers`.
    #[must_use]
    pub fn is_alive(self, layers: &LayerStack) -> bool {
        match self {
            Self::Feature { layer, feature } => layers
                .get(layer)
                .is_some_and(|l| l.feature(feature).is_some()),
            Self::Layer(layer) => layers.is_alive(layer),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HoverEdge {
    Entered,
    Stopped,
}

/// Fires an enter or leave notification on `target`.
///
/// Returns `false` without doing anything when the target no longer exists.
pub(crate) fn notify_edge(
    layers: &mut LayerStack,
    target: HoverTarget,
    edge: HoverEdge,
    event: &mut HoveredEvent,
) -> bool {
    event.layer = Some(target.layer());
    event.feature = target.feature();
    match target {
        HoverTarget::Feature { layer, feature } => {
            match layers.get_mut(layer).and_then(|l| l.feature_mut(feature)) {
                Some(f) => fire(f, edge, event),
                None => return false,
            }
        }
        HoverTarget::Layer(layer) => match layers.get_mut(layer) {
            Some(l) => fire(l, edge, event),
            None => return false,
        },
    }
    true
}

fn fire<R: UiEventReceiver + ?Sized>(receiver: &mut R, edge: HoverEdge, event: &mut HoveredEvent) {
    match edge {
        HoverEdge::Entered => receiver.on_hovered_once(event),
        HoverEdge::Stopped => receiver.on_hover_stopped(event),
    }
}
