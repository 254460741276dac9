// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-ordered layer storage with generational handles.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::layer::Layer;

/// Identifier for a layer in a [`LayerStack`].
///
/// A slot index plus a generation counter. Removing a layer frees its slot;
/// reusing the slot bumps the generation, so a stale `LayerId` never refers
/// to a different layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LayerId {
    idx: usize,
    generation: u32,
}

struct Slot {
    generation: u32,
    layer: Option<Box<dyn Layer>>,
}

/// Layers in drawing order: index 0 is drawn first, the last one on top.
#[derive(Default)]
pub struct LayerStack {
    slots: Vec<Slot>,
    free: Vec<usize>,
    order: Vec<LayerId>,
}

impl fmt::Debug for LayerStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerStack")
            .field("order", &self.order)
            .field("free", &self.free)
            .finish_non_exhaustive()
    }
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer on top and returns its id.
    pub fn push(&mut self, layer: impl Layer + 'static) -> LayerId {
        let id = self.alloc(Box::new(layer));
        self.order.push(id);
        id
    }

    /// Inserts a layer at `index` in drawing order (clamped to the top).
    pub fn insert(&mut self, index: usize, layer: impl Layer + 'static) -> LayerId {
        let id = self.alloc(Box::new(layer));
        self.order.insert(index.min(self.order.len()), id);
        id
    }

    /// Removes a layer. Returns `None` for a stale id.
    pub fn remove(&mut self, id: LayerId) -> Option<Box<dyn Layer>> {
        let slot = self.slots.get_mut(id.idx)?;
        if slot.generation != id.generation {
            return None;
        }
        let layer = slot.layer.take()?;
        self.free.push(id.idx);
        self.order.retain(|other| *other != id);
        Some(layer)
    }

    /// Removes every layer. All ids become stale.
    pub fn clear(&mut self) {
        let ids = core::mem::take(&mut self.order);
        for id in ids {
            self.remove(id);
        }
    }

    /// Returns `true` if `id` refers to a layer in the stack.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a layer.
    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&dyn Layer> {
        let slot = self.slots.get(id.idx)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.layer.as_deref()
    }

    /// Looks up a layer for mutation.
    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut (dyn Layer + 'static)> {
        let slot = self.slots.get_mut(id.idx)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.layer.as_deref_mut()
    }

    /// Layer ids in drawing order, bottom first.
    #[must_use]
    pub fn ids(&self) -> &[LayerId] {
        &self.order
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the stack holds no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn alloc(&mut self, layer: Box<dyn Layer>) -> LayerId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            slot.layer = Some(layer);
            LayerId {
                idx,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 1,
                layer: Some(layer),
            });
            LayerId {
                idx: self.slots.len() - 1,
                generation: 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayerStack;
    use crate::layer::{MemoryFeature, MemoryLayer};

    fn layer(name: &str) -> MemoryLayer<MemoryFeature> {
        MemoryLayer::new(name)
    }

    #[test]
    fn push_and_insert_keep_drawing_order() {
        let mut stack = LayerStack::new();
        let a = stack.push(layer("a"));
        let c = stack.push(layer("c"));
        let b = stack.insert(1, layer("b"));
        assert_eq!(stack.ids(), &[a, b, c]);
        let top = stack.insert(99, layer("top"));
        assert_eq!(stack.ids().last(), Some(&top));
    }

    #[test]
    fn removed_ids_go_stale_and_slots_are_reused() {
        let mut stack = LayerStack::new();
        let a = stack.push(layer("a"));
        assert!(stack.remove(a).is_some());
        assert!(!stack.is_alive(a));
        assert!(stack.remove(a).is_none());

        let b = stack.push(layer("b"));
        assert_ne!(a, b);
        assert!(stack.get(a).is_none());
        assert!(stack.get(b).is_some());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut stack = LayerStack::new();
        let a = stack.push(layer("a"));
        stack.push(layer("b"));
        stack.clear();
        assert!(stack.is_empty());
        assert!(!stack.is_alive(a));
    }
}
