// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered handler lists for application-level observers.
//!
//! Handlers run synchronously in registration order and share one event
//! value. As soon as a handler marks the event handled, the remaining
//! handlers are skipped.
//!
//! ```
//! use kurbo::Point;
//! use meridian_control::handlers::HandlerList;
//! use meridian_hit::{Modifiers, TappedEvent};
//!
//! let mut list: HandlerList<TappedEvent> = HandlerList::new();
//! list.push(|e| e.map_needs_refresh = true);
//! list.push(|e| e.handled = true);
//! list.push(|_| unreachable!("skipped once handled"));
//!
//! let mut tap = TappedEvent::new(Point::ORIGIN, 1, Modifiers::empty());
//! assert!(list.run(&mut tap));
//! assert!(tap.map_needs_refresh);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use meridian_hit::{HoveredEvent, TappedEvent};

use crate::events::{Handled, SwipedEvent, TouchedEvent, ZoomedEvent};

/// Handlers for one event kind, in registration order.
pub struct HandlerList<E> {
    handlers: Vec<Box<dyn FnMut(&mut E)>>,
}

impl<E> Default for HandlerList<E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for HandlerList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerList")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl<E: Handled> HandlerList<E> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn push(&mut self, handler: impl FnMut(&mut E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Removes all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs handlers until one marks the event handled.
    ///
    /// Returns whether the event is handled afterwards. An event that arrives
    /// already handled runs no handlers.
    pub fn run(&mut self, event: &mut E) -> bool {
        for handler in &mut self.handlers {
            if event.is_handled() {
                break;
            }
            handler(event);
        }
        event.is_handled()
    }
}

/// Every observer list of a map control.
#[derive(Debug, Default)]
pub struct Handlers {
    /// Pointers went down. Handling it skips the gesture start.
    pub touch_started: HandlerList<TouchedEvent>,
    /// Pointers moved. Handling it skips the gesture update.
    pub touch_moved: HandlerList<TouchedEvent>,
    /// A pointer went up. Informational; gesture end still runs.
    pub touch_ended: HandlerList<TouchedEvent>,
    /// The pointer hovers; runs before layer routing.
    pub hovered: HandlerList<HoveredEvent>,
    /// A single tap; runs before layer routing.
    pub single_tapped: HandlerList<TappedEvent>,
    /// A double tap; runs before layer routing and the default zoom.
    pub double_tapped: HandlerList<TappedEvent>,
    /// A long press.
    pub long_tapped: HandlerList<TappedEvent>,
    /// A swipe.
    pub swiped: HandlerList<SwipedEvent>,
    /// A fling.
    pub flinged: HandlerList<SwipedEvent>,
    /// A stepwise zoom; runs before the default zoom.
    pub zoomed: HandlerList<ZoomedEvent>,
}
