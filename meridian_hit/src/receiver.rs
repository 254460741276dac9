// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::{HoveredEvent, TappedEvent};

/// Something that can react to routed pointer events.
///
/// Every method defaults to doing nothing, so implementers only override what
/// they care about. Setting `handled` on the event stops the router.
pub trait UiEventReceiver {
    /// A single tap landed on the receiver.
    fn on_single_tap(&mut self, event: &mut TappedEvent) {
        let _ = event;
    }

    /// A double tap landed on the receiver.
    fn on_double_tap(&mut self, event: &mut TappedEvent) {
        let _ = event;
    }

    /// The pointer is over the receiver.
    fn on_hovered(&mut self, event: &mut HoveredEvent) {
        let _ = event;
    }

    /// The pointer just moved onto the receiver.
    ///
    /// Called once per enter, before [`UiEventReceiver::on_hovered`].
    fn on_hovered_once(&mut self, event: &mut HoveredEvent) {
        let _ = event;
    }

    /// The pointer left the receiver for something else.
    fn on_hover_stopped(&mut self, event: &mut HoveredEvent) {
        let _ = event;
    }
}
