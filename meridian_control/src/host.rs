// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use meridian_viewport::Viewport;

/// Outward signals from the interaction core to the embedding host.
///
/// All methods default to no-ops and must return quickly: the core calls
/// them synchronously from input handling and never waits for a repaint.
pub trait MapHost {
    /// Something visible changed; schedule a repaint.
    fn refresh_graphics(&mut self) {}

    /// The viewport changed. `user_action` is `true` for gesture-driven
    /// changes and `false` for programmatic ones.
    fn view_changed(&mut self, viewport: &Viewport, user_action: bool) {
        let _ = (viewport, user_action);
    }

    /// The viewport received its first valid size and extent.
    fn viewport_initialized(&mut self, viewport: &Viewport) {
        let _ = viewport;
    }
}

/// A host that ignores every signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullHost;

impl MapHost for NullHost {}
