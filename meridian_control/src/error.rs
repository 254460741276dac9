// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use meridian_gesture::GestureError;
use meridian_hit::DispatchError;

/// Error surfaced by [`MapInteraction`](crate::MapInteraction) entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionError {
    /// Pointer input did not fit the gesture in progress.
    Gesture(GestureError),
    /// A routed event was malformed.
    Dispatch(DispatchError),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gesture(err) => write!(f, "gesture error: {err}"),
            Self::Dispatch(err) => write!(f, "dispatch error: {err}"),
        }
    }
}

impl core::error::Error for InteractionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Gesture(err) => Some(err),
            Self::Dispatch(err) => Some(err),
        }
    }
}

impl From<GestureError> for InteractionError {
    fn from(err: GestureError) -> Self {
        Self::Gesture(err)
    }
}

impl From<DispatchError> for InteractionError {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}
