// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by the hit-test router for malformed requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// A tap was dispatched with a tap count below one.
    InvalidTapCount {
        /// The tap count that was supplied.
        taps: u32,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTapCount { taps } => {
                write!(f, "tap dispatch needs at least one tap, got {taps}")
            }
        }
    }
}

impl core::error::Error for DispatchError {}
