// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when gesture input does not fit the requested computation.
///
/// These indicate a programming error in the caller, not a user action that
/// can be ignored, so they are surfaced instead of being swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureError {
    /// Pinch values need at least two pointers.
    TooFewPointers {
        /// Number of pointers that were supplied.
        count: usize,
    },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPointers { count } => {
                write!(f, "pinch needs at least two pointers, got {count}")
            }
        }
    }
}

impl core::error::Error for GestureError {}
