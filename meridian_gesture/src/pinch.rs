// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use meridian_viewport::math::{angle_degrees, centroid};

use crate::error::GestureError;

/// Geometry of a multi-pointer gesture at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    /// Centroid of all pointers.
    pub center: Point,
    /// Distance from the centroid to the first pointer.
    pub radius: f64,
    /// Direction from the first to the second pointer, in degrees.
    pub angle: f64,
}

impl PinchState {
    /// Computes pinch values from pointer positions in screen space.
    ///
    /// Only the first two pointers define the angle and only the first one
    /// the radius; every pointer contributes to the center.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::TooFewPointers`] for fewer than two points.
    pub fn from_points(points: &[Point]) -> Result<Self, GestureError> {
        let [first, second, ..] = points else {
            return Err(GestureError::TooFewPointers {
                count: points.len(),
            });
        };
        let center = centroid(points).ok_or(GestureError::TooFewPointers { count: 0 })?;
        Ok(Self {
            center,
            radius: center.distance(*first),
            angle: angle_degrees(*first, *second),
        })
    }
}
