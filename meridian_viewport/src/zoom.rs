// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete zoom steps over a list of available resolutions.
//!
//! Both helpers expect `resolutions` sorted from largest to smallest, as
//! returned by [`crate::ViewportLimiter::resolutions`]. Without a usable
//! neighbor they fall back to halving or doubling the resolution.

/// Next zoom level in: the largest available resolution that is smaller than
/// `resolution`, or half of `resolution`.
#[must_use]
pub fn zoom_in(resolutions: &[f64], resolution: f64) -> f64 {
    resolutions
        .iter()
        .copied()
        .find(|r| *r < resolution * (1.0 - STEP_EPSILON))
        .unwrap_or(resolution * 0.5)
}

/// Next zoom level out: the smallest available resolution that is larger
/// than `resolution`, or double `resolution`.
#[must_use]
pub fn zoom_out(resolutions: &[f64], resolution: f64) -> f64 {
    resolutions
        .iter()
        .rev()
        .copied()
        .find(|r| *r > resolution * (1.0 + STEP_EPSILON))
        .unwrap_or(resolution * 2.0)
}

/// Relative slack so that a resolution a hair off a level is treated as that level.
const STEP_EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::{zoom_in, zoom_out};

    const LEVELS: [f64; 4] = [8.0, 4.0, 2.0, 1.0];

    #[test]
    fn steps_between_levels() {
        assert_eq!(zoom_in(&LEVELS, 4.0), 2.0);
        assert_eq!(zoom_in(&LEVELS, 3.0), 2.0);
        assert_eq!(zoom_out(&LEVELS, 4.0), 8.0);
        assert_eq!(zoom_out(&LEVELS, 3.0), 4.0);
    }

    #[test]
    fn nearly_equal_counts_as_the_level() {
        assert_eq!(zoom_in(&LEVELS, 4.000_000_000_001), 2.0);
        assert_eq!(zoom_out(&LEVELS, 3.999_999_999_999), 8.0);
    }

    #[test]
    fn falls_back_outside_levels() {
        assert_eq!(zoom_in(&LEVELS, 1.0), 0.5);
        assert_eq!(zoom_out(&LEVELS, 8.0), 16.0);
        assert_eq!(zoom_in(&[], 10.0), 5.0);
        assert_eq!(zoom_out(&[], 10.0), 20.0);
    }
}
