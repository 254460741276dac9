// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small vector helpers shared by the viewport and gesture code.
//!
//! Angles are expressed in degrees throughout, matching the viewport's
//! rotation property.

use kurbo::Point;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Arithmetic mean of a set of points.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    let n = points.len() as f64;
    Some(Point::new(sum.0 / n, sum.1 / n))
}

/// Direction of the segment `from → to` in degrees, in `(-180, 180]`.
///
/// Uses screen conventions: `x` grows to the right and `y` grows downwards,
/// so positive angles turn clockwise on screen.
#[must_use]
pub fn angle_degrees(from: Point, to: Point) -> f64 {
    (to - from).atan2().to_degrees()
}

/// Wraps an angle in degrees into the half-open range `(-180, 180]`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn centroid_of_nothing_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn centroid_averages_points() {
        let c = centroid(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert_eq!(c, Point::new(5.0, 5.0));
    }

    #[test]
    fn angle_follows_screen_axes() {
        let o = Point::ORIGIN;
        assert!((angle_degrees(o, Point::new(1.0, 0.0))).abs() < 1e-12);
        assert!((angle_degrees(o, Point::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((angle_degrees(o, Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(720.0 + 45.0), 45.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
    }
}
