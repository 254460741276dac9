// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, ParamCurveNearest, Point, Rect, Shape};

/// Accuracy passed to Kurbo's nearest-point queries, in world units.
const NEAREST_ACCURACY: f64 = 1e-9;

/// World-space geometry of a feature.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single position, drawn as a symbol.
    Point(Point),
    /// An open path, drawn as a stroke.
    Line(BezPath),
    /// A closed area, drawn filled with an outline.
    Polygon(BezPath),
    /// An axis-aligned box.
    Rect(Rect),
}

impl Geometry {
    /// Builds a line through `points`. Fewer than two points give an empty path.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Line(path_through(points, false))
    }

    /// Builds a closed polygon through `points`.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Polygon(path_through(points, true))
    }

    /// World-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Point(p) => Rect::from_points(*p, *p),
            Self::Line(path) | Self::Polygon(path) => path.bounding_box(),
            Self::Rect(rect) => rect.abs(),
        }
    }

    /// Returns `true` if `pt` lies inside an area geometry.
    ///
    /// Points and lines have no interior and always return `false`.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Point(_) | Self::Line(_) => false,
            Self::Polygon(path) => path.contains(pt),
            Self::Rect(rect) => rect.abs().contains(pt),
        }
    }

    /// Distance from `pt` to the outline (or the position, for a point).
    ///
    /// Returns `None` for an empty path.
    #[must_use]
    pub fn outline_distance(&self, pt: Point) -> Option<f64> {
        match self {
            Self::Point(p) => Some(p.distance(pt)),
            Self::Line(path) | Self::Polygon(path) => nearest_on_path(path, pt),
            Self::Rect(rect) => nearest_on_path(&rect.abs().to_path(NEAREST_ACCURACY), pt),
        }
    }
}

fn path_through(points: impl IntoIterator<Item = Point>, close: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return path;
    };
    path.move_to(first);
    for p in points {
        path.line_to(p);
    }
    if close {
        path.close_path();
    }
    path
}

fn nearest_on_path(path: &BezPath, pt: Point) -> Option<f64> {
    path.segments()
        .map(|seg| seg.nearest(pt, NEAREST_ACCURACY).distance_sq)
        .reduce(f64::min)
        .map(|d| d.sqrt())
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::Geometry;

    fn square() -> Geometry {
        Geometry::polygon([
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn polygon_contains_and_bounds() {
        let sq = square();
        assert!(sq.contains(Point::new(5.0, 5.0)));
        assert!(!sq.contains(Point::new(15.0, 5.0)));
        assert_eq!(sq.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn polygon_outline_distance_includes_closing_edge() {
        let sq = square();
        let d = sq.outline_distance(Point::new(-3.0, 5.0)).unwrap();
        assert!((d - 3.0).abs() < 1e-9);
    }

    #[test]
    fn line_distance_and_no_interior() {
        let line = Geometry::polyline([Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(!line.contains(Point::new(5.0, 0.0)));
        let d = line.outline_distance(Point::new(5.0, 2.0)).unwrap();
        assert!((d - 2.0).abs() < 1e-9);
    }

    #[test]
    fn point_geometry() {
        let p = Geometry::Point(Point::new(3.0, 4.0));
        assert_eq!(p.outline_distance(Point::ORIGIN), Some(5.0));
        assert_eq!(p.bounds(), Rect::new(3.0, 4.0, 3.0, 4.0));
    }

    #[test]
    fn empty_line_has_no_distance() {
        let line = Geometry::polyline(core::iter::empty::<Point>());
        assert_eq!(line.outline_distance(Point::ORIGIN), None);
    }

    #[test]
    fn flipped_rect_is_normalized() {
        let r = Geometry::Rect(Rect::new(10.0, 10.0, 0.0, 0.0));
        assert!(r.contains(Point::new(5.0, 5.0)));
        let d = r.outline_distance(Point::new(5.0, 12.0)).unwrap();
        assert!((d - 2.0).abs() < 1e-9);
    }
}
