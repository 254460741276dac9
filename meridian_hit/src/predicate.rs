// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::geometry::Geometry;
use crate::layer::Feature;
use crate::style::Style;

/// Decides whether a world position touches a feature as drawn.
pub trait TouchPredicate {
    /// Returns `true` if `world` touches `feature`.
    ///
    /// `layer_style` applies when the feature has no styles of its own and
    /// `resolution` converts screen-pixel sizes into world units.
    fn is_touching(
        &self,
        world: Point,
        feature: &dyn Feature,
        layer_style: Option<&Style>,
        resolution: f64,
    ) -> bool;
}

/// Hit test that accounts for symbol sizes and stroke widths.
///
/// A point feature is hit within its symbol radius, a line within half its
/// stroke width, and an area inside its outline or on the stroke. Every
/// distance is widened by [`SymbolAwarePredicate::tolerance`] pixels. A
/// feature is only hit through styles that are enabled and visible at the
/// current resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolAwarePredicate {
    /// Extra slack around every shape, in screen pixels.
    pub tolerance: f64,
}

impl Default for SymbolAwarePredicate {
    fn default() -> Self {
        Self { tolerance: 2.0 }
    }
}

impl SymbolAwarePredicate {
    /// Tests one style against one geometry.
    #[must_use]
    pub fn touches_with_style(
        &self,
        world: Point,
        geometry: &Geometry,
        style: &Style,
        resolution: f64,
    ) -> bool {
        if !style.is_visible_at(resolution) {
            return false;
        }
        let reach = match geometry {
            Geometry::Point(_) => style.symbol_radius,
            Geometry::Line(_) | Geometry::Polygon(_) | Geometry::Rect(_) => {
                style.stroke_width * 0.5
            }
        };
        let reach = (reach + self.tolerance).max(0.0) * resolution;
        geometry.contains(world)
            || geometry
                .outline_distance(world)
                .is_some_and(|d| d <= reach)
    }
}

impl TouchPredicate for SymbolAwarePredicate {
    fn is_touching(
        &self,
        world: Point,
        feature: &dyn Feature,
        layer_style: Option<&Style>,
        resolution: f64,
    ) -> bool {
        let geometry = feature.geometry();
        let styles = feature.styles();
        if styles.is_empty() {
            layer_style
                .is_some_and(|style| self.touches_with_style(world, geometry, style, resolution))
        } else {
            styles
                .iter()
                .any(|style| self.touches_with_style(world, geometry, style, resolution))
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{SymbolAwarePredicate, TouchPredicate};
    use crate::geometry::Geometry;
    use crate::layer::{FeatureId, MemoryFeature};
    use crate::style::Style;

    fn predicate() -> SymbolAwarePredicate {
        SymbolAwarePredicate { tolerance: 0.0 }
    }

    #[test]
    fn point_symbol_radius_scales_with_resolution() {
        let feature = MemoryFeature::new(FeatureId(1), Geometry::Point(Point::ORIGIN));
        let style = Style::default().with_symbol_radius(10.0);
        // 10px at 2 world units per pixel reaches 20 world units.
        assert!(predicate().is_touching(Point::new(19.0, 0.0), &feature, Some(&style), 2.0));
        assert!(!predicate().is_touching(Point::new(21.0, 0.0), &feature, Some(&style), 2.0));
    }

    #[test]
    fn feature_styles_override_layer_style() {
        let feature = MemoryFeature::new(FeatureId(1), Geometry::Point(Point::ORIGIN))
            .with_style(Style::default().with_symbol_radius(1.0));
        let layer_style = Style::default().with_symbol_radius(50.0);
        assert!(!predicate().is_touching(Point::new(5.0, 0.0), &feature, Some(&layer_style), 1.0));
    }

    #[test]
    fn no_style_means_no_hit() {
        let feature = MemoryFeature::new(FeatureId(1), Geometry::Point(Point::ORIGIN));
        assert!(!predicate().is_touching(Point::ORIGIN, &feature, None, 1.0));
    }

    #[test]
    fn invisible_style_never_hits() {
        let feature = MemoryFeature::new(FeatureId(1), Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)))
            .with_style(Style::default().with_visible_range(0.0, 1.0));
        assert!(predicate().is_touching(Point::new(5.0, 5.0), &feature, None, 1.0));
        assert!(!predicate().is_touching(Point::new(5.0, 5.0), &feature, None, 2.0));
    }

    #[test]
    fn line_hit_within_half_stroke() {
        let feature = MemoryFeature::new(
            FeatureId(1),
            Geometry::polyline([Point::new(0.0, 0.0), Point::new(100.0, 0.0)]),
        )
        .with_style(Style::default().with_stroke_width(6.0));
        assert!(predicate().is_touching(Point::new(50.0, 2.5), &feature, None, 1.0));
        assert!(!predicate().is_touching(Point::new(50.0, 3.5), &feature, None, 1.0));
    }

    #[test]
    fn tolerance_widens_the_reach() {
        let feature = MemoryFeature::new(FeatureId(1), Geometry::Point(Point::ORIGIN))
            .with_style(Style::default().with_symbol_radius(4.0));
        let loose = SymbolAwarePredicate { tolerance: 2.0 };
        assert!(loose.is_touching(Point::new(5.5, 0.0), &feature, None, 1.0));
        assert!(!predicate().is_touching(Point::new(5.5, 0.0), &feature, None, 1.0));
    }
}
