//! Circle shape.

use super::ShapeTrait;
use crate::geometry::distance;
use crate::transform::MirrorLine;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        let r = self.radius.abs();
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn snap_points(&self) -> Vec<Point> {
        let Point { x, y } = self.center;
        let r = self.radius;
        vec![
            self.center,
            Point::new(x + r, y),
            Point::new(x - r, y),
            Point::new(x, y + r),
            Point::new(x, y - r),
        ]
    }

    // Ring test: only the outline is pickable, interior clicks miss.
    // A zero radius circle is never pickable.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.radius == 0.0 {
            return false;
        }
        (distance(point, self.center) - self.radius).abs() < tolerance
    }

    fn representative_point(&self) -> Option<Point> {
        Some(self.center)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn reflect(&mut self, mirror: &MirrorLine) {
        self.center = mirror.reflect_point(self.center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_ring_not_disk() {
        let circle = Circle::new(Point::new(0.0, 0.0), 50.0);
        assert!(circle.hit_test(Point::new(50.0, 0.0), 5.0));
        assert!(circle.hit_test(Point::new(0.0, -53.0), 5.0));
        assert!(!circle.hit_test(Point::new(0.0, 0.0), 5.0));
        assert!(!circle.hit_test(Point::new(20.0, 0.0), 5.0));
        assert!(!circle.hit_test(Point::new(56.0, 0.0), 5.0));
    }

    #[test]
    fn test_zero_radius_never_hits() {
        let circle = Circle::new(Point::new(0.0, 0.0), 0.0);
        assert!(!circle.hit_test(Point::new(0.0, 0.0), 5.0));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0);
        assert_eq!(circle.bounds(), Rect::new(20.0, 20.0, 80.0, 80.0));
    }

    #[test]
    fn test_translate_moves_center_only() {
        let mut circle = Circle::new(Point::new(1.0, 1.0), 4.0);
        circle.translate(Vec2::new(2.0, 3.0));
        assert_eq!(circle, Circle::new(Point::new(3.0, 4.0), 4.0));
    }
}
