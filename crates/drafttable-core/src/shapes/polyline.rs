//! Polyline shape (reserved, not produced by any tool yet).

use super::ShapeTrait;
use crate::transform::MirrorLine;
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An open sequence of vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl ShapeTrait for Polyline {
    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    fn snap_points(&self) -> Vec<Point> {
        Vec::new()
    }

    fn hit_test(&self, _point: Point, _tolerance: f64) -> bool {
        false
    }

    fn representative_point(&self) -> Option<Point> {
        None
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for p in points {
                path.line_to(*p);
            }
        }
        path
    }

    fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    fn reflect(&mut self, mirror: &MirrorLine) {
        for p in &mut self.points {
            *p = mirror.reflect_point(*p);
        }
    }
}
