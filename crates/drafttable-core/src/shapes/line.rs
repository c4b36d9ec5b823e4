//! Line shape.

use super::ShapeTrait;
use crate::geometry::{distance, normalized_box, project_onto_segment};
use crate::transform::MirrorLine;
use kurbo::{BezPath, Line as KurboLine, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn bounds(&self) -> Rect {
        normalized_box(self.start, self.end)
    }

    fn snap_points(&self) -> Vec<Point> {
        vec![self.start, self.end, self.midpoint()]
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let projection = project_onto_segment(point, self.start, self.end);
        distance(point, projection) < tolerance
    }

    fn representative_point(&self) -> Option<Point> {
        Some(self.start)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn reflect(&mut self, mirror: &MirrorLine) {
        self.start = mirror.reflect_point(self.start);
        self.end = mirror.reflect_point(self.end);
    }
}
