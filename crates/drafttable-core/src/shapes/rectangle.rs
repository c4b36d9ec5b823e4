//! Rectangle shape.

use super::ShapeTrait;
use crate::geometry::rect_contains_inclusive;
use crate::transform::MirrorLine;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at `start` with signed extents.
///
/// Negative `width`/`height` extend left/up from `start`; the actual box is
/// [`Rectangle::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner (the first point of the drag that drew it).
    pub start: Point,
    /// Signed horizontal extent.
    pub width: f64,
    /// Signed vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(start: Point, width: f64, height: f64) -> Self {
        Self { start, width, height }
    }

    /// Create a rectangle spanning from `start` to the opposite corner `end`.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start, end.x - start.x, end.y - start.y)
    }

    /// Bounding box with non-negative extents.
    pub fn normalized(&self) -> Rect {
        let x = self.start.x.min(self.start.x + self.width);
        let y = self.start.y.min(self.start.y + self.height);
        Rect::new(x, y, x + self.width.abs(), y + self.height.abs())
    }

    /// Corners walked from `start` in drawing order.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.start;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.normalized()
    }

    fn snap_points(&self) -> Vec<Point> {
        self.corners().to_vec()
    }

    // Interior test, the outline tolerance does not apply.
    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        rect_contains_inclusive(self.normalized(), point)
    }

    fn representative_point(&self) -> Option<Point> {
        Some(self.start)
    }

    fn to_path(&self) -> BezPath {
        self.normalized().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
    }

    // Only the anchor is reflected; width and height keep their signs, so a
    // mirrored rectangle is an approximation unless the mirror line is
    // axis-aligned and the extents happen to line up.
    fn reflect(&mut self, mirror: &MirrorLine) {
        self.start = mirror.reflect_point(self.start);
    }
}
