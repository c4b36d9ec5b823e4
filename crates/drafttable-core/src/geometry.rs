//! Geometry kernel: the primitive predicates every other module builds on.

use crate::shapes::Element;
use kurbo::{Point, Rect};

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Closest point on the segment `[a, b]` to `p`.
///
/// A zero-length segment projects everything onto `a`.
pub fn project_onto_segment(p: Point, a: Point, b: Point) -> Point {
    let seg = b - a;
    let len_sq = seg.hypot2();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    a + seg * t
}

/// Candidate object-snap targets of an element, in a fixed per-variant order.
pub fn snap_points(element: &Element) -> Vec<Point> {
    element.shape.snap_points()
}

/// Axis-aligned box spanned by two arbitrary corners.
pub fn normalized_box(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Inclusive containment: points on the boundary count as inside.
///
/// `kurbo::Rect::contains` is half-open, which would drop elements sitting
/// exactly on the right or bottom edge of a selection box.
pub fn rect_contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
