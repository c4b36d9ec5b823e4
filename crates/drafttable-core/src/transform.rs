//! Transform operators: translating the selection and mirroring it across a line.

use crate::geometry::distance;
use crate::ids::IdSource;
use crate::shapes::Element;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mirror lines at or below this length are degenerate and produce nothing.
pub const MIRROR_MIN_LENGTH: f64 = 5.0;

/// A mirror line in implicit form `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl MirrorLine {
    /// Line through two points, or `None` when the points are closer than
    /// [`MIRROR_MIN_LENGTH`].
    pub fn through(p: Point, q: Point) -> Option<Self> {
        if distance(p, q) <= MIRROR_MIN_LENGTH {
            return None;
        }
        Some(Self::from_points_unchecked(p, q))
    }

    /// Implicit line through two distinct points, without the length guard.
    pub fn from_points_unchecked(p: Point, q: Point) -> Self {
        let a = q.y - p.y;
        let b = p.x - q.x;
        let c = -a * p.x - b * p.y;
        Self { a, b, c }
    }

    /// Reflect a single point across the line.
    pub fn reflect_point(&self, p: Point) -> Point {
        let d = (self.a * p.x + self.b * p.y + self.c) / (self.a * self.a + self.b * self.b);
        Point::new(p.x - 2.0 * self.a * d, p.y - 2.0 * self.b * d)
    }
}

/// Apply `delta` to every selected element; unselected elements pass through.
pub fn translate(elements: &[Element], delta: Vec2) -> Vec<Element> {
    elements
        .iter()
        .map(|el| if el.selected { el.translated(delta) } else { el.clone() })
        .collect()
}

/// The selected elements only, each offset by `delta`. Suitable for a bulk update.
pub fn translate_selected(elements: &[Element], delta: Vec2) -> Vec<Element> {
    elements
        .iter()
        .filter(|el| el.selected)
        .map(|el| el.translated(delta))
        .collect()
}

/// Zero out whichever axis moved less. Ties keep the horizontal component at zero.
pub fn ortho_delta(delta: Vec2) -> Vec2 {
    if delta.x.abs() > delta.y.abs() {
        Vec2::new(delta.x, 0.0)
    } else {
        Vec2::new(0.0, delta.y)
    }
}

/// Mirrored copies of every selected element across the line through `p`, `q`.
///
/// Copies get fresh ids and come back selected. A degenerate mirror line
/// yields no copies.
pub fn reflect(elements: &[Element], p: Point, q: Point, ids: &mut dyn IdSource) -> Vec<Element> {
    let Some(mirror) = MirrorLine::through(p, q) else {
        log::debug!("mirror line ({p:?} -> {q:?}) too short, nothing reflected");
        return Vec::new();
    };
    elements
        .iter()
        .filter(|el| el.selected)
        .map(|el| {
            let mut copy = el.clone();
            copy.id = ids.next_id();
            copy.selected = true;
            copy.shape.reflect(&mirror);
            copy
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::shapes::{Circle, Line, Rectangle, Shape};

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn line(id: &str, a: (f64, f64), b: (f64, f64), selected: bool) -> Element {
        Element::new(id.into(), Shape::Line(Line::new(a.into(), b.into()))).with_selected(selected)
    }

    #[test]
    fn test_mirror_guard() {
        assert!(MirrorLine::through(Point::new(0.0, 0.0), Point::new(5.0, 0.0)).is_none());
        assert!(MirrorLine::through(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).is_none());
        assert!(MirrorLine::through(Point::new(0.0, 0.0), Point::new(5.1, 0.0)).is_some());
    }

    #[test]
    fn test_reflect_point_is_involution() {
        let mirror = MirrorLine::through(Point::new(-3.0, 7.0), Point::new(41.0, 19.5)).unwrap();
        for p in [Point::new(0.0, 0.0), Point::new(123.4, -56.7), Point::new(-8.0, 1e3)] {
            let twice = mirror.reflect_point(mirror.reflect_point(p));
            assert!(approx(twice, p), "{p:?} -> {twice:?}");
        }
    }

    #[test]
    fn test_reflect_point_diagonal() {
        let mirror = MirrorLine::through(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        assert!(approx(mirror.reflect_point(Point::new(3.0, 1.0)), Point::new(1.0, 3.0)));
    }

    #[test]
    fn test_translate_only_selected() {
        let elements = vec![line("a", (0.0, 0.0), (10.0, 0.0), true), line("b", (0.0, 5.0), (10.0, 5.0), false)];
        let moved = translate(&elements, Vec2::new(3.0, 4.0));
        assert_eq!(moved[0].shape, Shape::Line(Line::new(Point::new(3.0, 4.0), Point::new(13.0, 4.0))));
        assert_eq!(moved[1], elements[1]);
    }

    #[test]
    fn test_translate_composes() {
        let elements = vec![
            line("a", (1.0, 2.0), (3.0, 4.0), true),
            Element::new("c".into(), Shape::Circle(Circle::new(Point::new(5.0, 5.0), 2.0))).with_selected(true),
            Element::new("r".into(), Shape::Rectangle(Rectangle::new(Point::new(-1.0, 0.0), 4.0, -2.0))).with_selected(true),
        ];
        let d1 = Vec2::new(2.5, -1.0);
        let d2 = Vec2::new(-7.0, 3.25);
        let stepwise = translate(&translate(&elements, d1), d2);
        let once = translate(&elements, d1 + d2);
        assert_eq!(stepwise, once);
    }

    #[test]
    fn test_translate_selected_returns_moved_subset() {
        let elements = vec![line("a", (0.0, 0.0), (10.0, 0.0), false), line("b", (0.0, 5.0), (10.0, 5.0), true)];
        let moved = translate_selected(&elements, Vec2::new(1.0, 1.0));
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].id, "b");
    }

    #[test]
    fn test_ortho_delta() {
        assert_eq!(ortho_delta(Vec2::new(10.0, 3.0)), Vec2::new(10.0, 0.0));
        assert_eq!(ortho_delta(Vec2::new(-2.0, 9.0)), Vec2::new(0.0, 9.0));
        assert_eq!(ortho_delta(Vec2::new(4.0, -4.0)), Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_reflect_line_across_y_axis() {
        let elements = vec![line("a", (10.0, 20.0), (30.0, 40.0), true)];
        let mut ids = SequentialIds::new("m");
        let copies = reflect(&elements, Point::new(0.0, 0.0), Point::new(0.0, 100.0), &mut ids);
        assert_eq!(copies.len(), 1);
        let copy = &copies[0];
        assert_eq!(copy.id, "m-1");
        assert!(copy.selected);
        let Shape::Line(l) = copy.shape else { panic!("expected a line") };
        assert!(approx(l.start, Point::new(-10.0, 20.0)));
        assert!(approx(l.end, Point::new(-30.0, 40.0)));
    }

    #[test]
    fn test_reflect_skips_unselected_and_degenerate() {
        let elements = vec![line("a", (10.0, 20.0), (30.0, 40.0), false)];
        let mut ids = SequentialIds::new("m");
        assert!(reflect(&elements, Point::new(0.0, 0.0), Point::new(0.0, 100.0), &mut ids).is_empty());

        let selected = vec![line("a", (10.0, 20.0), (30.0, 40.0), true)];
        assert!(reflect(&selected, Point::new(0.0, 0.0), Point::new(0.0, 5.0), &mut ids).is_empty());
    }

    #[test]
    fn test_reflect_rectangle_keeps_extents() {
        let elements = vec![
            Element::new("r".into(), Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 20.0, 10.0))).with_selected(true),
        ];
        let mut ids = SequentialIds::new("m");
        let copies = reflect(&elements, Point::new(0.0, 0.0), Point::new(100.0, 100.0), &mut ids);
        let Shape::Rectangle(r) = copies[0].shape else { panic!("expected a rectangle") };
        assert!(approx(r.start, Point::new(0.0, 0.0)));
        assert!((r.width - 20.0).abs() < f64::EPSILON);
        assert!((r.height - 10.0).abs() < f64::EPSILON);
    }
}
