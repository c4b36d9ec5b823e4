//! Hit testing: picking the element under a point and box selection.

use crate::geometry::{normalized_box, rect_contains_inclusive};
use crate::shapes::{Element, ElementId};
use kurbo::{Point, Rect};
use std::collections::HashSet;

/// Pick distance for outline hits, in plane units.
pub const HIT_TOLERANCE: f64 = 5.0;

/// The topmost element under `point`, searching from the end of the list.
pub fn pick_topmost(point: Point, elements: &[Element]) -> Option<&Element> {
    elements
        .iter()
        .rev()
        .find(|el| el.shape.hit_test(point, HIT_TOLERANCE))
}

/// Ids of every element whose representative point lies in the box spanned by
/// `corner_a` and `corner_b`, boundary included.
pub fn box_contains(elements: &[Element], corner_a: Point, corner_b: Point) -> HashSet<ElementId> {
    let rect = normalized_box(corner_a, corner_b);
    elements
        .iter()
        .filter(|el| {
            el.shape
                .representative_point()
                .is_some_and(|p| rect_contains_inclusive(rect, p))
        })
        .map(|el| el.id.clone())
        .collect()
}

/// Ids of the currently selected elements, in document order.
pub fn selected_ids(elements: &[Element]) -> Vec<ElementId> {
    elements
        .iter()
        .filter(|el| el.selected)
        .map(|el| el.id.clone())
        .collect()
}

/// Rubber-band rectangle for an in-progress box selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub anchor: Point,
    pub cursor: Point,
}

impl SelectionBox {
    pub fn new(anchor: Point, cursor: Point) -> Self {
        Self { anchor, cursor }
    }

    /// The box with non-negative extents.
    pub fn rect(&self) -> Rect {
        normalized_box(self.anchor, self.cursor)
    }
}

/// Which elements end up selected after a pick or a box capture.
///
/// Without `additive` the previous selection is discarded; with it the
/// captured ids are unioned into it.
pub fn apply_selection(elements: &[Element], captured: &HashSet<ElementId>, additive: bool) -> Vec<Element> {
    elements
        .iter()
        .map(|el| {
            let hit = captured.contains(&el.id);
            let selected = if additive { el.selected || hit } else { hit };
            el.clone().with_selected(selected)
        })
        .collect()
}

/// Every element deselected.
pub fn clear_selection(elements: &[Element]) -> Vec<Element> {
    elements.iter().map(|el| el.clone().with_selected(false)).collect()
}
