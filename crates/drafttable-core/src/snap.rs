//! Constraint resolution: grid snap, object snap and the ortho lock.
//!
//! The stages run in a fixed order. Grid snap goes first so object snap can
//! override it, and ortho goes last so the axis lock always wins.

use crate::geometry::distance;
use crate::shapes::Element;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Grid spacing in plane units.
pub const GRID_SIZE: f64 = 10.0;

/// Object snap only engages strictly inside this distance.
pub const OBJECT_SNAP_THRESHOLD: f64 = 15.0;

/// Which drafting aids are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftingAids {
    /// Round to the grid.
    pub grid: bool,
    /// Snap to endpoints, midpoints, corners and circle quadrants.
    pub object_snap: bool,
    /// Lock to the dominant axis relative to the gesture anchor.
    pub ortho: bool,
}

impl Default for DraftingAids {
    fn default() -> Self {
        Self {
            grid: true,
            object_snap: true,
            ortho: false,
        }
    }
}

impl DraftingAids {
    /// All aids off.
    pub fn none() -> Self {
        Self {
            grid: false,
            object_snap: false,
            ortho: false,
        }
    }

    pub fn toggle_grid(&mut self) {
        self.grid = !self.grid;
    }

    pub fn toggle_object_snap(&mut self) {
        self.object_snap = !self.object_snap;
    }

    pub fn toggle_ortho(&mut self) {
        self.ortho = !self.ortho;
    }
}

/// Result of resolving a raw point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The constrained point.
    pub point: Point,
    /// The object-snap target that was hit, for the snap indicator.
    pub snap_hit: Option<Point>,
}

impl SnapResult {
    /// A result that leaves the point untouched.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snap_hit: None,
        }
    }
}

/// Round each axis to the nearest multiple of `grid_size`.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Nearest snap target strictly within `threshold` of `point`.
///
/// Running-minimum scan in element order; on equal distance the earlier
/// candidate stays.
pub fn nearest_snap_target(point: Point, elements: &[Element], threshold: f64) -> Option<Point> {
    let mut best_dist = threshold;
    let mut best = None;
    for target in elements.iter().flat_map(|el| el.shape.snap_points()) {
        let d = distance(point, target);
        if d < best_dist {
            best_dist = d;
            best = Some(target);
        }
    }
    best
}

/// Lock `point` to the axis through `anchor` along which it moved more.
pub fn apply_ortho(point: Point, anchor: Point) -> Point {
    let dx = (point.x - anchor.x).abs();
    let dy = (point.y - anchor.y).abs();
    if dx > dy {
        Point::new(point.x, anchor.y)
    } else {
        Point::new(anchor.x, point.y)
    }
}

/// Run the full grid → object snap → ortho cascade on a raw point.
pub fn resolve(raw: Point, elements: &[Element], anchor: Option<Point>, aids: DraftingAids) -> SnapResult {
    let mut result = SnapResult::none(raw);

    if aids.grid {
        result.point = snap_to_grid(raw, GRID_SIZE);
    }

    // Measured against the raw point, not the grid-rounded one.
    if aids.object_snap {
        if let Some(target) = nearest_snap_target(raw, elements, OBJECT_SNAP_THRESHOLD) {
            result.point = target;
            result.snap_hit = Some(target);
        }
    }

    if aids.ortho {
        if let Some(anchor) = anchor {
            result.point = apply_ortho(result.point, anchor);
        }
    }

    log::trace!("resolved {raw:?} -> {:?} (snap hit {:?})", result.point, result.snap_hit);
    result
}
