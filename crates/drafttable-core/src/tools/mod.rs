//! Tool palette and shape construction for the drawing tools.

use crate::geometry::distance;
use crate::shapes::{Circle, Line, Rectangle, Shape};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A draw gesture shorter than this commits nothing.
pub const MIN_DRAW_DISTANCE: f64 = 2.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Circle,
    Rectangle,
    Text,
    Polyline,
    Arc,
    Hatch,
    Trim,
    Mirror,
    Rotate,
    Dimension,
    Measure,
}

impl ToolKind {
    pub const ALL: [ToolKind; 13] = [
        ToolKind::Select,
        ToolKind::Line,
        ToolKind::Circle,
        ToolKind::Rectangle,
        ToolKind::Text,
        ToolKind::Polyline,
        ToolKind::Arc,
        ToolKind::Hatch,
        ToolKind::Trim,
        ToolKind::Mirror,
        ToolKind::Rotate,
        ToolKind::Dimension,
        ToolKind::Measure,
    ];

    /// Whether a press with this tool opens a draw gesture.
    pub fn opens_draw_session(self) -> bool {
        !matches!(self, ToolKind::Select | ToolKind::Trim | ToolKind::Mirror)
    }

    /// Whether committing a draw gesture with this tool produces geometry.
    pub fn constructs_geometry(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Circle | ToolKind::Rectangle)
    }

    /// Display name for tool palettes and command lines.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Line => "Line",
            ToolKind::Circle => "Circle",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Text => "Text",
            ToolKind::Polyline => "Polyline",
            ToolKind::Arc => "Arc",
            ToolKind::Hatch => "Hatch",
            ToolKind::Trim => "Trim",
            ToolKind::Mirror => "Mirror",
            ToolKind::Rotate => "Rotate",
            ToolKind::Dimension => "Dimension",
            ToolKind::Measure => "Measure",
        }
    }
}

/// Geometry a drawing tool builds from a drag between `anchor` and `point`.
///
/// Returns `None` for tools without geometry. The length threshold is the
/// caller's concern, so this also serves live previews.
pub fn create_shape(tool: ToolKind, anchor: Point, point: Point) -> Option<Shape> {
    match tool {
        ToolKind::Line => Some(Shape::Line(Line::new(anchor, point))),
        ToolKind::Rectangle => Some(Shape::Rectangle(Rectangle::from_corners(anchor, point))),
        ToolKind::Circle => Some(Shape::Circle(Circle::new(anchor, distance(anchor, point)))),
        _ => None,
    }
}

/// Whether a drag from `anchor` to `point` is long enough to commit.
pub fn exceeds_draw_threshold(anchor: Point, point: Point) -> bool {
    distance(anchor, point) > MIN_DRAW_DISTANCE
}
