//! Element and shape definitions for the drafting surface.

mod circle;
mod line;
mod polyline;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::transform::MirrorLine;
use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Unique identifier for elements. Stable for the element's lifetime.
pub type ElementId = String;

/// Layer every locally drawn or imported element lands on.
pub const DEFAULT_LAYER: &str = "0";

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Stroke color for drawn and imported elements (`#e6edf3`).
    pub const fn default_stroke() -> Self {
        Self::rgb(0xe6, 0xed, 0xf3)
    }

    /// Stroke color for assistant-generated elements (`#137fec`).
    pub const fn assistant() -> Self {
        Self::rgb(0x13, 0x7f, 0xec)
    }

    /// Stroke color of the starter frame (`#8b949e`).
    pub const fn frame() -> Self {
        Self::rgb(0x8b, 0x94, 0x9e)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, appending alpha only when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::default_stroke()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Common trait for all shape geometries.
pub trait ShapeTrait {
    /// Axis-aligned bounding box in plane coordinates.
    fn bounds(&self) -> Rect;

    /// Object-snap candidates, in a deterministic order.
    fn snap_points(&self) -> Vec<Point>;

    /// Check if a point hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// The single point used for box selection, if the shape has one.
    fn representative_point(&self) -> Option<Point>;

    /// Path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Offset every point field.
    fn translate(&mut self, delta: Vec2);

    /// Reflect point fields across a mirror line.
    fn reflect(&mut self, mirror: &MirrorLine);
}

/// Geometry of an element. Each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    /// Reserved; never produced by drawing or import.
    #[serde(rename = "LWPOLYLINE")]
    Polyline(Polyline),
}

impl Shape {
    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Circle(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Polyline(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Circle(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Polyline(s) => s,
        }
    }

    /// Interchange-style type name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "LINE",
            Shape::Circle(_) => "CIRCLE",
            Shape::Rectangle(_) => "RECTANGLE",
            Shape::Polyline(_) => "LWPOLYLINE",
        }
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn snap_points(&self) -> Vec<Point> {
        self.as_trait().snap_points()
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_trait().hit_test(point, tolerance)
    }

    pub fn representative_point(&self) -> Option<Point> {
        self.as_trait().representative_point()
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.as_trait_mut().translate(delta);
    }

    pub fn reflect(&mut self, mirror: &MirrorLine) {
        self.as_trait_mut().reflect(mirror);
    }
}

/// A drawn element: geometry plus shared metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub layer: String,
    pub color: SerializableColor,
    /// Transient selection flag.
    #[serde(default)]
    pub selected: bool,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Element {
    /// Create an unselected element on the default layer with the default stroke.
    pub fn new(id: ElementId, shape: Shape) -> Self {
        Self {
            id,
            layer: DEFAULT_LAYER.to_string(),
            color: SerializableColor::default_stroke(),
            selected: false,
            shape,
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn with_color(mut self, color: SerializableColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Copy of this element offset by `delta`; id and metadata unchanged.
    pub fn translated(&self, delta: Vec2) -> Self {
        let mut moved = self.clone();
        moved.shape.translate(delta);
        moved
    }
}
