//! Drawing assistant replies and how they change the element list.
//!
//! The assistant is an external producer; this module only decodes its JSON
//! replies and turns them into [`Edit`]s. Supplied elements get fresh ids and
//! the assistant's styling, like locally drawn ones get theirs.

use crate::ids::IdSource;
use crate::interaction::Edit;
use crate::shapes::{Circle, Element, Line, Rectangle, SerializableColor, Shape};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layer assigned to assistant-supplied elements.
pub const ASSISTANT_LAYER: &str = "AI_GENERATED";

/// Message shown when a reply cannot be used.
pub const FALLBACK_MESSAGE: &str = "I encountered an error processing that request.";

/// Errors decoding an assistant reply.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid reply JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Empty reply")]
    Empty,
}

/// Result type for assistant operations.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// What the assistant asks the drawing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssistantOperation {
    Add,
    Clear,
    DeleteLast,
    #[default]
    None,
}

/// A point whose coordinates may each be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecPoint {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl SpecPoint {
    pub fn to_point(self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }
}

/// A loosely specified element as the assistant writes it.
///
/// Every field is optional at decode time so one malformed entry cannot
/// sink the rest of the reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub start: Option<SpecPoint>,
    #[serde(default)]
    pub end: Option<SpecPoint>,
    #[serde(default)]
    pub center: Option<SpecPoint>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl ElementSpec {
    /// The geometry this entry describes, or `None` when its type is unknown
    /// or a field the type needs is missing.
    pub fn to_shape(&self) -> Option<Shape> {
        let point = |p: Option<SpecPoint>| p.and_then(SpecPoint::to_point);
        match self.kind.as_str() {
            "LINE" => Some(Shape::Line(Line::new(point(self.start)?, point(self.end)?))),
            "CIRCLE" => Some(Shape::Circle(Circle::new(point(self.center)?, self.radius?))),
            "RECTANGLE" => Some(Shape::Rectangle(Rectangle::new(point(self.start)?, self.width?, self.height?))),
            _ => None,
        }
    }
}

/// A decoded assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub operation: AssistantOperation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ElementSpec>>,
}

impl AssistantReply {
    /// The reply used in place of anything that failed.
    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_MESSAGE.to_string(),
            operation: AssistantOperation::None,
            elements: None,
        }
    }

    pub fn from_json(json: &str) -> AssistantResult<Self> {
        if json.trim().is_empty() {
            return Err(AssistantError::Empty);
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a reply, reducing any failure to [`AssistantReply::fallback`].
    pub fn from_json_or_fallback(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("assistant reply rejected: {e}");
            Self::fallback()
        })
    }

    /// Supplied elements as ready-to-insert elements with fresh ids.
    pub fn materialize(&self, ids: &mut dyn IdSource) -> Vec<Element> {
        let Some(specs) = &self.elements else {
            return Vec::new();
        };
        specs
            .iter()
            .filter_map(|spec| {
                let shape = spec.to_shape();
                if shape.is_none() {
                    log::debug!("dropping incomplete assistant element of type {:?}", spec.kind);
                }
                shape
            })
            .map(|shape| {
                Element::new(ids.next_id(), shape)
                    .with_layer(ASSISTANT_LAYER)
                    .with_color(SerializableColor::assistant())
            })
            .collect()
    }

    /// The edit this reply makes to `elements`, if any.
    pub fn to_edit(&self, elements: &[Element], ids: &mut dyn IdSource) -> Option<Edit> {
        match self.operation {
            AssistantOperation::Add => {
                let added = self.materialize(ids);
                (!added.is_empty()).then_some(Edit::Append(added))
            }
            AssistantOperation::Clear => Some(Edit::Replace(Vec::new())),
            AssistantOperation::DeleteLast => {
                let (_, rest) = elements.split_last()?;
                Some(Edit::Replace(rest.to_vec()))
            }
            AssistantOperation::None => None,
        }
    }
}
