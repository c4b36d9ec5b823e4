//! Interchange import: a forward-only scan that never fails.

use super::{FALLBACK_LAYER, FALLBACK_RADIUS};
use crate::ids::{IdSource, RandomIds};
use crate::shapes::{Circle, Element, Line, Shape};
use kurbo::Point;

/// One group code and the value line after it, both trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePair<'a> {
    pub code: &'a str,
    pub value: &'a str,
}

/// Split text into code/value pairs. A trailing code without a value is dropped.
pub fn read_pairs(text: &str) -> impl Iterator<Item = CodePair<'_>> {
    let mut lines = text.lines().map(str::trim);
    std::iter::from_fn(move || {
        let code = lines.next()?;
        let value = lines.next()?;
        Some(CodePair { code, value })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityKind {
    Line,
    Circle,
    Polyline,
}

impl EntityKind {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "LINE" => Some(Self::Line),
            "CIRCLE" => Some(Self::Circle),
            "LWPOLYLINE" => Some(Self::Polyline),
            _ => None,
        }
    }
}

/// Fields collected for the entity currently being read.
#[derive(Debug)]
struct PendingEntity {
    kind: EntityKind,
    layer: Option<String>,
    x1: Option<f64>,
    y1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
    radius: Option<f64>,
    vertices: Vec<Point>,
}

impl PendingEntity {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            layer: None,
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            radius: None,
            vertices: Vec::new(),
        }
    }

    fn set(&mut self, pair: CodePair<'_>) {
        let number = parse_number(pair.value);
        match pair.code {
            "8" => self.layer = Some(pair.value.to_string()),
            "10" => {
                self.x1 = number;
                if self.kind == EntityKind::Polyline {
                    self.vertices.push(Point::new(number.unwrap_or(0.0), 0.0));
                }
            }
            "20" => {
                self.y1 = number;
                if let (EntityKind::Polyline, Some(last)) = (self.kind, self.vertices.last_mut()) {
                    last.y = number.unwrap_or(0.0);
                }
            }
            "11" => self.x2 = number,
            "21" => self.y2 = number,
            "40" => self.radius = number,
            _ => {}
        }
    }

    /// Whether every coordinate code the kind needs has a numeric value.
    /// A missing circle radius falls back, so it is not required.
    fn is_complete(&self) -> bool {
        match self.kind {
            EntityKind::Line => {
                self.x1.is_some() && self.y1.is_some() && self.x2.is_some() && self.y2.is_some()
            }
            EntityKind::Circle => self.x1.is_some() && self.y1.is_some(),
            EntityKind::Polyline => false,
        }
    }

    fn finish(self) -> Option<(String, Shape)> {
        let layer = self
            .layer
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| FALLBACK_LAYER.to_string());
        let first = Point::new(self.x1.unwrap_or(0.0), self.y1.unwrap_or(0.0));
        let shape = match self.kind {
            EntityKind::Line => {
                let second = Point::new(self.x2.unwrap_or(0.0), self.y2.unwrap_or(0.0));
                Shape::Line(Line::new(first, second))
            }
            EntityKind::Circle => {
                let radius = self.radius.filter(|r| *r != 0.0).unwrap_or(FALLBACK_RADIUS);
                Shape::Circle(Circle::new(first, radius))
            }
            EntityKind::Polyline => {
                log::debug!("discarding LWPOLYLINE with {} vertices", self.vertices.len());
                return None;
            }
        };
        Some((layer, shape))
    }
}

/// Missing, unparsable and NaN values all count as absent.
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse interchange text into fresh elements with random ids.
pub fn import(text: &str) -> Vec<Element> {
    import_with_ids(text, &mut RandomIds)
}

/// Parse interchange text, drawing ids from `ids`.
///
/// A group closed by a following code-0 record is always kept, with missing
/// values defaulted. A group still open at the end of input is kept only when
/// it is complete.
pub fn import_with_ids(text: &str, ids: &mut dyn IdSource) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut in_entities = false;
    let mut pending: Option<PendingEntity> = None;
    let mut skipped = 0usize;

    let mut close = |pending: &mut Option<PendingEntity>, elements: &mut Vec<Element>| {
        if let Some((layer, shape)) = pending.take().and_then(PendingEntity::finish) {
            elements.push(Element::new(ids.next_id(), shape).with_layer(layer));
        }
    };

    for pair in read_pairs(text) {
        match (pair.code, pair.value) {
            ("0", "SECTION") => continue,
            ("2", "ENTITIES") => {
                in_entities = true;
                continue;
            }
            ("0", "ENDSEC") => {
                in_entities = false;
                close(&mut pending, &mut elements);
                continue;
            }
            _ => {}
        }
        if !in_entities {
            continue;
        }
        if pair.code == "0" {
            close(&mut pending, &mut elements);
            pending = EntityKind::from_marker(pair.value).map(PendingEntity::new);
            if pending.is_none() {
                log::debug!("skipping unsupported entity {}", pair.value);
                skipped += 1;
            }
        } else if let Some(entity) = pending.as_mut() {
            entity.set(pair);
        }
    }

    if let Some(complete) = pending.as_ref().map(PendingEntity::is_complete) {
        if complete {
            close(&mut pending, &mut elements);
        } else {
            log::debug!("dropping truncated trailing group");
        }
    }
    log::info!("imported {} element(s), skipped {skipped} unsupported record(s)", elements.len());
    elements
}
