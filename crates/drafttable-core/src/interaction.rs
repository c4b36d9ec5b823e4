//! Pointer gesture state machine.
//!
//! Each event runs [`handle_pointer`] to completion against a read-only
//! [`Frame`] of host state and the current [`DragSession`]. The step returns
//! the next session plus whatever the host has to apply: an element [`Edit`],
//! a new [`View`] and the snap indicator. Nothing here holds on to the element
//! list between calls.

use crate::ids::IdSource;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::selection::{apply_selection, box_contains, clear_selection, pick_topmost, SelectionBox};
use crate::shapes::{Element, ElementId, Shape};
use crate::snap::{resolve, DraftingAids};
use crate::tools::{create_shape, exceeds_draw_threshold, ToolKind};
use crate::transform::{ortho_delta, reflect, translate_selected, MirrorLine};
use crate::view::View;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind of drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DragMode {
    Draw,
    Pan,
    SelectBox,
    MoveItems,
    MirrorLine,
}

/// The gesture between a pointer-down and its pointer-up.
///
/// Anchors are plane coordinates, except [`Gesture::Panning`] which keeps the
/// last screen position so pans stay incremental.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing { anchor: Point },
    Panning { origin: Point },
    BoxSelecting { anchor: Point },
    Moving { anchor: Point },
    Mirroring { anchor: Point },
}

impl Gesture {
    pub fn mode(&self) -> Option<DragMode> {
        match self {
            Gesture::Idle => None,
            Gesture::Drawing { .. } => Some(DragMode::Draw),
            Gesture::Panning { .. } => Some(DragMode::Pan),
            Gesture::BoxSelecting { .. } => Some(DragMode::SelectBox),
            Gesture::Moving { .. } => Some(DragMode::MoveItems),
            Gesture::Mirroring { .. } => Some(DragMode::MirrorLine),
        }
    }

    /// Plane anchor used for ortho locking. Pans have none.
    pub fn anchor(&self) -> Option<Point> {
        match *self {
            Gesture::Drawing { anchor }
            | Gesture::BoxSelecting { anchor }
            | Gesture::Moving { anchor }
            | Gesture::Mirroring { anchor } => Some(anchor),
            Gesture::Idle | Gesture::Panning { .. } => None,
        }
    }
}

/// Ephemeral drag state. A fresh session starts on every pointer-down and
/// every pointer-up returns to [`DragSession::idle`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub gesture: Gesture,
    /// Constrained cursor, for draw and mirror previews.
    pub cursor: Option<Point>,
    /// Unconstrained cursor, for box and move previews.
    pub raw_cursor: Option<Point>,
}

impl DragSession {
    pub fn idle() -> Self {
        Self::default()
    }

    fn start(gesture: Gesture, cursor: Point, raw_cursor: Point) -> Self {
        Self {
            gesture,
            cursor: Some(cursor),
            raw_cursor: Some(raw_cursor),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    pub fn mode(&self) -> Option<DragMode> {
        self.gesture.mode()
    }

    /// Offset the selected elements would move by if the pointer went up now.
    pub fn preview_offset(&self, ortho: bool) -> Option<Vec2> {
        let (Gesture::Moving { anchor }, Some(cursor)) = (self.gesture, self.raw_cursor) else {
            return None;
        };
        let delta = cursor - anchor;
        Some(if ortho { ortho_delta(delta) } else { delta })
    }

    /// Shape the active drawing tool would commit, ignoring the length threshold.
    pub fn preview_shape(&self, tool: ToolKind) -> Option<Shape> {
        match (self.gesture, self.cursor) {
            (Gesture::Drawing { anchor }, Some(cursor)) => create_shape(tool, anchor, cursor),
            _ => None,
        }
    }

    /// Rubber band of an in-progress box selection.
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match (self.gesture, self.raw_cursor) {
            (Gesture::BoxSelecting { anchor }, Some(cursor)) => Some(SelectionBox::new(anchor, cursor)),
            _ => None,
        }
    }

    /// Endpoints of an in-progress mirror line.
    pub fn mirror_line(&self) -> Option<(Point, Point)> {
        match (self.gesture, self.cursor) {
            (Gesture::Mirroring { anchor }, Some(cursor)) => Some((anchor, cursor)),
            _ => None,
        }
    }
}

/// A change to the element collection, applied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Add new elements to the end.
    Append(Vec<Element>),
    /// Swap in a whole new collection.
    Replace(Vec<Element>),
    /// Overwrite existing elements, matched by id.
    BulkUpdate(Vec<Element>),
}

impl Edit {
    pub fn apply(self, sink: &mut dyn ElementSink) {
        match self {
            Edit::Append(elements) => sink.append(elements),
            Edit::Replace(elements) => sink.replace(elements),
            Edit::BulkUpdate(elements) => sink.bulk_update(elements),
        }
    }
}

/// The host-owned element collection, as seen by the engine.
pub trait ElementSink {
    fn append(&mut self, elements: Vec<Element>);
    fn replace(&mut self, elements: Vec<Element>);
    /// Overwrite elements sharing an id with an update. Unknown ids are ignored.
    fn bulk_update(&mut self, updates: Vec<Element>);
}

impl ElementSink for Vec<Element> {
    fn append(&mut self, elements: Vec<Element>) {
        self.extend(elements);
    }

    fn replace(&mut self, elements: Vec<Element>) {
        *self = elements;
    }

    fn bulk_update(&mut self, updates: Vec<Element>) {
        for update in updates {
            if let Some(slot) = self.iter_mut().find(|el| el.id == update.id) {
                *slot = update;
            }
        }
    }
}

/// Host state an event is interpreted against.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub elements: &'a [Element],
    pub view: View,
    pub viewport: Size,
    pub tool: ToolKind,
    pub aids: DraftingAids,
    pub snap_indicator: Option<Point>,
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub session: DragSession,
    pub edit: Option<Edit>,
    pub view: Option<View>,
    pub snap_indicator: Option<Point>,
}

impl Step {
    fn new(session: DragSession, snap_indicator: Option<Point>) -> Self {
        Self {
            session,
            edit: None,
            view: None,
            snap_indicator,
        }
    }

    fn with_edit(mut self, edit: Option<Edit>) -> Self {
        self.edit = edit;
        self
    }
}

/// Run one pointer event through the state machine.
pub fn handle_pointer(
    event: &PointerEvent,
    frame: &Frame<'_>,
    session: &DragSession,
    ids: &mut dyn IdSource,
) -> Step {
    match *event {
        PointerEvent::Down { position, button, modifiers } => {
            pointer_down(position, button, modifiers.shift, frame)
        }
        PointerEvent::Move { position, .. } => pointer_move(position, frame, session),
        PointerEvent::Up { position, modifiers, .. } => {
            pointer_up(position, modifiers.shift, frame, session, ids)
        }
    }
}

fn pointer_down(screen: Point, button: MouseButton, shift: bool, frame: &Frame<'_>) -> Step {
    let pan_button = button == MouseButton::Middle
        || (button == MouseButton::Right && frame.tool == ToolKind::Select);
    if pan_button {
        let session = DragSession {
            gesture: Gesture::Panning { origin: screen },
            cursor: None,
            raw_cursor: None,
        };
        return Step::new(session, frame.snap_indicator);
    }

    let raw = frame.view.screen_to_plane(screen, frame.viewport);
    let snapped = resolve(raw, frame.elements, None, frame.aids);
    let point = snapped.point;
    let indicator = snapped.snap_hit;

    match frame.tool {
        ToolKind::Select => match pick_topmost(raw, frame.elements) {
            Some(hit) => {
                let edit = (!hit.selected).then(|| {
                    let captured: HashSet<ElementId> = [hit.id.clone()].into_iter().collect();
                    Edit::Replace(apply_selection(frame.elements, &captured, shift))
                });
                let session = DragSession::start(Gesture::Moving { anchor: raw }, point, raw);
                Step::new(session, indicator).with_edit(edit)
            }
            None => {
                let any_selected = frame.elements.iter().any(|el| el.selected);
                let edit = (!shift && any_selected).then(|| Edit::Replace(clear_selection(frame.elements)));
                let session = DragSession::start(Gesture::BoxSelecting { anchor: raw }, point, raw);
                Step::new(session, indicator).with_edit(edit)
            }
        },
        ToolKind::Mirror => {
            let session = DragSession::start(Gesture::Mirroring { anchor: point }, point, raw);
            Step::new(session, indicator)
        }
        ToolKind::Trim => {
            let edit = pick_topmost(raw, frame.elements).map(|hit| {
                log::debug!("trim removes {}", hit.id);
                let remaining = frame.elements.iter().filter(|el| el.id != hit.id).cloned().collect();
                Edit::Replace(remaining)
            });
            Step::new(DragSession::idle(), indicator).with_edit(edit)
        }
        _ => {
            let session = DragSession::start(Gesture::Drawing { anchor: point }, point, raw);
            Step::new(session, indicator)
        }
    }
}

fn pointer_move(screen: Point, frame: &Frame<'_>, session: &DragSession) -> Step {
    let raw = frame.view.screen_to_plane(screen, frame.viewport);
    let snapped = resolve(raw, frame.elements, session.gesture.anchor(), frame.aids);

    if let Gesture::Panning { origin } = session.gesture {
        let mut view = frame.view;
        view.pan_by_screen_delta(screen - origin, frame.viewport);
        let next = DragSession {
            gesture: Gesture::Panning { origin: screen },
            ..*session
        };
        let mut step = Step::new(next, snapped.snap_hit);
        step.view = Some(view);
        return step;
    }

    let next = DragSession {
        gesture: session.gesture,
        cursor: Some(snapped.point),
        raw_cursor: Some(raw),
    };
    Step::new(next, snapped.snap_hit)
}

fn pointer_up(
    screen: Point,
    shift: bool,
    frame: &Frame<'_>,
    session: &DragSession,
    ids: &mut dyn IdSource,
) -> Step {
    let raw = frame.view.screen_to_plane(screen, frame.viewport);
    let snapped = resolve(raw, frame.elements, session.gesture.anchor(), frame.aids);
    let point = snapped.point;

    let edit = match session.gesture {
        Gesture::Idle | Gesture::Panning { .. } => None,
        Gesture::BoxSelecting { anchor } => {
            let captured = box_contains(frame.elements, anchor, raw);
            log::trace!("box select captured {} element(s)", captured.len());
            Some(Edit::Replace(apply_selection(frame.elements, &captured, shift)))
        }
        Gesture::Moving { anchor } => {
            let mut delta = raw - anchor;
            if frame.aids.ortho {
                delta = ortho_delta(delta);
            }
            if delta.x != 0.0 || delta.y != 0.0 {
                Some(Edit::BulkUpdate(translate_selected(frame.elements, delta)))
            } else {
                None
            }
        }
        Gesture::Mirroring { anchor } => commit_mirror(frame.elements, anchor, point, ids),
        Gesture::Drawing { anchor } => commit_draw(frame.tool, anchor, point, ids),
    };

    Step::new(DragSession::idle(), snapped.snap_hit).with_edit(edit)
}

fn commit_mirror(elements: &[Element], anchor: Point, point: Point, ids: &mut dyn IdSource) -> Option<Edit> {
    if MirrorLine::through(anchor, point).is_none() {
        log::debug!("mirror line too short, discarded");
        return None;
    }
    let copies = reflect(elements, anchor, point, ids);
    let mut next = clear_selection(elements);
    next.extend(copies);
    Some(Edit::Replace(next))
}

fn commit_draw(tool: ToolKind, anchor: Point, point: Point, ids: &mut dyn IdSource) -> Option<Edit> {
    if !exceeds_draw_threshold(anchor, point) {
        log::debug!("draw gesture below threshold, discarded");
        return None;
    }
    let shape = create_shape(tool, anchor, point)?;
    Some(Edit::Append(vec![Element::new(ids.next_id(), shape)]))
}

/// Keyboard handling: Delete or Backspace with the select tool removes the selection.
pub fn handle_key(event: &KeyEvent, elements: &[Element], tool: ToolKind) -> Option<Edit> {
    if tool != ToolKind::Select || !event.is_delete_press() {
        return None;
    }
    if !elements.iter().any(|el| el.selected) {
        return None;
    }
    let remaining = elements.iter().filter(|el| !el.selected).cloned().collect();
    Some(Edit::Replace(remaining))
}
