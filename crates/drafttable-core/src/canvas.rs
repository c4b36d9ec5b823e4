//! Canvas shell: owns host state and routes events through the engine.

use crate::assistant::AssistantReply;
use crate::ids::{IdSource, RandomIds};
use crate::input::{KeyEvent, PointerEvent};
use crate::interaction::{handle_key, handle_pointer, DragSession, Edit, Frame};
use crate::interchange::{export, import_with_ids};
use crate::selection;
use crate::shapes::{Element, ElementId, Line, SerializableColor, Shape};
use crate::snap::DraftingAids;
use crate::tools::ToolKind;
use crate::view::View;
use kurbo::{Point, Size};

/// Corners of the starter frame, walked in drawing order.
const STARTER_FRAME: [(f64, f64); 4] = [(100.0, 100.0), (700.0, 100.0), (700.0, 500.0), (100.0, 500.0)];

/// The border drawing a fresh canvas opens with.
pub fn starter_elements() -> Vec<Element> {
    (0..STARTER_FRAME.len())
        .map(|i| {
            let a = STARTER_FRAME[i];
            let b = STARTER_FRAME[(i + 1) % STARTER_FRAME.len()];
            Element::new(
                format!("init-{}", i + 1),
                Shape::Line(Line::new(Point::new(a.0, a.1), Point::new(b.0, b.1))),
            )
            .with_color(SerializableColor::frame())
        })
        .collect()
}

/// Canvas state: elements, view, tool, drafting aids and the live gesture.
pub struct Canvas {
    elements: Vec<Element>,
    pub view: View,
    /// Viewport size in screen pixels.
    pub viewport: Size,
    pub tool: ToolKind,
    pub aids: DraftingAids,
    session: DragSession,
    snap_indicator: Option<Point>,
    ids: Box<dyn IdSource>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A canvas holding the starter drawing, with random ids.
    pub fn new() -> Self {
        Self::with_elements(starter_elements(), Box::new(RandomIds))
    }

    pub fn with_elements(elements: Vec<Element>, ids: Box<dyn IdSource>) -> Self {
        Self {
            elements,
            view: View::default(),
            viewport: Size::new(800.0, 600.0),
            tool: ToolKind::default(),
            aids: DraftingAids::default(),
            session: DragSession::idle(),
            snap_indicator: None,
            ids,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn snap_indicator(&self) -> Option<Point> {
        self.snap_indicator
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    /// Switch tools. Any gesture in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.session = DragSession::idle();
    }

    fn apply(&mut self, edit: Edit) {
        edit.apply(&mut self.elements);
    }

    /// Route a pointer event through the gesture state machine.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        let frame = Frame {
            elements: &self.elements,
            view: self.view,
            viewport: self.viewport,
            tool: self.tool,
            aids: self.aids,
            snap_indicator: self.snap_indicator,
        };
        let step = handle_pointer(event, &frame, &self.session, self.ids.as_mut());
        self.session = step.session;
        self.snap_indicator = step.snap_indicator;
        if let Some(view) = step.view {
            self.view = view;
        }
        if let Some(edit) = step.edit {
            self.apply(edit);
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.handle_pointer(event);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.handle_pointer(event);
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        self.handle_pointer(event);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.view.zoom_wheel(delta_y);
    }

    pub fn key(&mut self, event: &KeyEvent) {
        if let Some(edit) = handle_key(event, &self.elements, self.tool) {
            self.apply(edit);
        }
    }

    /// Remove every selected element.
    pub fn delete_selected(&mut self) {
        self.elements.retain(|el| !el.selected);
    }

    pub fn selected_ids(&self) -> Vec<ElementId> {
        selection::selected_ids(&self.elements)
    }

    /// Replace the whole drawing with parsed interchange text.
    pub fn import_dxf(&mut self, text: &str) {
        let imported = import_with_ids(text, self.ids.as_mut());
        self.apply(Edit::Replace(imported));
        self.session = DragSession::idle();
    }

    pub fn export_dxf(&self) -> String {
        export(&self.elements)
    }

    /// Apply an assistant reply and return the message to show.
    pub fn apply_assistant(&mut self, reply: &AssistantReply) -> String {
        if let Some(edit) = reply.to_edit(&self.elements, self.ids.as_mut()) {
            self.apply(edit);
        }
        reply.message.clone()
    }
}
