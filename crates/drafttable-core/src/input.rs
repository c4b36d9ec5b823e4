//! Pointer and keyboard events as delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Pointer event in viewport-relative screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    Move {
        position: Point,
        modifiers: Modifiers,
    },
    Up {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
}

impl PointerEvent {
    /// Primary-button press without modifiers.
    pub fn down(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn moved(position: Point) -> Self {
        Self::Move {
            position,
            modifiers: Modifiers::default(),
        }
    }

    /// Primary-button release without modifiers.
    pub fn up(position: Point) -> Self {
        Self::Up {
            position,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Move { position, .. } | Self::Up { position, .. } => position,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match *self {
            Self::Down { modifiers, .. } | Self::Move { modifiers, .. } | Self::Up { modifiers, .. } => modifiers,
        }
    }

    /// Same event with different modifiers.
    pub fn with_modifiers(mut self, new: Modifiers) -> Self {
        match &mut self {
            Self::Down { modifiers, .. } | Self::Move { modifiers, .. } | Self::Up { modifiers, .. } => {
                *modifiers = new;
            }
        }
        self
    }

    /// Same event with a different button. Moves carry no button and are unchanged.
    pub fn with_button(mut self, new: MouseButton) -> Self {
        match &mut self {
            Self::Down { button, .. } | Self::Up { button, .. } => *button = new,
            Self::Move { .. } => {}
        }
        self
    }
}

/// Keyboard event type. Keys are named the way browsers name them
/// (`"Delete"`, `"Backspace"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// A press of one of the keys that delete the selection.
    pub fn is_delete_press(&self) -> bool {
        matches!(self, KeyEvent::Pressed(key) if key == "Delete" || key == "Backspace")
    }
}
