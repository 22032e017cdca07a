//! Input event model for the canvas surface.
//!
//! The host UI layer owns event dispatch; it translates whatever it receives
//! into these plain-data events and feeds them to [`crate::Canvas`].
//! Positions are raw screen coordinates; conversion to surface-relative
//! coordinates happens in the canvas.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// The pointer left the canvas surface.
    Leave,
}

/// Keyboard event type. Keys are named the way the host reports them
/// ("Escape", "a", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}
