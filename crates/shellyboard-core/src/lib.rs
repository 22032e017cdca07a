//! Shellyboard Core Library
//!
//! Platform-agnostic state and logic for the Shellyboard drag-to-create
//! canvas, plus the AEST date helpers used by the booking display.

pub mod board;
pub mod canvas;
pub mod dates;
pub mod draft;
pub mod input;

pub use board::{Board, Item, ItemId};
pub use canvas::Canvas;
pub use draft::{DraftState, DraftTool, MIN_ITEM_SIZE};
pub use input::{KeyEvent, MouseButton, PointerEvent};
