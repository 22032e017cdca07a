//! Committed items and the append-only board store.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a committed item.
pub type ItemId = Uuid;

/// A committed rectangle on the board.
///
/// Geometry is surface-relative and immutable once committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub(crate) id: ItemId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the item.
    pub width: f64,
    /// Height of the item.
    pub height: f64,
}

impl Item {
    fn from_rect(rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Point::new(rect.x0, rect.y0),
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Get the item as a kurbo Rect.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Check whether a surface point falls inside the item.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// Insertion-ordered, append-only collection of committed items.
///
/// Items are never removed or mutated; the store lives as long as the
/// owning canvas and is dropped with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    items: Vec<Item>,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a freshly generated id. Always succeeds;
    /// returns the new item's id.
    pub fn add_item(&mut self, rect: Rect) -> ItemId {
        let item = Item::from_rect(rect);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Get the items in insertion order (back to front).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find the topmost item at a surface point, if any. Later items draw
    /// on top, so the search runs front to back.
    pub fn item_at(&self, point: Point) -> Option<&Item> {
        self.items.iter().rev().find(|item| item.hit_test(point))
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
