//! Canvas widget state: surface origin, draft interaction, committed items.

use crate::board::{Board, ItemId};
use crate::draft::DraftTool;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use kurbo::{Point, Rect};

/// Runtime state for the drag-to-create canvas widget.
///
/// The host UI layer owns layout, painting and event dispatch; this state
/// consumes pointer/keyboard events carrying raw screen coordinates and
/// exposes the geometry to draw. The host reports the surface's on-screen
/// origin every layout pass so positions stay correct under scrolling and
/// resizing.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    board: Board,
    draft: DraftTool,
    /// Surface top-left in screen coordinates.
    origin: Point,
}

impl Canvas {
    /// Create a new canvas with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface's current on-screen origin.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Convert a raw screen position to surface-relative coordinates.
    pub fn screen_to_surface(&self, screen: Point) -> Point {
        screen - self.origin.to_vec2()
    }

    /// Process a pointer event. Returns the id of the newly committed item
    /// when the event completed a large-enough drag.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<ItemId> {
        match event {
            PointerEvent::Down { position, button } => {
                if button != MouseButton::Left {
                    return None;
                }
                let pos = self.screen_to_surface(position);
                if self.board.item_at(pos).is_some() {
                    // pointer went down on an existing item; interacting
                    // with items is the host's concern, not a new draft
                    return None;
                }
                self.draft.begin(pos);
                None
            }
            PointerEvent::Move { position } => {
                let pos = self.screen_to_surface(position);
                self.draft.update(pos);
                None
            }
            PointerEvent::Up { position } => {
                let pos = self.screen_to_surface(position);
                self.commit_draft(pos)
            }
            PointerEvent::Leave => {
                if self.draft.is_dragging() {
                    log::debug!("pointer left the surface, draft discarded");
                    self.draft.cancel();
                }
                None
            }
        }
    }

    /// Process a keyboard event. Escape discards a live draft
    /// unconditionally.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if let KeyEvent::Pressed(key) = event {
            if key == "Escape" && self.draft.is_dragging() {
                log::debug!("draft cancelled via Escape");
                self.draft.cancel();
            }
        }
    }

    fn commit_draft(&mut self, pos: Point) -> Option<ItemId> {
        let rect = self.draft.end(pos)?;
        let id = self.board.add_item(rect);
        log::debug!(
            "committed item {id} at ({:.1}, {:.1}) {}x{}",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
        Some(id)
    }

    /// Check if a draft drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.draft.is_dragging()
    }

    /// Get the normalized bounds of the live draft, in surface-relative
    /// coordinates. The host draws this as a non-interactive preview.
    pub fn draft_preview(&self) -> Option<Rect> {
        self.draft.preview()
    }

    /// Get the committed items.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(canvas: &mut Canvas, x: f64, y: f64) -> Option<ItemId> {
        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    fn mv(canvas: &mut Canvas, x: f64, y: f64) -> Option<ItemId> {
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(x, y),
        })
    }

    fn up(canvas: &mut Canvas, x: f64, y: f64) -> Option<ItemId> {
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn test_drag_commits_normalized_item() {
        let mut canvas = Canvas::new();

        down(&mut canvas, 10.0, 10.0);
        mv(&mut canvas, 60.0, 40.0);
        let id = up(&mut canvas, 100.0, 60.0).unwrap();

        let item = &canvas.board().items()[0];
        assert_eq!(item.id(), id);
        assert!((item.position.x - 10.0).abs() < f64::EPSILON);
        assert!((item.position.y - 10.0).abs() < f64::EPSILON);
        assert!((item.width - 90.0).abs() < f64::EPSILON);
        assert!((item.height - 50.0).abs() < f64::EPSILON);
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_tiny_drag_commits_nothing() {
        let mut canvas = Canvas::new();

        down(&mut canvas, 10.0, 10.0);
        mv(&mut canvas, 12.0, 13.0);
        assert_eq!(up(&mut canvas, 14.0, 14.0), None);
        assert!(canvas.board().is_empty());
    }

    #[test]
    fn test_escape_cancels_regardless_of_size() {
        let mut canvas = Canvas::new();

        down(&mut canvas, 0.0, 0.0);
        mv(&mut canvas, 300.0, 200.0);
        canvas.handle_key_event(KeyEvent::Pressed("Escape".to_string()));

        assert!(!canvas.is_dragging());
        assert_eq!(up(&mut canvas, 300.0, 200.0), None);
        assert!(canvas.board().is_empty());
    }

    #[test]
    fn test_leave_cancels_regardless_of_size() {
        let mut canvas = Canvas::new();

        down(&mut canvas, 0.0, 0.0);
        mv(&mut canvas, 300.0, 200.0);
        canvas.handle_pointer_event(PointerEvent::Leave);

        assert!(!canvas.is_dragging());
        assert!(canvas.board().is_empty());
    }

    #[test]
    fn test_down_on_existing_item_starts_no_draft() {
        let mut canvas = Canvas::new();

        down(&mut canvas, 10.0, 10.0);
        up(&mut canvas, 100.0, 100.0);
        assert_eq!(canvas.board().len(), 1);

        // down inside the committed item, drag well past the threshold
        down(&mut canvas, 50.0, 50.0);
        assert!(!canvas.is_dragging());
        mv(&mut canvas, 200.0, 200.0);
        assert_eq!(up(&mut canvas, 200.0, 200.0), None);
        assert_eq!(canvas.board().len(), 1);
    }

    #[test]
    fn test_non_left_button_starts_no_draft() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Right,
        });
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_positions_are_surface_relative() {
        let mut canvas = Canvas::new();
        canvas.set_origin(Point::new(100.0, 50.0));

        down(&mut canvas, 110.0, 60.0);
        up(&mut canvas, 200.0, 120.0);

        let item = &canvas.board().items()[0];
        assert!((item.position.x - 10.0).abs() < f64::EPSILON);
        assert!((item.position.y - 10.0).abs() < f64::EPSILON);
        assert!((item.width - 90.0).abs() < f64::EPSILON);
        assert!((item.height - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_preview_tracks_pointer_while_dragging() {
        let mut canvas = Canvas::new();

        assert_eq!(canvas.draft_preview(), None);
        down(&mut canvas, 20.0, 20.0);
        mv(&mut canvas, 80.0, 50.0);

        let preview = canvas.draft_preview().unwrap();
        assert!((preview.width() - 60.0).abs() < f64::EPSILON);
        assert!((preview.height() - 30.0).abs() < f64::EPSILON);

        up(&mut canvas, 80.0, 50.0);
        assert_eq!(canvas.draft_preview(), None);
    }

    #[test]
    fn test_committed_items_have_unique_ids() {
        let mut canvas = Canvas::new();

        for i in 0..3 {
            let x = 200.0 * f64::from(i);
            down(&mut canvas, x, 0.0);
            mv(&mut canvas, x + 50.0, 50.0);
            up(&mut canvas, x + 50.0, 50.0);
        }

        let ids: Vec<ItemId> = canvas.board().items().iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), 3);
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
