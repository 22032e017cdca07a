//! Drag-to-create interaction state for the canvas surface.

use kurbo::{Point, Rect};

/// Minimum size of a committed item on each axis, in surface pixels.
/// Drags smaller than this on either axis are discarded on release.
pub const MIN_ITEM_SIZE: f64 = 8.0;

/// Normalize a start/end corner pair into a rect with non-negative width
/// and height, regardless of drag direction.
pub fn normalize(start: Point, end: Point) -> Rect {
    let min_x = start.x.min(end.x);
    let min_y = start.y.min(end.y);
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();

    Rect::new(min_x, min_y, min_x + width, min_y + height)
}

/// State of the drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DraftState {
    /// No draft in progress, waiting for a pointer-down.
    #[default]
    Idle,
    /// A pointer button is held and a rectangle is being drafted.
    Dragging {
        /// Position of the initial pointer-down.
        start: Point,
        /// Current pointer position.
        current: Point,
    },
}

/// Tracks the in-progress draft rectangle across pointer events.
///
/// The draft exists only between `begin` and `end`/`cancel`; it never
/// outlives the drag gesture that created it.
#[derive(Debug, Clone, Default)]
pub struct DraftTool {
    state: DraftState,
}

impl DraftTool {
    /// Create a new idle draft tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a draft at the given surface point.
    pub fn begin(&mut self, point: Point) {
        self.state = DraftState::Dragging {
            start: point,
            current: point,
        };
    }

    /// Update the moving corner of the draft. No-op when idle.
    pub fn update(&mut self, point: Point) {
        if let DraftState::Dragging { current, .. } = &mut self.state {
            *current = point;
        }
    }

    /// End the draft at the given surface point and return the normalized
    /// rect, or `None` when the drag was below [`MIN_ITEM_SIZE`] on either
    /// axis. Always returns the tool to idle.
    pub fn end(&mut self, point: Point) -> Option<Rect> {
        if let DraftState::Dragging { start, .. } = self.state {
            self.state = DraftState::Idle;
            let rect = normalize(start, point);
            if rect.width() < MIN_ITEM_SIZE || rect.height() < MIN_ITEM_SIZE {
                return None;
            }
            Some(rect)
        } else {
            None
        }
    }

    /// Discard the draft unconditionally. Nothing is committed.
    pub fn cancel(&mut self) {
        self.state = DraftState::Idle;
    }

    /// Check if a draft is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DraftState::Dragging { .. })
    }

    /// Get the normalized bounds of the live draft, if any.
    pub fn preview(&self) -> Option<Rect> {
        match self.state {
            DraftState::Dragging { start, current } => Some(normalize(start, current)),
            DraftState::Idle => None,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> DraftState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let tool = DraftTool::new();
        assert!(!tool.is_dragging());
        assert_eq!(tool.preview(), None);
    }

    #[test]
    fn test_begin_update_end() {
        let mut tool = DraftTool::new();

        tool.begin(Point::new(10.0, 10.0));
        assert!(tool.is_dragging());

        tool.update(Point::new(60.0, 40.0));
        let rect = tool.end(Point::new(100.0, 60.0)).unwrap();

        assert!((rect.x0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.width() - 90.0).abs() < f64::EPSILON);
        assert!((rect.height() - 50.0).abs() < f64::EPSILON);
        assert!(!tool.is_dragging());
    }

    #[test]
    fn test_end_below_threshold_discards() {
        let mut tool = DraftTool::new();

        tool.begin(Point::new(10.0, 10.0));
        assert_eq!(tool.end(Point::new(14.0, 14.0)), None);
        assert!(!tool.is_dragging());

        // one axis below the threshold is enough to discard
        tool.begin(Point::new(0.0, 0.0));
        assert_eq!(tool.end(Point::new(100.0, 7.0)), None);
    }

    #[test]
    fn test_end_while_idle_is_noop() {
        let mut tool = DraftTool::new();
        assert_eq!(tool.end(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut tool = DraftTool::new();

        tool.begin(Point::new(0.0, 0.0));
        tool.update(Point::new(200.0, 200.0));
        tool.cancel();

        assert!(!tool.is_dragging());
        assert_eq!(tool.end(Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_preview_is_normalized_on_reverse_drag() {
        let mut tool = DraftTool::new();

        tool.begin(Point::new(100.0, 100.0));
        tool.update(Point::new(40.0, 70.0));

        let rect = tool.preview().unwrap();
        assert!((rect.x0 - 40.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 70.0).abs() < f64::EPSILON);
        assert!((rect.width() - 60.0).abs() < f64::EPSILON);
        assert!((rect.height() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_direction_independent() {
        let a = Point::new(10.0, 80.0);
        let b = Point::new(50.0, 20.0);
        assert_eq!(normalize(a, b), normalize(b, a));
    }
}
