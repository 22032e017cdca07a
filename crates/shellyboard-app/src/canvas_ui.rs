//! egui surface for the drag-to-create canvas.
//!
//! Translates egui input into core pointer/keyboard events and paints the
//! committed items plus the live draft preview. All interaction decisions
//! live in [`shellyboard_core::Canvas`]; this module only adapts and draws.

use egui::{
    Align2, CornerRadius, CursorIcon, FontId, Pos2, Rect, Response, Sense, Shape, Stroke,
    StrokeKind, Ui, Vec2,
};
use shellyboard_core::Canvas;
use shellyboard_core::input::{KeyEvent, MouseButton, PointerEvent};

use crate::theme;

/// Fixed surface height, matching the layout block it replaces.
const SURFACE_HEIGHT: f32 = 480.0;
/// Dash pattern for the draft preview outline.
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

const HINT: &str = "Drag on empty space to create. Esc to cancel.";

fn to_core(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_egui(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Show the canvas surface and run the drag interaction against `canvas`.
pub fn show(ui: &mut Ui, canvas: &mut Canvas) -> Response {
    let size = Vec2::new(ui.available_width(), SURFACE_HEIGHT);
    // drag-only sense so drag_started fires on the press itself, keeping
    // the draft anchored at the exact down-position
    let (rect, response) = ui.allocate_exact_size(size, Sense::drag());

    canvas.set_origin(to_core(rect.min));
    forward_input(ui, &response, rect, canvas);
    paint(ui, rect, &response, canvas);

    response
}

/// Translate egui input into core events.
fn forward_input(ui: &Ui, response: &Response, rect: Rect, canvas: &mut Canvas) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            canvas.handle_pointer_event(PointerEvent::Down {
                position: to_core(pos),
                button: MouseButton::Left,
            });
        }
    }

    if !canvas.is_dragging() {
        return;
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        canvas.handle_key_event(KeyEvent::Pressed("Escape".to_string()));
        return;
    }

    match ui.input(|i| i.pointer.latest_pos()) {
        Some(pos) if rect.contains(pos) => {
            canvas.handle_pointer_event(PointerEvent::Move {
                position: to_core(pos),
            });
            if response.drag_stopped_by(egui::PointerButton::Primary) {
                if let Some(id) = canvas.handle_pointer_event(PointerEvent::Up {
                    position: to_core(pos),
                }) {
                    log::info!("created item {id}");
                }
            }
        }
        _ => {
            canvas.handle_pointer_event(PointerEvent::Leave);
        }
    }

    if canvas.is_dragging() {
        // keep the preview tracking the pointer between input events
        ui.ctx().request_repaint();
    }
}

fn paint(ui: &Ui, rect: Rect, response: &Response, canvas: &Canvas) {
    let painter = ui.painter_at(rect);

    painter.rect_filled(
        rect,
        CornerRadius::same(theme::SURFACE_RADIUS),
        theme::SURFACE_BG,
    );

    let offset = rect.min.to_vec2();
    let hovered = if canvas.is_dragging() {
        None
    } else {
        response
            .hover_pos()
            .and_then(|pos| canvas.board().item_at(canvas.screen_to_surface(to_core(pos))))
            .map(|item| item.id())
    };

    for item in canvas.board().items() {
        let item_rect = to_egui(item.bounds()).translate(offset);
        let fill = if hovered == Some(item.id()) {
            theme::ITEM_FILL_HOVER
        } else {
            theme::ITEM_FILL
        };
        painter.rect_filled(item_rect, CornerRadius::same(theme::ITEM_RADIUS), fill);
        painter.rect_stroke(
            item_rect,
            CornerRadius::same(theme::ITEM_RADIUS),
            Stroke::new(1.0, theme::ITEM_BORDER),
            StrokeKind::Inside,
        );
    }

    // the preview is painter-only: it never allocates a widget, so it can
    // never intercept the pointer events driving the drag
    if let Some(draft) = canvas.draft_preview() {
        let draft_rect = to_egui(draft).translate(offset);
        painter.rect_filled(draft_rect, CornerRadius::ZERO, theme::DRAFT_FILL);
        dashed_rect(&painter, draft_rect, Stroke::new(1.0, theme::DRAFT_BORDER));
    }

    painter.text(
        rect.right_bottom() - Vec2::new(8.0, 6.0),
        Align2::RIGHT_BOTTOM,
        HINT,
        FontId::proportional(11.0),
        theme::TEXT_MUTED,
    );

    painter.rect_stroke(
        rect,
        CornerRadius::same(theme::SURFACE_RADIUS),
        Stroke::new(1.0, theme::SURFACE_BORDER),
        StrokeKind::Inside,
    );

    if hovered.is_some() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::Crosshair);
    }
}

/// Stroke a rectangle outline with dashed segments.
fn dashed_rect(painter: &egui::Painter, rect: Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for segment in corners.windows(2) {
        painter.extend(Shape::dashed_line(segment, stroke, DASH_LENGTH, GAP_LENGTH));
    }
}
