//! Input dispatch — keyboard quit/nudge, mouse to widget pointer events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use sliderkit_core::{Point, PointerEvent, MARGIN};

use crate::app::{AppState, CELL_H, CELL_W};

/// Keyboard step in normalized units.
const NUDGE_STEP: f64 = 0.05;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('h') | KeyCode::Left => nudge(app, -NUDGE_STEP),
        KeyCode::Char('l') | KeyCode::Right => nudge(app, NUDGE_STEP),
        KeyCode::Char('c') => tap_at_normalized(app, 0.5),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut AppState, ev: MouseEvent) {
    let point = cell_to_point(app.widget_area, ev.column, ev.row);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Drags only start inside the widget.
            if !contains_cell(app.widget_area, ev.column, ev.row) {
                return;
            }
            app.last_pointer = point;
            app.slider.handle_pointer(PointerEvent::Down(point));
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            // Once dragging, follow the pointer even outside the widget;
            // the slider clamps.
            if app.slider.is_dragging() {
                app.last_pointer = point;
                app.slider.handle_pointer(PointerEvent::Moved(point));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.slider.is_dragging() {
                app.last_pointer = point;
                app.slider.handle_pointer(PointerEvent::Up(point));
            }
        }
        _ => {}
    }
}

/// Losing terminal focus mid-drag is the closest thing to a platform
/// pointer-cancel; the slider keeps its last position.
pub fn handle_focus_lost(app: &mut AppState) {
    if app.slider.is_dragging() {
        app.slider
            .handle_pointer(PointerEvent::Cancelled(app.last_pointer));
        app.set_status("drag cancelled (focus lost)");
    }
}

/// Synthesize a tap at the x position that maps back to `target`, stepping
/// the slider without a second mutation path.
fn nudge(app: &mut AppState, delta: f64) {
    let target = (app.slider.normalized() + delta).clamp(0.0, 1.0);
    tap_at_normalized(app, target);
}

fn tap_at_normalized(app: &mut AppState, target: f64) {
    if app.bounds.width <= MARGIN {
        return;
    }
    // Inverse of the slider's pointer mapping.
    let x = target * (app.bounds.width - MARGIN) + MARGIN;
    let p = Point::new(x, app.bounds.height * 0.5);
    app.slider.handle_pointer(PointerEvent::Down(p));
    app.slider.handle_pointer(PointerEvent::Up(p));
}

/// Map a terminal cell to a widget-local point at the cell's center. Cells
/// left or above the area come out negative; the slider clamps either way.
fn cell_to_point(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        (f64::from(column) - f64::from(area.x) + 0.5) * CELL_W,
        (f64::from(row) - f64::from(area.y) + 0.5) * CELL_H,
    )
}

fn contains_cell(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
