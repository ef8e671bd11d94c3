//! Application state — single-owner, main-thread only.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use ratatui::layout::Rect;

use sliderkit_core::{Bounds, Point, Slider};

/// Display multiplier for the demo slider: the label runs -50.0 to 50.0.
pub const SLIDER_RANGE: f64 = 100.0;

/// Logical widget points per terminal cell. Cells are roughly twice as tall
/// as they are wide, so the widget space stays close to square pixels.
pub const CELL_W: f64 = 8.0;
pub const CELL_H: f64 = 16.0;

pub struct AppState {
    pub slider: Slider,
    /// Widget-local bounds derived from the terminal area each frame.
    pub bounds: Bounds,
    /// Terminal area the slider canvas was last drawn into; mouse events are
    /// translated relative to it.
    pub widget_area: Rect,
    /// Last pointer position, kept so focus loss can cancel a drag in place.
    pub last_pointer: Point,
    /// Last value reported through the slider's change listener.
    pub reported_value: Rc<Cell<f64>>,
    pub running: bool,
    pub status: Option<String>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let mut slider = Slider::new(SLIDER_RANGE)?;

        let reported_value = Rc::new(Cell::new(slider.current_value()));
        let sink = Rc::clone(&reported_value);
        slider.subscribe(move |value| sink.set(value));

        Ok(Self {
            slider,
            bounds: Bounds::new(0.0, 0.0),
            widget_area: Rect::default(),
            last_pointer: Point::new(0.0, 0.0),
            reported_value,
            running: true,
            status: None,
        })
    }

    /// Recompute the logical bounds from the canvas area in cells.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.bounds = Bounds::new(f64::from(cols) * CELL_W, f64::from(rows) * CELL_H);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_feeds_reported_value() {
        let mut app = AppState::new().unwrap();
        app.resize(40, 6);
        app.slider.render(app.bounds);

        app.slider.pointer_down(Point::new(app.bounds.width, 0.0));
        app.slider.pointer_up(Point::new(app.bounds.width, 0.0));
        assert_eq!(app.reported_value.get(), 0.5);
    }

    #[test]
    fn resize_scales_cells_to_points() {
        let mut app = AppState::new().unwrap();
        app.resize(40, 6);
        assert_eq!(app.bounds.width, 320.0);
        assert_eq!(app.bounds.height, 96.0);
    }
}
