//! The slider widget — pointer handling, value mapping, layout.
//!
//! A center-zero slider: the normalized position starts at 0.5 (center), the
//! current value is `normalized - 0.5`, and the floating label shows
//! `current_value * range` with one fractional digit. Mutation happens only
//! through pointer events; every change sets a dirty flag and notifies the
//! registered change listeners synchronously.

use std::fmt;

use thiserror::Error;

use crate::display::{DisplayList, Shape, Tint};
use crate::geometry::{Bounds, Point};
use crate::value::ValueState;

/// Thumb diameter in widget points.
pub const THUMB_DIAMETER: f64 = 24.0;
/// Stroke width for the track, fill line, center tick, and thumb outline.
pub const STROKE_WIDTH: f64 = 4.0;
/// Track inset on each side: half the thumb plus a 2-point pad.
pub const MARGIN: f64 = THUMB_DIAMETER * 0.5 + 2.0;

/// Vertical lift of the label above the thumb's vertical center.
const LABEL_LIFT: f64 = MARGIN + 16.0;
/// Estimated glyph advance used to keep the label inside the widget.
const LABEL_GLYPH_ADVANCE: f64 = 9.0;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("slider range must be a positive finite number, got {0}")]
    InvalidRange(f64),
}

/// Idle: no active pointer. Dragging: pointer down, not yet up or cancelled.
/// Position updates are applied identically in both states; a discrete tap is
/// just a down/up pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Moved(Point),
    Up(Point),
    Cancelled(Point),
}

type ChangeListener = Box<dyn FnMut(f64)>;

/// The slider widget.
pub struct Slider {
    range: f64,
    normalized: f64,
    drag: DragState,
    needs_redraw: bool,
    /// Width recorded by the last non-degenerate render; pointer mapping
    /// needs it. Zero until the first render, which makes pointer events
    /// no-ops before layout.
    laid_out_width: f64,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("range", &self.range)
            .field("normalized", &self.normalized)
            .field("drag", &self.drag)
            .field("needs_redraw", &self.needs_redraw)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Slider {
    /// Create a slider centered at zero. `range` scales the label only.
    pub fn new(range: f64) -> Result<Self, SliderError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(SliderError::InvalidRange(range));
        }
        Ok(Self {
            range,
            normalized: 0.5,
            drag: DragState::Idle,
            needs_redraw: true,
            laid_out_width: 0.0,
            listeners: Vec::new(),
        })
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Position fraction in [0, 1].
    pub fn normalized(&self) -> f64 {
        self.normalized
    }

    /// The semantic output: normalized value re-centered to [-0.5, 0.5].
    pub fn current_value(&self) -> f64 {
        self.normalized - 0.5
    }

    /// The label value: current value scaled by the range.
    pub fn display_value(&self) -> f64 {
        self.current_value() * self.range
    }

    pub fn state(&self) -> ValueState {
        ValueState::for_value(self.current_value())
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Register a change listener, called synchronously with the new current
    /// value on every update.
    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns and clears the dirty flag. The host's render loop polls this
    /// to decide whether a repaint is due.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Moved(p) => self.pointer_moved(p),
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::Cancelled(p) => self.pointer_cancelled(p),
        }
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.drag = DragState::Dragging;
        self.update(point);
    }

    pub fn pointer_moved(&mut self, point: Point) {
        self.update(point);
    }

    pub fn pointer_up(&mut self, point: Point) {
        self.drag = DragState::Idle;
        self.update(point);
    }

    /// Same mapping as pointer-up: a cancelled drag keeps its last position,
    /// there is no revert-to-previous semantic.
    pub fn pointer_cancelled(&mut self, point: Point) {
        self.drag = DragState::Idle;
        self.update(point);
    }

    /// Map a pointer x-position to the normalized value, clamped to [0, 1],
    /// then notify. Never rejects input.
    fn update(&mut self, point: Point) {
        let width = self.laid_out_width;
        if width <= MARGIN || !point.x.is_finite() {
            return;
        }
        self.normalized = ((point.x - MARGIN) / (width - MARGIN)).clamp(0.0, 1.0);
        self.needs_redraw = true;
        let value = self.current_value();
        for listener in &mut self.listeners {
            listener(value);
        }
    }

    /// Lay the widget out into `bounds` and return the shapes to paint, in
    /// order: track, fill line, center tick, thumb, label. Degenerate bounds
    /// produce an empty list.
    pub fn render(&mut self, bounds: Bounds) -> DisplayList {
        if bounds.is_degenerate() {
            return Vec::new();
        }
        self.laid_out_width = bounds.width;

        let mid_x = bounds.mid_x();
        let mid_y = bounds.mid_y();
        let usable = bounds.width - 2.0 * MARGIN;
        let tint = Tint::Value(self.state());

        let mut list = Vec::with_capacity(5);

        // Background track.
        list.push(Shape::Line {
            from: Point::new(MARGIN, mid_y),
            to: Point::new(bounds.width - MARGIN, mid_y),
            tint: Tint::Track,
            width: STROKE_WIDTH,
            rounded_cap: true,
        });

        // Fill from the horizontal center to the current position. One
        // segment; below center it simply runs leftwards.
        let fill_end = self.normalized * usable + MARGIN;
        list.push(Shape::Line {
            from: Point::new(mid_x, mid_y),
            to: Point::new(fill_end, mid_y),
            tint,
            width: STROKE_WIDTH,
            rounded_cap: false,
        });

        // Center tick.
        list.push(Shape::Line {
            from: Point::new(mid_x, mid_y - STROKE_WIDTH * 2.0),
            to: Point::new(mid_x, mid_y + STROKE_WIDTH * 2.0),
            tint,
            width: STROKE_WIDTH,
            rounded_cap: true,
        });

        // Thumb: left edge rides the usable track with a 2-point pad.
        let thumb_left = self.normalized * usable + 2.0;
        let thumb_center = Point::new(thumb_left + THUMB_DIAMETER * 0.5, mid_y);
        list.push(Shape::Circle {
            center: thumb_center,
            radius: THUMB_DIAMETER * 0.5,
            stroke: tint,
            stroke_width: STROKE_WIDTH,
            fill: Tint::ThumbFill,
        });

        // Floating label, horizontally clamped so it never leaves the widget.
        let text = format_display_value(self.display_value());
        let half_label = text.chars().count() as f64 * LABEL_GLYPH_ADVANCE * 0.5;
        // max() keeps the clamp interval valid when the widget is narrower
        // than the label.
        let label_max = (bounds.width - half_label).max(half_label);
        let label_x = thumb_center.x.clamp(half_label, label_max);
        list.push(Shape::Label {
            text,
            center: Point::new(label_x, mid_y - LABEL_LIFT),
            tint,
        });

        list
    }
}

/// One fractional digit, always shown.
pub fn format_display_value(value: f64) -> String {
    format!("{value:.1}")
}
