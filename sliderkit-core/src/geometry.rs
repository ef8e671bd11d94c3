//! Widget-local geometry — y-down, origin at the widget's top-left.

use serde::{Deserialize, Serialize};

/// A point in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rectangle the hosting layout hands the widget before each render.
///
/// The widget never sizes itself; it only lays out into whatever bounds it is
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the bounds cannot support layout (zero, negative, or
    /// non-finite extent). Rendering into degenerate bounds is a no-op.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn mid_x(&self) -> f64 {
        self.width * 0.5
    }

    pub fn mid_y(&self) -> f64 {
        self.height * 0.5
    }
}
