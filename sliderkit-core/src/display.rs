//! Display list — plain drawing commands produced by `Slider::render`.
//!
//! The core never paints. It emits shapes in paint order with semantic tints;
//! the host resolves tints to concrete colors and rasterizes.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::value::ValueState;

/// Semantic paint. Hosts map these to their palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// The fixed light-gray background track.
    Track,
    /// The white thumb interior.
    ThumbFill,
    /// Sign-dependent paint for the fill line, tick, thumb outline, label.
    Value(ValueState),
}

/// One drawing command in widget-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        tint: Tint,
        width: f64,
        rounded_cap: bool,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke: Tint,
        stroke_width: f64,
        fill: Tint,
    },
    /// Text centered on `center`.
    Label {
        text: String,
        center: Point,
        tint: Tint,
    },
}

/// Shapes in back-to-front paint order.
pub type DisplayList = Vec<Shape>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_list_serialization_roundtrip() {
        let list: DisplayList = vec![
            Shape::Line {
                from: Point::new(14.0, 50.0),
                to: Point::new(100.0, 50.0),
                tint: Tint::Track,
                width: 4.0,
                rounded_cap: true,
            },
            Shape::Circle {
                center: Point::new(57.0, 50.0),
                radius: 12.0,
                stroke: Tint::Value(ValueState::Neutral),
                stroke_width: 4.0,
                fill: Tint::ThumbFill,
            },
            Shape::Label {
                text: "0.0".into(),
                center: Point::new(57.0, 20.0),
                tint: Tint::Value(ValueState::Neutral),
            },
        ];
        let json = serde_json::to_string(&list).unwrap();
        let deser: DisplayList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, deser);
    }
}
