//! sliderkit-core — center-zero slider widget logic.
//!
//! The widget owns a normalized position in [0, 1] (center = 0.5) and derives
//! a current value in [-0.5, 0.5] from it. Pointer events move the position;
//! `Slider::render` lays the widget out into a plain display list that a host
//! paints however it likes. The core has no rendering dependency.
//!
//! Everything is single-threaded and event-driven: pointer handling and
//! rendering are expected to run on the host's UI loop.

pub mod display;
pub mod geometry;
pub mod slider;
pub mod value;

pub use display::{DisplayList, Shape, Tint};
pub use geometry::{Bounds, Point};
pub use slider::{
    DragState, PointerEvent, Slider, SliderError, MARGIN, STROKE_WIDTH, THUMB_DIAMETER,
};
pub use value::ValueState;
