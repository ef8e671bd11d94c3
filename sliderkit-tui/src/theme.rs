//! Color palette — resolves the core's semantic tints to terminal colors.

use ratatui::style::{Color, Style};

use sliderkit_core::{Tint, ValueState};

/// Values left of center.
pub const NEGATIVE: Color = Color::Rgb(255, 59, 48);
/// Values right of center.
pub const POSITIVE: Color = Color::Rgb(52, 199, 89);
/// Exactly centered.
pub const NEUTRAL: Color = Color::Rgb(174, 174, 178);
/// The background track.
pub const TRACK: Color = Color::Rgb(120, 120, 124);
/// The thumb interior.
pub const THUMB_FILL: Color = Color::White;

/// Map a semantic tint from the display list to a concrete color.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Track => TRACK,
        Tint::ThumbFill => THUMB_FILL,
        Tint::Value(state) => value_color(state),
    }
}

pub fn value_color(state: ValueState) -> Color {
    match state {
        ValueState::Negative => NEGATIVE,
        ValueState::Neutral => NEUTRAL,
        ValueState::Positive => POSITIVE,
    }
}

pub fn value_style(state: ValueState) -> Style {
    Style::default().fg(value_color(state))
}

pub fn muted() -> Style {
    Style::default().fg(Color::Rgb(100, 149, 237))
}

pub fn border() -> Style {
    Style::default().fg(Color::Rgb(100, 149, 237))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_tints_follow_sign() {
        assert_eq!(tint_color(Tint::Value(ValueState::Negative)), NEGATIVE);
        assert_eq!(tint_color(Tint::Value(ValueState::Positive)), POSITIVE);
        assert_eq!(tint_color(Tint::Value(ValueState::Neutral)), NEUTRAL);
    }

    #[test]
    fn fixed_tints() {
        assert_eq!(tint_color(Tint::Track), TRACK);
        assert_eq!(tint_color(Tint::ThumbFill), THUMB_FILL);
    }
}
