//! Tri-state sign classification for the slider's current value.

use serde::{Deserialize, Serialize};

/// Which side of center the slider sits on. Drives the fill line, tick,
/// thumb outline, and label color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueState {
    Negative,
    Neutral,
    Positive,
}

impl ValueState {
    /// Classify a current value: strictly below zero is negative, strictly
    /// above is positive, exactly zero is neutral.
    pub fn for_value(value: f64) -> Self {
        if value < 0.0 {
            ValueState::Negative
        } else if value > 0.0 {
            ValueState::Positive
        } else {
            ValueState::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValueState::Negative => "negative",
            ValueState::Neutral => "neutral",
            ValueState::Positive => "positive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_signs() {
        assert_eq!(ValueState::for_value(-0.5), ValueState::Negative);
        assert_eq!(ValueState::for_value(-1e-9), ValueState::Negative);
        assert_eq!(ValueState::for_value(0.0), ValueState::Neutral);
        assert_eq!(ValueState::for_value(1e-9), ValueState::Positive);
        assert_eq!(ValueState::for_value(0.5), ValueState::Positive);
    }

    #[test]
    fn negative_zero_is_neutral() {
        // -0.0 == 0.0 in IEEE comparison, so it lands in the neutral arm.
        assert_eq!(ValueState::for_value(-0.0), ValueState::Neutral);
    }
}
