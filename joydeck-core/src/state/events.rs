//! Outcome of an accepted button press

/// What an accepted press changed in the mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeChange {
    /// Joystick press toggled the border style
    Border {
        /// New border style
        thick: bool,
        /// New green LED state, `None` while LEDs are suppressed
        green: Option<bool>,
    },
    /// Button A toggled LED suppression
    Suppression {
        /// LEDs are now forced off
        suppressed: bool,
    },
}

impl ModeChange {
    /// Check if the green LED must be rewritten
    pub fn touches_green(&self) -> bool {
        match self {
            ModeChange::Border { green, .. } => green.is_some(),
            ModeChange::Suppression { .. } => true,
        }
    }

    /// Check if the PWM LEDs must be resynchronized
    pub fn touches_pwm(&self) -> bool {
        matches!(self, ModeChange::Suppression { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_classification() {
        let border = ModeChange::Border {
            thick: true,
            green: Some(true),
        };
        assert!(border.touches_green());
        assert!(!border.touches_pwm());

        let muted_border = ModeChange::Border {
            thick: false,
            green: None,
        };
        assert!(!muted_border.touches_green());

        let suppression = ModeChange::Suppression { suppressed: true };
        assert!(suppression.touches_green());
        assert!(suppression.touches_pwm());
    }
}
