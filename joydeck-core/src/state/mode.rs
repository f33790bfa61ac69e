//! Mode flags toggled by the buttons

use super::events::ModeChange;
use crate::input::Button;

/// Panel mode flags
///
/// `green_led_on` only toggles while LEDs are not suppressed, so lifting
/// suppression restores the green LED to its last shown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeState {
    /// Draw a second, inset border
    pub thick_border: bool,
    /// Green LED state while not suppressed
    pub green_led_on: bool,
    /// All LEDs forced off
    pub leds_suppressed: bool,
}

impl ModeState {
    /// Power-on state: thin border, all LEDs off, not suppressed
    pub const INITIAL: Self = Self {
        thick_border: false,
        green_led_on: false,
        leds_suppressed: false,
    };

    /// Apply an accepted press
    pub fn apply(&mut self, button: Button) -> ModeChange {
        match button {
            Button::Joystick => {
                self.thick_border = !self.thick_border;
                let green = if self.leds_suppressed {
                    None
                } else {
                    self.green_led_on = !self.green_led_on;
                    Some(self.green_led_on)
                };
                ModeChange::Border {
                    thick: self.thick_border,
                    green,
                }
            }
            Button::A => {
                self.leds_suppressed = !self.leds_suppressed;
                ModeChange::Suppression {
                    suppressed: self.leds_suppressed,
                }
            }
        }
    }

    /// Level the green LED pin should show
    pub fn green_output(&self) -> bool {
        self.green_led_on && !self.leds_suppressed
    }
}
