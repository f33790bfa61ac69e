//! Status LED driver
//!
//! Green is a plain digital output. Red and blue share one PWM slice with
//! independent compare levels.

use joydeck_hal::{OutputPin, PwmOutput};

use super::levels::PwmLevels;
use crate::state::ModeState;

/// The three panel LEDs
pub struct StatusLeds<G, R, B> {
    green: G,
    red: R,
    blue: B,
}

impl<G: OutputPin, R: PwmOutput, B: PwmOutput> StatusLeds<G, R, B> {
    /// Take ownership of the outputs and switch them all off
    pub fn new(green: G, red: R, blue: B) -> Self {
        let mut leds = Self { green, red, blue };
        leds.all_off();
        leds
    }

    pub fn set_green(&mut self, on: bool) {
        self.green.set_state(on);
    }

    pub fn green_is_on(&self) -> bool {
        self.green.is_set_high()
    }

    /// Write both PWM levels
    pub fn apply(&mut self, levels: PwmLevels) {
        self.red.set_level(levels.red);
        self.blue.set_level(levels.blue);
    }

    /// Current PWM levels as last written
    pub fn levels(&self) -> PwmLevels {
        PwmLevels {
            red: self.red.level(),
            blue: self.blue.level(),
        }
    }

    /// Rewrite all three LEDs from the mode flags
    ///
    /// PWM LEDs get the fixed `level` when not suppressed; the joystick is
    /// not consulted.
    pub fn resync(&mut self, mode: &ModeState, level: u16) {
        self.set_green(mode.green_output());
        if mode.leds_suppressed {
            self.apply(PwmLevels::OFF);
        } else {
            self.apply(PwmLevels::uniform(level));
        }
    }

    pub fn all_off(&mut self) {
        self.green.set_low();
        self.red.off();
        self.blue.off();
    }

    /// Give the outputs back
    pub fn release(self) -> (G, R, B) {
        (self.green, self.red, self.blue)
    }
}
