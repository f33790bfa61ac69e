//! Output stage
//!
//! Maps joystick deflection and mode flags to the two PWM LEDs, and drives
//! the green LED.

pub mod leds;
pub mod levels;

pub use leds::StatusLeds;
pub use levels::{pwm_levels, PwmLevels};
