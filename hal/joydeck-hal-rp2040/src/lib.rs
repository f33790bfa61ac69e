//! RP2040 HAL for the joystick panel firmware
//!
//! Thin newtypes over `embassy-rp` drivers that implement the shared
//! `joydeck-hal` traits:
//!
//! - [`gpio::LedPin`] / [`gpio::ButtonPin`] - digital LED output and button input
//! - [`pwm::PwmChannel`] - one PWM compare channel with a fixed wrap
//! - [`adc::JoystickAdc`] - blocking conversions on the joystick inputs
//! - [`time::MonotonicClock`] - millisecond clock on the embassy time driver
//!
//! Peripheral configuration helpers translate the board-agnostic config
//! types into their `embassy-rp` equivalents.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

pub use adc::JoystickAdc;
pub use gpio::{ButtonPin, LedPin};
pub use pwm::PwmChannel;
pub use time::MonotonicClock;
