//! Level sequences for the two single-output programs
//!
//! Both are endless iterators; the firmware writes each item to a PWM
//! channel and waits the configured step time.

mod fade;
mod sweep;

pub use fade::FadeSequence;
pub use sweep::{angle_to_pulse_us, pulse_to_level, ServoStep, SweepPlan};
