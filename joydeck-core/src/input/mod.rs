//! Panel inputs
//!
//! Debounced button edges and the joystick sampler.

pub mod debounce;
pub mod joystick;

pub use debounce::{Button, ButtonChannel, DebounceScope, Debouncer};
pub use joystick::{AnalogSample, JoystickSampler, NormalizedDeflection};
