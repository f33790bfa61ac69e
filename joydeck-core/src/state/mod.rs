//! Shared mode flags
//!
//! `ModeState` is the only state touched by both the button path and the
//! control loop. It is only ever changed through [`ModeState::apply`], which
//! reports what changed so the caller can update the LEDs in the same step.

mod events;
mod mode;

pub use events::ModeChange;
pub use mode::ModeState;
