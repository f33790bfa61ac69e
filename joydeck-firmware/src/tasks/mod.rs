//! Embassy async tasks
//!
//! The control loop runs in one task; each button waits for its edges in
//! its own task. They share state only through [`crate::panel::PANEL`].

pub mod buttons;
pub mod control;

pub use buttons::button_task;
pub use control::control_task;
