//! Board-agnostic core logic for the joystick panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button debouncing and the shared mode flags
//! - Joystick sampling with center and dead-zone normalization
//! - Frame rendering (border, cursor) into the display framebuffer
//! - PWM/LED output computation and immediate resync
//! - The control loop stage machine driving sample, render and output
//! - Level sequences for the LED fader and servo sweep programs
//! - Compile-time board and tuning configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod demo;
pub mod fault;
pub mod input;
pub mod output;
pub mod render;
pub mod state;

pub use fault::{ConfigFault, Fault};
