//! Display support for the Joydeck panel
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 monochrome page buffer that is an
//!   `embedded-graphics` draw target
//! - `DisplayBackend` trait for anything that owns a framebuffer and can
//!   push it to a panel
//! - `Ssd1306`, a blocking I2C driver for SSD1306 OLED controllers
//!
//! # Architecture
//!
//! The render stage draws a complete frame into the framebuffer with
//! `embedded-graphics` primitives, then calls `flush()` once so the panel
//! never shows a partially drawn frame.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod ssd1306;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::{Ssd1306, SSD1306_ADDR};
