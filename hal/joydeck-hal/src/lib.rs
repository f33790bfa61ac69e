//! Joydeck Hardware Abstraction Layer
//!
//! This crate defines the peripheral traits the panel logic is written
//! against. Chip-specific crates (currently `joydeck-hal-rp2040`) implement
//! them on top of their HAL, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (joydeck-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joydeck-core (panel logic)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joydeck-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ joydeck-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmOutput`] - PWM duty level control
//! - [`adc::AnalogInput`] - Multiplexed 12-bit ADC
//! - [`time::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcError, AnalogInput, ADC_MAX};
pub use gpio::{Edge, InputPin, OutputPin};
pub use i2c::I2cConfig;
pub use pwm::{PwmConfig, PwmOutput};
pub use time::Clock;
