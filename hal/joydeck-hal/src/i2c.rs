//! I2C bus configuration
//!
//! The display driver talks to the bus through `embedded_hal::i2c::I2c`;
//! this module only carries the bus settings chosen at startup.

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), used by the OLED
    pub const FAST: Self = Self { frequency: 400_000 };
}
