//! ADC abstractions
//!
//! The RP2040 has a single 12-bit ADC multiplexed over five inputs:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

/// Largest value a 12-bit conversion can produce
pub const ADC_MAX: u16 = 4095;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Multiplexer input index
    pub fn index(&self) -> u8 {
        match self {
            AdcChannel::Adc0 => 0,
            AdcChannel::Adc1 => 1,
            AdcChannel::Adc2 => 2,
            AdcChannel::Adc3 => 3,
            AdcChannel::Temperature => 4,
        }
    }

    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }}

/// Errors reported by an ADC implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel is not wired to this ADC instance
    UnsupportedChannel,
    /// Conversion did not complete
    ConversionFailed,
}

/// Multiplexed analog input
///
/// Mirrors the select-then-convert flow of the hardware: select a channel,
/// then perform a blocking conversion on it.
pub trait AnalogInput {
    /// Route the ADC multiplexer to `channel`
    fn select_channel(&mut self, channel: AdcChannel) -> Result<(), AdcError>;

    /// Perform a blocking conversion on the selected channel
    ///
    /// Nominal range is `0..=ADC_MAX`; callers clamp anything above.
    fn read(&mut self) -> Result<u16, AdcError>;

    /// Select `channel` and convert it
    fn read_channel(&mut self, channel: AdcChannel) -> Result<u16, AdcError> {
        self.select_channel(channel)?;
        self.read()
    }
}
