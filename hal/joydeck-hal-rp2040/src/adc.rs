//! Joystick ADC
//!
//! The two joystick axes sit on ADC0 (GPIO26) and ADC1 (GPIO27). Channels
//! are selected by id and converted with a blocking read, the same
//! select-then-convert flow as the raw peripheral.

use embassy_rp::adc::{Adc, Blocking, Channel};
use joydeck_hal::{AdcChannel, AdcError, AnalogInput};

/// Blocking ADC with a fixed set of wired inputs
pub struct JoystickAdc<'d, const N: usize> {
    adc: Adc<'d, Blocking>,
    inputs: [(AdcChannel, Channel<'d>); N],
    selected: Option<usize>,
}

impl<'d, const N: usize> JoystickAdc<'d, N> {
    /// Each input is paired with the channel id it answers to
    pub fn new(adc: Adc<'d, Blocking>, inputs: [(AdcChannel, Channel<'d>); N]) -> Self {
        Self {
            adc,
            inputs,
            selected: None,
        }
    }
}

impl<const N: usize> AnalogInput for JoystickAdc<'_, N> {
    fn select_channel(&mut self, channel: AdcChannel) -> Result<(), AdcError> {
        let slot = self
            .inputs
            .iter()
            .position(|(id, _)| *id == channel)
            .ok_or(AdcError::UnsupportedChannel)?;
        self.selected = Some(slot);
        Ok(())
    }

    fn read(&mut self) -> Result<u16, AdcError> {
        let slot = self.selected.ok_or(AdcError::UnsupportedChannel)?;
        let (_, channel) = &mut self.inputs[slot];
        self.adc
            .blocking_read(channel)
            .map_err(|_| AdcError::ConversionFailed)
    }
}
