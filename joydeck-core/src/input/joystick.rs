//! Joystick sampling and normalization

use joydeck_hal::{AdcChannel, AdcError, AnalogInput};

/// One raw reading of both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    /// Horizontal axis (ADC0)
    pub raw_x: u16,
    /// Vertical axis (ADC1)
    pub raw_y: u16,
}

impl AnalogSample {
    /// Stick at rest
    pub const CENTERED: Self = Self {
        raw_x: 2048,
        raw_y: 2048,
    };

    pub const fn new(raw_x: u16, raw_y: u16) -> Self {
        Self { raw_x, raw_y }
    }
}

/// Distance of each axis from the rest position
///
/// Always in `0..=center`: deflections inside the dead zone read as zero
/// and anything beyond the center distance is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NormalizedDeflection {
    pub delta_x: u16,
    pub delta_y: u16,
}

impl NormalizedDeflection {
    pub fn from_sample(sample: AnalogSample, center: u16, dead_zone: u16) -> Self {
        Self {
            delta_x: axis_deflection(sample.raw_x, center, dead_zone),
            delta_y: axis_deflection(sample.raw_y, center, dead_zone),
        }
    }
}

fn axis_deflection(raw: u16, center: u16, dead_zone: u16) -> u16 {
    let delta = raw.abs_diff(center);
    if delta < dead_zone {
        0
    } else {
        delta.min(center)
    }
}

/// Reads both joystick axes from a multiplexed ADC
///
/// Readings above `adc_max` are clamped and counted; they never fail the
/// sample.
#[derive(Debug, Clone)]
pub struct JoystickSampler {
    x: AdcChannel,
    y: AdcChannel,
    adc_max: u16,
    anomalies: u32,
}

impl JoystickSampler {
    pub const fn new(x: AdcChannel, y: AdcChannel, adc_max: u16) -> Self {
        Self {
            x,
            y,
            adc_max,
            anomalies: 0,
        }
    }

    /// Convert X then Y
    pub fn sample<A: AnalogInput>(&mut self, adc: &mut A) -> Result<AnalogSample, AdcError> {
        let raw_x = adc.read_channel(self.x)?;
        let raw_x = self.clamp(raw_x);
        let raw_y = adc.read_channel(self.y)?;
        let raw_y = self.clamp(raw_y);
        Ok(AnalogSample { raw_x, raw_y })
    }

    /// Number of readings clamped since startup
    pub fn anomalies(&self) -> u32 {
        self.anomalies
    }

    fn clamp(&mut self, raw: u16) -> u16 {
        if raw > self.adc_max {
            self.anomalies = self.anomalies.wrapping_add(1);
            self.adc_max
        } else {
            raw
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// ADC returning fixed values per channel
    pub struct MockAdc {
        pub values: [u16; 5],
        pub selected: Option<AdcChannel>,
        pub conversions: u32,
        pub fail: bool,
    }

    impl MockAdc {
        pub fn new(raw_x: u16, raw_y: u16) -> Self {
            Self {
                values: [raw_x, raw_y, 0, 0, 0],
                selected: None,
                conversions: 0,
                fail: false,
            }
        }

        pub fn set(&mut self, raw_x: u16, raw_y: u16) {
            self.values[0] = raw_x;
            self.values[1] = raw_y;
        }
    }

    impl AnalogInput for MockAdc {
        fn select_channel(&mut self, channel: AdcChannel) -> Result<(), AdcError> {
            self.selected = Some(channel);
            Ok(())
        }

        fn read(&mut self) -> Result<u16, AdcError> {
            if self.fail {
                return Err(AdcError::ConversionFailed);
            }
            let channel = self.selected.ok_or(AdcError::UnsupportedChannel)?;
            self.conversions += 1;
            Ok(self.values[channel.index() as usize])
        }
    }
}
