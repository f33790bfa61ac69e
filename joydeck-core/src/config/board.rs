//! Board wiring
//!
//! Pin assignments for the joystick panel board. These are part of the
//! hardware contract and must match the PCB exactly.

use joydeck_display::SSD1306_ADDR;
use joydeck_hal::{AdcChannel, I2cConfig};

use crate::fault::ConfigFault;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with the internal pull-up enabled
    ///
    /// This is how the panel buttons are wired: pressing pulls the pin to
    /// ground, so a press is a falling edge.
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }

    /// Check the pin number exists on the chip
    pub fn validate(&self) -> Result<(), ConfigFault> {
        if self.pin >= GPIO_COUNT {
            return Err(ConfigFault::InvalidPin(self.pin));
        }
        Ok(())
    }
}

/// Pin assignments of the joystick panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelPins {
    /// Joystick push switch
    pub joystick_button: PinConfig,
    /// Secondary button ("A")
    pub button_a: PinConfig,
    /// Green LED (digital)
    pub led_green: PinConfig,
    /// Blue LED (PWM slice 6, channel A)
    pub led_blue: PinConfig,
    /// Red LED (PWM slice 6, channel B)
    pub led_red: PinConfig,
    /// OLED I2C data
    pub i2c_sda: PinConfig,
    /// OLED I2C clock
    pub i2c_scl: PinConfig,
    /// Joystick horizontal axis
    pub joystick_x: AdcChannel,
    /// Joystick vertical axis
    pub joystick_y: AdcChannel,
}

impl PanelPins {
    /// Wiring of the reference board
    pub const DEFAULT: Self = Self {
        joystick_button: PinConfig::button(22),
        button_a: PinConfig::button(5),
        led_green: PinConfig::new(11),
        led_blue: PinConfig::new(12),
        led_red: PinConfig::new(13),
        i2c_sda: PinConfig::new(14),
        i2c_scl: PinConfig::new(15),
        joystick_x: AdcChannel::Adc0,
        joystick_y: AdcChannel::Adc1,
    };

    /// Digital pins in a fixed order
    pub fn digital_pins(&self) -> [PinConfig; 7] {
        [
            self.joystick_button,
            self.button_a,
            self.led_green,
            self.led_blue,
            self.led_red,
            self.i2c_sda,
            self.i2c_scl,
        ]
    }

    /// Check every pin exists and no GPIO is used twice
    ///
    /// ADC inputs count as GPIO usage too (ADC0 is GPIO26 and so on).
    pub fn validate(&self) -> Result<(), ConfigFault> {
        let mut used = [false; GPIO_COUNT as usize];

        let analog = [self.joystick_x, self.joystick_y]
            .into_iter()
            .filter_map(|channel| channel.gpio());

        for pin in self.digital_pins().iter().map(|p| p.pin).chain(analog) {
            PinConfig::new(pin).validate()?;
            let slot = &mut used[pin as usize];
            if *slot {
                return Err(ConfigFault::PinConflict(pin));
            }
            *slot = true;
        }

        Ok(())
    }
}

impl Default for PanelPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// OLED link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bus settings
    pub i2c: I2cConfig,
}

impl DisplayConfig {
    /// 128x64 SSD1306 at 0x3C on a 400 kHz bus
    pub const DEFAULT: Self = Self {
        address: SSD1306_ADDR,
        width: 128,
        height: 64,
        i2c: I2cConfig::FAST,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LED fader wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadePins {
    /// PWM LED output (slice 6, channel A)
    pub led: PinConfig,
}

impl FadePins {
    pub const DEFAULT: Self = Self {
        led: PinConfig::new(12),
    };
}

/// Servo sweep wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoPins {
    /// Servo signal line (slice 3, channel A)
    pub signal: PinConfig,
}

impl ServoPins {
    pub const DEFAULT: Self = Self {
        signal: PinConfig::new(22),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pins_valid() {
        assert_eq!(PanelPins::DEFAULT.validate(), Ok(()));
        assert!(PanelPins::DEFAULT.joystick_button.pull_up);
        assert!(PanelPins::DEFAULT.button_a.inverted);
    }

    #[test]
    fn test_pin_conflict_detected() {
        let mut pins = PanelPins::DEFAULT;
        pins.led_red = PinConfig::new(11);
        assert_eq!(pins.validate(), Err(ConfigFault::PinConflict(11)));
    }

    #[test]
    fn test_adc_pin_conflict_detected() {
        let mut pins = PanelPins::DEFAULT;
        pins.led_green = PinConfig::new(26);
        assert_eq!(pins.validate(), Err(ConfigFault::PinConflict(26)));
    }

    #[test]
    fn test_invalid_pin_detected() {
        let mut pins = PanelPins::DEFAULT;
        pins.button_a = PinConfig::button(30);
        assert_eq!(pins.validate(), Err(ConfigFault::InvalidPin(30)));
    }
}
