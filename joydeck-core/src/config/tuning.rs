//! Timing and scaling constants
//!
//! Everything here is fixed at compile time. Each block has a `DEFAULT`
//! matching the reference board and a `validate` that rejects values the
//! hardware or the arithmetic cannot work with.

use joydeck_hal::pwm::DEFAULT_SYS_CLK_HZ;
use joydeck_hal::{PwmConfig, ADC_MAX};

use super::board::DisplayConfig;
use crate::fault::ConfigFault;
use crate::input::DebounceScope;

/// Joystick panel tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelTuning {
    /// Minimum time between two accepted presses (ms)
    pub debounce_window_ms: u32,
    /// Whether buttons share one debounce timestamp
    pub debounce_scope: DebounceScope,
    /// Joystick rest position in ADC counts
    pub joystick_center: u16,
    /// Deflections below this are treated as centered
    pub dead_zone: u16,
    /// Full-scale ADC reading
    pub adc_max: u16,
    /// LED PWM slice settings
    pub pwm: PwmConfig,
    /// Level written to both PWM LEDs when suppression is lifted
    pub resync_level: u16,
    /// Sleep at the end of each control cycle (ms)
    pub frame_pacing_ms: u32,
    /// Extra hold after drawing a thick border (ms)
    pub thick_border_hold_ms: u32,
    /// Side of the square cursor in pixels
    pub cursor_size: u32,
}

impl PanelTuning {
    pub const DEFAULT: Self = Self {
        debounce_window_ms: 200,
        debounce_scope: DebounceScope::PerChannel,
        joystick_center: 2048,
        dead_zone: 100,
        adc_max: ADC_MAX,
        pwm: PwmConfig::new(1, 4095),
        resync_level: 4095 / 2,
        frame_pacing_ms: 150,
        thick_border_hold_ms: 150,
        cursor_size: 8,
    };

    /// PWM wrap value (full-scale LED level)
    pub const fn pwm_wrap(&self) -> u16 {
        self.pwm.wrap
    }

    pub fn validate(&self, display: &DisplayConfig) -> Result<(), ConfigFault> {
        if self.joystick_center == 0 {
            return Err(ConfigFault::ZeroCenter);
        }
        if self.dead_zone >= self.joystick_center {
            return Err(ConfigFault::DeadZoneTooWide);
        }
        if self.pwm.wrap == 0 {
            return Err(ConfigFault::ZeroWrap);
        }
        if self.pwm.clock_divider == 0 {
            return Err(ConfigFault::ZeroDivider);
        }
        if self.resync_level > self.pwm.wrap {
            return Err(ConfigFault::LevelAboveWrap);
        }
        if self.cursor_size == 0
            || self.cursor_size > display.width
            || self.cursor_size > display.height
        {
            return Err(ConfigFault::CursorTooLarge);
        }
        Ok(())
    }
}

impl Default for PanelTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LED fader tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeTuning {
    /// PWM slice settings
    pub pwm: PwmConfig,
    /// Time between two brightness steps (ms)
    pub step_ms: u32,
    /// Brightest level of the ramp
    pub max_level: u16,
}

impl FadeTuning {
    /// 8-bit ramp, slowest integer divider, 5 ms per step
    pub const DEFAULT: Self = Self {
        pwm: PwmConfig::new(255, 255),
        step_ms: 5,
        max_level: 255,
    };

    pub fn validate(&self) -> Result<(), ConfigFault> {
        if self.pwm.wrap == 0 {
            return Err(ConfigFault::ZeroWrap);
        }
        if self.pwm.clock_divider == 0 {
            return Err(ConfigFault::ZeroDivider);
        }
        if self.max_level > self.pwm.wrap {
            return Err(ConfigFault::LevelAboveWrap);
        }
        if self.step_ms == 0 {
            return Err(ConfigFault::ZeroStep);
        }
        Ok(())
    }
}

impl Default for FadeTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Servo sweep tuning
///
/// Pulse widths are in microseconds. With the default divider one PWM tick
/// is one microsecond, so a pulse width is written to the slice unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepTuning {
    /// PWM slice settings (20 ms frame)
    pub pwm: PwmConfig,
    /// System clock feeding the slice
    pub sys_clk_hz: u32,
    /// Pulse at 0 degrees
    pub min_pulse_us: u16,
    /// Pulse at 90 degrees
    pub center_pulse_us: u16,
    /// Pulse at 180 degrees
    pub max_pulse_us: u16,
    /// How long each fixed position is held (ms)
    pub hold_ms: u32,
    /// Pulse change per sweep step
    pub step_us: u16,
    /// Time between two sweep steps (ms)
    pub step_ms: u32,
}

impl SweepTuning {
    pub const DEFAULT: Self = Self {
        pwm: PwmConfig::new(125, 19_999),
        sys_clk_hz: DEFAULT_SYS_CLK_HZ,
        min_pulse_us: 500,
        center_pulse_us: 1470,
        max_pulse_us: 2400,
        hold_ms: 5000,
        step_us: 5,
        step_ms: 10,
    };

    /// PWM period in microseconds
    pub fn period_us(&self) -> u32 {
        let ticks_per_us = self.pwm.ticks_per_us(self.sys_clk_hz).max(1);
        (self.pwm.wrap as u32 + 1) / ticks_per_us
    }

    pub fn validate(&self) -> Result<(), ConfigFault> {
        if self.pwm.wrap == 0 {
            return Err(ConfigFault::ZeroWrap);
        }
        if self.pwm.clock_divider == 0 {
            return Err(ConfigFault::ZeroDivider);
        }
        if self.min_pulse_us >= self.max_pulse_us
            || self.center_pulse_us < self.min_pulse_us
            || self.center_pulse_us > self.max_pulse_us
        {
            return Err(ConfigFault::PulseRangeInverted);
        }
        if self.pwm.ticks_per_us(self.sys_clk_hz) == 0
            || self.max_pulse_us as u32 >= self.period_us()
        {
            return Err(ConfigFault::PulseBeyondPeriod);
        }
        if self.step_us == 0 || self.step_ms == 0 {
            return Err(ConfigFault::ZeroStep);
        }
        Ok(())
    }
}

impl Default for SweepTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert_eq!(PanelTuning::DEFAULT.validate(&DisplayConfig::DEFAULT), Ok(()));
        assert_eq!(FadeTuning::DEFAULT.validate(), Ok(()));
        assert_eq!(SweepTuning::DEFAULT.validate(), Ok(()));
    }

    #[test]
    fn test_resync_level_is_half_scale() {
        assert_eq!(PanelTuning::DEFAULT.resync_level, 2047);
        assert_eq!(PanelTuning::DEFAULT.pwm_wrap(), 4095);
    }

    #[test]
    fn test_panel_rejects_bad_values() {
        let display = DisplayConfig::DEFAULT;

        let mut t = PanelTuning::DEFAULT;
        t.joystick_center = 0;
        assert_eq!(t.validate(&display), Err(ConfigFault::ZeroCenter));

        let mut t = PanelTuning::DEFAULT;
        t.dead_zone = 2048;
        assert_eq!(t.validate(&display), Err(ConfigFault::DeadZoneTooWide));

        let mut t = PanelTuning::DEFAULT;
        t.pwm.wrap = 0;
        assert_eq!(t.validate(&display), Err(ConfigFault::ZeroWrap));

        let mut t = PanelTuning::DEFAULT;
        t.resync_level = 5000;
        assert_eq!(t.validate(&display), Err(ConfigFault::LevelAboveWrap));

        let mut t = PanelTuning::DEFAULT;
        t.cursor_size = 65;
        assert_eq!(t.validate(&display), Err(ConfigFault::CursorTooLarge));
    }

    #[test]
    fn test_servo_period() {
        assert_eq!(SweepTuning::DEFAULT.period_us(), 20_000);
    }

    #[test]
    fn test_sweep_rejects_bad_values() {
        let mut t = SweepTuning::DEFAULT;
        t.min_pulse_us = 2400;
        assert_eq!(t.validate(), Err(ConfigFault::PulseRangeInverted));

        let mut t = SweepTuning::DEFAULT;
        t.max_pulse_us = 25_000;
        assert_eq!(t.validate(), Err(ConfigFault::PulseBeyondPeriod));

        let mut t = SweepTuning::DEFAULT;
        t.step_us = 0;
        assert_eq!(t.validate(), Err(ConfigFault::ZeroStep));
    }

    #[test]
    fn test_fade_rejects_level_above_wrap() {
        let mut t = FadeTuning::DEFAULT;
        t.max_level = 300;
        assert_eq!(t.validate(), Err(ConfigFault::LevelAboveWrap));
    }
}
