//! PWM channels
//!
//! A slice is created with [`slice_config`] and split into its A and B
//! outputs; each output is wrapped in a [`PwmChannel`].

use embedded_hal::pwm::SetDutyCycle;
use joydeck_hal::{PwmConfig, PwmOutput};

/// Translate a slice configuration for `embassy_rp::pwm`
///
/// Both compare levels start at zero so outputs come up dark.
pub fn slice_config(config: PwmConfig) -> embassy_rp::pwm::Config {
    let mut cfg = embassy_rp::pwm::Config::default();
    cfg.top = config.wrap;
    cfg.divider = config.clock_divider.max(1).into();
    cfg.compare_a = 0;
    cfg.compare_b = 0;
    cfg
}

/// One compare channel of a PWM slice
pub struct PwmChannel<P> {
    output: P,
    wrap: u16,
    level: u16,
}

impl<P: SetDutyCycle> PwmChannel<P> {
    /// Wrap an output whose slice runs with `wrap` as counter top
    pub fn new(output: P, wrap: u16) -> Self {
        Self {
            output,
            wrap,
            level: 0,
        }
    }
}

impl<P: SetDutyCycle> PwmOutput for PwmChannel<P> {
    fn set_level(&mut self, level: u16) {
        let level = level.min(self.wrap);
        match self.output.set_duty_cycle(level) {
            Ok(()) => self.level = level,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("PWM duty write of {} rejected, keeping {}", level, self.level);
            }
        }
    }

    fn level(&self) -> u16 {
        self.level
    }

    fn max_level(&self) -> u16 {
        self.wrap
    }
}
