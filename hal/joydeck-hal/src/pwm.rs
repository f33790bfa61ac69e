//! PWM output abstractions

/// Nominal RP2040 system clock feeding the PWM slices
pub const DEFAULT_SYS_CLK_HZ: u32 = 125_000_000;

/// PWM slice configuration
///
/// The counter runs from 0 to `wrap` inclusive, clocked by the system clock
/// divided by `clock_divider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Integer clock divider (1-255 on RP2040)
    pub clock_divider: u8,
    /// Counter top value
    pub wrap: u16,
}

impl PwmConfig {
    /// Create a config with the given divider and wrap
    pub const fn new(clock_divider: u8, wrap: u16) -> Self {
        Self {
            clock_divider,
            wrap,
        }
    }

    /// Output frequency for a given system clock
    pub fn frequency_hz(&self, sys_clk_hz: u32) -> u32 {
        let divider = self.clock_divider.max(1) as u32;
        sys_clk_hz / divider / (self.wrap as u32 + 1)
    }

    /// Counter ticks per microsecond for a given system clock
    pub fn ticks_per_us(&self, sys_clk_hz: u32) -> u32 {
        sys_clk_hz / self.clock_divider.max(1) as u32 / 1_000_000
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::new(1, u16::MAX)
    }
}

/// A single PWM channel driving one output pin
///
/// Implementations clamp levels above [`PwmOutput::max_level`].
pub trait PwmOutput {
    /// Set the compare level (duty = level / (max_level + 1))
    fn set_level(&mut self, level: u16);

    /// Last level written
    fn level(&self) -> u16;

    /// Highest meaningful level (the slice wrap value)
    fn max_level(&self) -> u16;

    /// Switch the output fully off
    fn off(&mut self) {
        self.set_level(0);
    }
}
