//! Fault taxonomy
//!
//! Every fault is fatal: the panel has no recovery path, so callers abort
//! startup or halt the control loop. Out-of-range ADC readings are not
//! faults; the sampler clamps them.

use joydeck_display::DisplayError;
use joydeck_hal::AdcError;

/// A compile-time constant that cannot drive the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigFault {
    /// GPIO number outside 0-29
    InvalidPin(u8),
    /// Same GPIO assigned to two functions
    PinConflict(u8),
    /// Joystick center of zero
    ZeroCenter,
    /// Dead zone swallows the whole joystick travel
    DeadZoneTooWide,
    /// PWM wrap of zero
    ZeroWrap,
    /// PWM clock divider of zero
    ZeroDivider,
    /// A fixed PWM level above the slice wrap
    LevelAboveWrap,
    /// Cursor does not fit on the display
    CursorTooLarge,
    /// Servo pulse range is empty or the center lies outside it
    PulseRangeInverted,
    /// Longest servo pulse does not fit in the PWM period
    PulseBeyondPeriod,
    /// Sweep or fade step of zero
    ZeroStep,
}

/// Fatal condition reported by startup or the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Peripheral or constant failed validation at startup
    Config(ConfigFault),
    /// Display link failed
    Display(DisplayError),
    /// ADC conversion failed
    Analog(AdcError),
}

impl From<ConfigFault> for Fault {
    fn from(fault: ConfigFault) -> Self {
        Fault::Config(fault)
    }
}

impl From<DisplayError> for Fault {
    fn from(err: DisplayError) -> Self {
        Fault::Display(err)
    }
}

impl From<AdcError> for Fault {
    fn from(err: AdcError) -> Self {
        Fault::Analog(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_on_display() -> Result<(), Fault> {
        Err(DisplayError::Communication)?;
        Ok(())
    }

    #[test]
    fn test_question_mark_conversion() {
        assert_eq!(
            fails_on_display(),
            Err(Fault::Display(DisplayError::Communication))
        );
        assert_eq!(
            Fault::from(AdcError::ConversionFailed),
            Fault::Analog(AdcError::ConversionFailed)
        );
        assert_eq!(
            Fault::from(ConfigFault::ZeroWrap),
            Fault::Config(ConfigFault::ZeroWrap)
        );
    }
}
