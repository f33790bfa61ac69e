//! Compile-time configuration
//!
//! - `board`: which GPIO does what
//! - `tuning`: timings, scaling and PWM settings
//!
//! There is no runtime configuration; startup only validates these.

pub mod board;
pub mod tuning;

pub use board::*;
pub use tuning::*;

use crate::fault::ConfigFault;

/// Validate everything the joystick panel program uses
pub fn validate_panel(
    pins: &PanelPins,
    tuning: &PanelTuning,
    display: &DisplayConfig,
) -> Result<(), ConfigFault> {
    pins.validate()?;
    tuning.validate(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_board_valid() {
        assert_eq!(
            validate_panel(&PanelPins::DEFAULT, &PanelTuning::DEFAULT, &DisplayConfig::DEFAULT),
            Ok(())
        );
    }

    #[test]
    fn test_first_fault_reported() {
        let mut pins = PanelPins::DEFAULT;
        pins.i2c_scl = PinConfig::new(14);
        let tuning = PanelTuning {
            joystick_center: 0,
            ..PanelTuning::DEFAULT
        };
        assert_eq!(
            validate_panel(&pins, &tuning, &DisplayConfig::DEFAULT),
            Err(ConfigFault::PinConflict(14))
        );
    }
}
