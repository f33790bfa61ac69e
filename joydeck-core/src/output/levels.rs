//! PWM level computation

use crate::input::NormalizedDeflection;
use crate::state::ModeState;

/// Compare levels for the red and blue LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmLevels {
    pub red: u16,
    pub blue: u16,
}

impl PwmLevels {
    pub const OFF: Self = Self { red: 0, blue: 0 };

    /// Same level on both channels
    pub const fn uniform(level: u16) -> Self {
        Self {
            red: level,
            blue: level,
        }
    }
}

/// Output stage mapping
///
/// Red follows the vertical deflection and blue the horizontal one, each
/// scaled so a full deflection of `center` reaches `wrap`. Suppressed LEDs
/// are always off. Results never exceed `wrap`.
pub fn pwm_levels(
    mode: &ModeState,
    deflection: NormalizedDeflection,
    center: u16,
    wrap: u16,
) -> PwmLevels {
    if mode.leds_suppressed {
        return PwmLevels::OFF;
    }
    PwmLevels {
        red: scale(deflection.delta_y, center, wrap),
        blue: scale(deflection.delta_x, center, wrap),
    }
}

fn scale(delta: u16, center: u16, wrap: u16) -> u16 {
    let level = delta as u32 * wrap as u32 / center.max(1) as u32;
    level.min(wrap as u32) as u16
}
