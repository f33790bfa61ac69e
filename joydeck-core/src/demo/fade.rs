//! LED fade program
//!
//! Brightness levels for a single PWM LED ramping up and down forever.

use crate::config::FadeTuning;

/// Triangle ramp `0..=max` then `max..=0`, repeating
///
/// Both ends are emitted twice in a row (once at the end of one ramp, once
/// at the start of the next), so a full period is `2 * (max + 1)` steps.
#[derive(Debug, Clone)]
pub struct FadeSequence {
    max_level: u16,
    position: u32,
}

impl FadeSequence {
    pub const fn new(max_level: u16) -> Self {
        Self {
            max_level,
            position: 0,
        }
    }

    pub const fn from_tuning(tuning: &FadeTuning) -> Self {
        Self::new(tuning.max_level)
    }

    /// Steps in one fade in plus fade out
    pub fn period(&self) -> u32 {
        2 * (self.max_level as u32 + 1)
    }
}

impl Iterator for FadeSequence {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let max = self.max_level as u32;
        let level = if self.position <= max {
            self.position
        } else {
            2 * max + 1 - self.position
        };
        self.position = (self.position + 1) % self.period();
        Some(level as u16)
    }
}
