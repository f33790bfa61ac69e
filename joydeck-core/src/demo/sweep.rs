use crate::config::SweepTuning;

/// One servo command: pulse width and how long to keep it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoStep {
    pub pulse_us: u16,
    pub hold_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Fixed positions shown once after power-up
    Hold(usize),
    Rise(u16),
    Fall(u16),
}

/// Servo program
///
/// Shows 180, 90 and 0 degrees for `hold_ms` each, then sweeps from the
/// minimum to the maximum pulse and back in `step_us` increments forever.
/// Both sweep ends are inclusive.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    tuning: SweepTuning,
    phase: Phase,
}

impl SweepPlan {
    pub const fn new(tuning: SweepTuning) -> Self {
        Self {
            tuning,
            phase: Phase::Hold(0),
        }
    }

    fn hold_positions(&self) -> [u16; 3] {
        [
            self.tuning.max_pulse_us,
            self.tuning.center_pulse_us,
            self.tuning.min_pulse_us,
        ]
    }
}

impl Iterator for SweepPlan {
    type Item = ServoStep;

    fn next(&mut self) -> Option<ServoStep> {
        let t = self.tuning;
        let step = t.step_us.max(1);

        let (pulse_us, hold_ms, next) = match self.phase {
            Phase::Hold(i) => {
                let positions = self.hold_positions();
                let next = if i + 1 < positions.len() {
                    Phase::Hold(i + 1)
                } else {
                    Phase::Rise(t.min_pulse_us)
                };
                (positions[i], t.hold_ms, next)
            }
            Phase::Rise(pulse) => {
                let next = match pulse.checked_add(step) {
                    Some(p) if p <= t.max_pulse_us => Phase::Rise(p),
                    _ => Phase::Fall(t.max_pulse_us),
                };
                (pulse, t.step_ms, next)
            }
            Phase::Fall(pulse) => {
                let next = match pulse.checked_sub(step) {
                    Some(p) if p >= t.min_pulse_us => Phase::Fall(p),
                    _ => Phase::Rise(t.min_pulse_us),
                };
                (pulse, t.step_ms, next)
            }
        };

        self.phase = next;
        Some(ServoStep { pulse_us, hold_ms })
    }
}

/// Pulse width for an angle in degrees (clamped to 0-180)
///
/// Linear over the configured range; the calibrated center pulse is only
/// used by the fixed positions.
pub fn angle_to_pulse_us(angle_deg: u16, tuning: &SweepTuning) -> u16 {
    let span = tuning.max_pulse_us.saturating_sub(tuning.min_pulse_us) as u32;
    let angle = angle_deg.min(180) as u32;
    tuning.min_pulse_us + (span * angle / 180) as u16
}

/// PWM compare level producing `pulse_us`, clamped to the slice wrap
pub fn pulse_to_level(pulse_us: u16, tuning: &SweepTuning) -> u16 {
    let ticks = pulse_us as u32 * tuning.pwm.ticks_per_us(tuning.sys_clk_hz);
    ticks.min(tuning.pwm.wrap as u32) as u16
}
