//! Control loop stage machine
//!
//! One cycle is `Sample -> Render -> Flush -> Output -> Pace`. The loop never
//! sleeps itself: stages that need a pause return [`Step::Sleep`] and the
//! caller waits (an embassy timer on target, a recorder in tests).

use joydeck_display::DisplayBackend;
use joydeck_hal::AnalogInput;

use super::panel::PanelHandle;
use crate::config::{PanelPins, PanelTuning};
use crate::fault::Fault;
use crate::input::{AnalogSample, JoystickSampler};
use crate::output::PwmLevels;
use crate::render::{draw_scene, RenderReport};

/// Stage that runs on the next call to [`ControlLoop::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Convert both joystick axes
    Sample,
    /// Draw border and cursor into the framebuffer
    Render,
    /// Send the framebuffer to the display
    Flush,
    /// Compute and write the PWM LED levels
    Output,
    /// End-of-cycle pause
    Pace,
}

/// What the caller should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Run the next stage right away
    Continue,
    /// Wait this many milliseconds before the next stage
    Sleep(u32),
}

/// Drives sampling, rendering and LED output
pub struct ControlLoop<A, D> {
    adc: A,
    display: D,
    sampler: JoystickSampler,
    tuning: PanelTuning,
    stage: Stage,
    sample: AnalogSample,
    last_render: Option<RenderReport>,
    last_levels: PwmLevels,
    cycles: u32,
}

impl<A: AnalogInput, D: DisplayBackend> ControlLoop<A, D> {
    /// Create a loop over an initialized display
    pub fn new(adc: A, display: D, pins: &PanelPins, tuning: PanelTuning) -> Self {
        Self {
            adc,
            display,
            sampler: JoystickSampler::new(pins.joystick_x, pins.joystick_y, tuning.adc_max),
            tuning,
            stage: Stage::Sample,
            sample: AnalogSample::CENTERED,
            last_render: None,
            last_levels: PwmLevels::OFF,
            cycles: 0,
        }
    }

    /// Run the current stage and advance
    ///
    /// The panel is reached once in `Render` (mode snapshot) and once in
    /// `Output`. ADC conversions and the display flush never happen while
    /// the panel is borrowed.
    pub fn step<P: PanelHandle>(&mut self, panel: &mut P) -> Result<Step, Fault> {
        match self.stage {
            Stage::Sample => {
                self.sample = self.sampler.sample(&mut self.adc)?;
                self.stage = Stage::Render;
                Ok(Step::Continue)
            }
            Stage::Render => {
                let mode = panel.mode();
                let report = draw_scene(self.display.frame(), &mode, self.sample, &self.tuning)
                    .unwrap_or_else(|never| match never {});
                self.last_render = Some(report);
                self.stage = Stage::Flush;
                if report.hold_ms > 0 {
                    Ok(Step::Sleep(report.hold_ms))
                } else {
                    Ok(Step::Continue)
                }
            }
            Stage::Flush => {
                self.display.flush()?;
                self.stage = Stage::Output;
                Ok(Step::Continue)
            }
            Stage::Output => {
                self.last_levels = panel.update_outputs(self.sample);
                self.stage = Stage::Pace;
                Ok(Step::Continue)
            }
            Stage::Pace => {
                self.cycles = self.cycles.wrapping_add(1);
                self.stage = Stage::Sample;
                Ok(Step::Sleep(self.tuning.frame_pacing_ms))
            }
        }
    }

    /// Run stages until the loop is back at `Sample`
    ///
    /// `sleep` is called for every pause, in order.
    pub fn run_cycle<P, S>(&mut self, panel: &mut P, mut sleep: S) -> Result<(), Fault>
    where
        P: PanelHandle,
        S: FnMut(u32),
    {
        loop {
            if let Step::Sleep(ms) = self.step(panel)? {
                sleep(ms);
            }
            if self.stage == Stage::Sample {
                return Ok(());
            }
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Sample taken in the current (or last) cycle
    pub fn sample(&self) -> AnalogSample {
        self.sample
    }

    pub fn last_render(&self) -> Option<RenderReport> {
        self.last_render
    }

    pub fn last_levels(&self) -> PwmLevels {
        self.last_levels
    }

    /// Completed cycles
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Clamped ADC readings so far
    pub fn anomalies(&self) -> u32 {
        self.sampler.anomalies()
    }

    pub fn display(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn release(self) -> (A, D) {
        (self.adc, self.display)
    }
}
