//! Panel coordinator
//!
//! Owns the mode flags, the button filter and the status LEDs. Both the
//! button path and the control loop go through it.

use joydeck_hal::{OutputPin, PwmOutput};

use crate::config::{PanelPins, PanelTuning};
use crate::input::{AnalogSample, Button, Debouncer, NormalizedDeflection};
use crate::output::{pwm_levels, PwmLevels, StatusLeds};
use crate::state::{ModeChange, ModeState};

/// Access to the panel from the control loop
///
/// Each call is one short critical operation. The firmware implements this
/// on a mutex-guarded panel and takes the lock per call.
pub trait PanelHandle {
    /// Snapshot of the mode flags
    fn mode(&mut self) -> ModeState;

    /// Run the output stage for `sample` and write the PWM LEDs
    fn update_outputs(&mut self, sample: AnalogSample) -> PwmLevels;
}

/// Mode flags, button filter and LEDs of the joystick panel
pub struct Panel<G, R, B> {
    mode: ModeState,
    debouncer: Debouncer,
    leds: StatusLeds<G, R, B>,
    tuning: PanelTuning,
}

impl<G: OutputPin, R: PwmOutput, B: PwmOutput> Panel<G, R, B> {
    pub fn new(leds: StatusLeds<G, R, B>, pins: &PanelPins, tuning: PanelTuning) -> Self {
        Self {
            mode: ModeState::INITIAL,
            debouncer: Debouncer::from_config(pins, &tuning),
            leds,
            tuning,
        }
    }

    /// Handle a falling edge on `button`
    ///
    /// Returns `None` if the edge was inside the debounce window. Accepted
    /// presses update the LEDs before returning: the green LED on a
    /// joystick press (unless suppressed), all three LEDs on a button A
    /// press.
    pub fn handle_edge(&mut self, button: Button, now_ms: u32) -> Option<ModeChange> {
        if !self.debouncer.accept(button, now_ms) {
            return None;
        }

        let change = self.mode.apply(button);
        match change {
            ModeChange::Border {
                green: Some(on), ..
            } => self.leds.set_green(on),
            ModeChange::Border { green: None, .. } => {}
            ModeChange::Suppression { .. } => {
                self.leds.resync(&self.mode, self.tuning.resync_level)
            }
        }
        Some(change)
    }

    /// Output stage: normalize `sample`, compute and write PWM levels
    pub fn update_outputs(&mut self, sample: AnalogSample) -> PwmLevels {
        let deflection = NormalizedDeflection::from_sample(
            sample,
            self.tuning.joystick_center,
            self.tuning.dead_zone,
        );
        let levels = pwm_levels(
            &self.mode,
            deflection,
            self.tuning.joystick_center,
            self.tuning.pwm_wrap(),
        );
        self.leds.apply(levels);
        levels
    }

    pub fn mode(&self) -> ModeState {
        self.mode
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn leds(&self) -> &StatusLeds<G, R, B> {
        &self.leds
    }
}

impl<G: OutputPin, R: PwmOutput, B: PwmOutput> PanelHandle for Panel<G, R, B> {
    fn mode(&mut self) -> ModeState {
        self.mode
    }

    fn update_outputs(&mut self, sample: AnalogSample) -> PwmLevels {
        Panel::update_outputs(self, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::leds::mock::{leds, MockPin, MockPwm};

    type TestPanel = Panel<MockPin, MockPwm, MockPwm>;

    fn panel() -> TestPanel {
        Panel::new(leds(), &PanelPins::DEFAULT, PanelTuning::DEFAULT)
    }

    #[test]
    fn test_joystick_press_toggles_border_and_green() {
        let mut p = panel();
        let change = p.handle_edge(Button::Joystick, 1000);
        assert_eq!(
            change,
            Some(ModeChange::Border {
                thick: true,
                green: Some(true)
            })
        );
        assert!(p.mode().thick_border);
        assert!(p.leds().green_is_on());
    }

    #[test]
    fn test_bounce_dropped() {
        let mut p = panel();
        assert!(p.handle_edge(Button::Joystick, 1000).is_some());
        assert_eq!(p.handle_edge(Button::Joystick, 1150), None);
        assert!(p.mode().thick_border);
    }

    #[test]
    fn test_presses_at_zero_and_150_toggle_once() {
        let mut p = panel();
        assert!(p.handle_edge(Button::Joystick, 0).is_some());
        assert_eq!(p.handle_edge(Button::Joystick, 150), None);
        assert!(p.mode().thick_border);
        assert!(p.leds().green_is_on());
    }

    #[test]
    fn test_suppression_resync_ignores_stick() {
        let mut p = panel();
        p.update_outputs(AnalogSample::new(0, 4095));
        assert_ne!(p.leds().levels(), PwmLevels::OFF);

        p.handle_edge(Button::A, 1000);
        assert_eq!(p.leds().levels(), PwmLevels::OFF);
        assert_eq!(p.update_outputs(AnalogSample::new(0, 4095)), PwmLevels::OFF);

        p.handle_edge(Button::A, 1300);
        assert_eq!(p.leds().levels(), PwmLevels::uniform(2047));
    }

    #[test]
    fn test_suppressed_joystick_press_keeps_green_off() {
        let mut p = panel();
        p.handle_edge(Button::Joystick, 1000);
        p.handle_edge(Button::A, 1300);
        assert!(!p.leds().green_is_on());

        let change = p.handle_edge(Button::Joystick, 1600);
        assert_eq!(
            change,
            Some(ModeChange::Border {
                thick: false,
                green: None
            })
        );
        assert!(!p.leds().green_is_on());

        // Lifting suppression restores the remembered green state
        p.handle_edge(Button::A, 1900);
        assert!(p.leds().green_is_on());
    }

    #[test]
    fn test_scenario_red_follows_vertical() {
        let mut p = panel();
        let levels = p.update_outputs(AnalogSample::new(2048, 4048));
        assert_eq!(levels, PwmLevels { red: 3999, blue: 0 });
        assert_eq!(p.leds().levels(), levels);
    }

    #[test]
    fn test_shared_scope() {
        let tuning = PanelTuning {
            debounce_scope: crate::input::DebounceScope::Shared,
            ..PanelTuning::DEFAULT
        };
        let mut p: TestPanel = Panel::new(leds(), &PanelPins::DEFAULT, tuning);
        assert!(p.handle_edge(Button::Joystick, 1000).is_some());
        assert_eq!(p.handle_edge(Button::A, 1100), None);
        assert!(!p.mode().leds_suppressed);
    }
}
