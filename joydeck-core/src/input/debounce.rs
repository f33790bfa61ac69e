//! Button debouncing
//!
//! A press is a falling edge on an active-low input. An edge is accepted
//! only if at least the debounce window has passed since the last accepted
//! edge; anything inside the window is dropped without being queued.

use crate::config::{PanelPins, PanelTuning};

/// Physical buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Joystick push switch, toggles the border style
    Joystick,
    /// Secondary button, toggles LED suppression
    A,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::Joystick, Button::A];

    /// Slot in per-button tables
    pub const fn index(&self) -> usize {
        match self {
            Button::Joystick => 0,
            Button::A => 1,
        }
    }

    /// GPIO the button is wired to
    pub const fn gpio(&self, pins: &PanelPins) -> u8 {
        match self {
            Button::Joystick => pins.joystick_button.pin,
            Button::A => pins.button_a.pin,
        }
    }
}

/// Which timestamp an edge is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// Each button has its own window
    #[default]
    PerChannel,
    /// One window for all buttons; a press on one button suppresses a
    /// press on the other inside the window
    Shared,
}

/// Debounce state of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    pub gpio: u8,
    /// Time of the last accepted edge (ms), `None` until the first press
    pub last_event_ms: Option<u32>,
}

/// Edge filter for both panel buttons
#[derive(Debug, Clone)]
pub struct Debouncer {
    channels: [ButtonChannel; 2],
    window_ms: u32,
    scope: DebounceScope,
}

impl Debouncer {
    /// Create a debouncer for the given GPIOs (indexed by [`Button::index`])
    pub const fn new(gpios: [u8; 2], window_ms: u32, scope: DebounceScope) -> Self {
        Self {
            channels: [
                ButtonChannel {
                    gpio: gpios[0],
                    last_event_ms: None,
                },
                ButtonChannel {
                    gpio: gpios[1],
                    last_event_ms: None,
                },
            ],
            window_ms,
            scope,
        }
    }

    /// Create a debouncer from the board wiring and tuning
    pub const fn from_config(pins: &PanelPins, tuning: &PanelTuning) -> Self {
        Self::new(
            [Button::Joystick.gpio(pins), Button::A.gpio(pins)],
            tuning.debounce_window_ms,
            tuning.debounce_scope,
        )
    }

    /// Filter a falling edge seen at `now_ms`
    ///
    /// Returns true if the edge counts as a press. The first edge on a
    /// channel is always accepted. On acceptance the timestamp is updated
    /// (every channel's timestamp under [`DebounceScope::Shared`]). Elapsed
    /// time uses wrapping arithmetic so the filter keeps working across the
    /// 32-bit millisecond rollover.
    pub fn accept(&mut self, button: Button, now_ms: u32) -> bool {
        if let Some(last) = self.channels[button.index()].last_event_ms {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }

        match self.scope {
            DebounceScope::PerChannel => {
                self.channels[button.index()].last_event_ms = Some(now_ms)
            }
            DebounceScope::Shared => {
                for channel in self.channels.iter_mut() {
                    channel.last_event_ms = Some(now_ms);
                }
            }
        }
        true
    }

    pub fn channel(&self, button: Button) -> &ButtonChannel {
        &self.channels[button.index()]
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn debouncer(scope: DebounceScope) -> Debouncer {
        Debouncer::new([22, 5], 200, scope)
    }

    #[test]
    fn test_second_press_inside_window_dropped() {
        let mut d = debouncer(DebounceScope::PerChannel);
        assert!(d.accept(Button::Joystick, 1000));
        assert!(!d.accept(Button::Joystick, 1150));
        assert_eq!(d.channel(Button::Joystick).last_event_ms, Some(1000));
        assert!(d.accept(Button::Joystick, 1200));
    }

    #[test]
    fn test_first_press_at_boot_accepted() {
        let mut d = debouncer(DebounceScope::PerChannel);
        assert_eq!(d.channel(Button::A).last_event_ms, None);
        assert!(d.accept(Button::A, 0));
        assert!(!d.accept(Button::A, 150));
        assert_eq!(d.channel(Button::A).last_event_ms, Some(0));
        assert!(d.accept(Button::A, 200));
    }

    #[test]
    fn test_first_press_near_rollover_accepted() {
        let mut d = debouncer(DebounceScope::PerChannel);
        assert!(d.accept(Button::Joystick, 100));
        assert!(d.accept(Button::A, u32::MAX));
    }

    #[test]
    fn test_per_channel_buttons_independent() {
        let mut d = debouncer(DebounceScope::PerChannel);
        assert!(d.accept(Button::Joystick, 500));
        assert!(d.accept(Button::A, 550));
    }

    #[test]
    fn test_shared_scope_cross_suppresses() {
        let mut d = debouncer(DebounceScope::Shared);
        assert!(d.accept(Button::Joystick, 500));
        assert!(!d.accept(Button::A, 550));
        assert!(d.accept(Button::A, 700));
        assert_eq!(d.channel(Button::Joystick).last_event_ms, Some(700));
    }

    #[test]
    fn test_rollover() {
        let mut d = debouncer(DebounceScope::PerChannel);
        assert!(d.accept(Button::Joystick, u32::MAX - 50));
        assert!(!d.accept(Button::Joystick, 100));
        assert!(d.accept(Button::Joystick, 150));
    }

    #[test]
    fn test_from_config() {
        let d = Debouncer::from_config(&PanelPins::DEFAULT, &PanelTuning::DEFAULT);
        assert_eq!(d.channel(Button::Joystick).gpio, 22);
        assert_eq!(d.channel(Button::A).gpio, 5);
        assert_eq!(d.scope(), DebounceScope::PerChannel);
    }

    proptest! {
        #[test]
        fn prop_accept_iff_window_elapsed(last in 0u32..u32::MAX / 2, gap in 0u32..1000) {
            let mut d = debouncer(DebounceScope::PerChannel);
            prop_assert!(d.accept(Button::Joystick, last));

            let now = last + gap;
            let accepted = d.accept(Button::Joystick, now);
            prop_assert_eq!(accepted, gap >= 200);

            let expected = Some(if accepted { now } else { last });
            prop_assert_eq!(d.channel(Button::Joystick).last_event_ms, expected);
        }
    }
}
