//! Digital pins

use embassy_rp::gpio::{Input, Output};
use joydeck_hal::{Edge, InputPin, OutputPin};

/// Push-pull LED output
pub struct LedPin<'d>(Output<'d>);

impl<'d> LedPin<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for LedPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Button input with edge waiting
pub struct ButtonPin<'d>(Input<'d>);

impl<'d> ButtonPin<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self(input)
    }

    /// Wait for the next transition matching `edge`
    pub async fn wait_for(&mut self, edge: Edge) {
        match edge {
            Edge::Falling => self.0.wait_for_falling_edge().await,
            Edge::Rising => self.0.wait_for_rising_edge().await,
            Edge::Both => self.0.wait_for_any_edge().await,
        }
    }
}

impl InputPin for ButtonPin<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
