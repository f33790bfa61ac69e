//! Button tasks
//!
//! Waits for falling edges and hands them to the panel with a timestamp.
//! Edges are handled from the thread executor rather than from the GPIO
//! interrupt itself, so a press is processed at the control loop's next
//! await point (at most one ADC conversion pair, render or flush later).

use defmt::*;
use joydeck_core::input::Button;
use joydeck_hal::{Clock, Edge};
use joydeck_hal_rp2040::{ButtonPin, MonotonicClock};

use crate::panel::with_panel;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: ButtonPin<'static>, button: Button) {
    let gpio = with_panel(|panel| panel.debouncer().channel(button).gpio);
    info!("Button task started: {} on GPIO{}", button, gpio);
    let clock = MonotonicClock;

    loop {
        pin.wait_for(Edge::Falling).await;
        let now_ms = clock.now_ms();

        match with_panel(|panel| panel.handle_edge(button, now_ms)) {
            Some(change) => {
                debug!("{} pressed at {} ms: {}", button, now_ms, change);
                if change.touches_pwm() {
                    trace!("PWM LEDs resynchronized");
                } else if change.touches_green() {
                    trace!("Green LED rewritten");
                }
            }
            None => trace!("{} edge dropped at {} ms", button, now_ms),
        }
    }
}
