//! LED fader
//!
//! Fades an LED on GPIO12 in and out forever with an 8-bit PWM ramp.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use joydeck_core::config::{FadePins, FadeTuning};
use joydeck_core::demo::FadeSequence;
use joydeck_hal::pwm::DEFAULT_SYS_CLK_HZ;
use joydeck_hal::PwmOutput;
use joydeck_hal_rp2040::pwm::slice_config;
use joydeck_hal_rp2040::PwmChannel;

const TUNING: FadeTuning = FadeTuning::DEFAULT;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("LED fader starting...");

    if let Err(fault) = TUNING.validate() {
        defmt::panic!("Configuration fault: {}", fault);
    }

    let p = embassy_rp::init(Default::default());

    // GPIO12 is PWM slice 6, channel A
    let slice = Pwm::new_output_a(p.PWM_SLICE6, p.PIN_12, slice_config(TUNING.pwm));
    let (output, _) = slice.split();
    let mut led = PwmChannel::new(unwrap!(output), TUNING.pwm.wrap);

    let fade = FadeSequence::from_tuning(&TUNING);
    info!(
        "LED on GPIO{}: {} Hz PWM, {} steps per fade cycle",
        FadePins::DEFAULT.led.pin,
        TUNING.pwm.frequency_hz(DEFAULT_SYS_CLK_HZ),
        fade.period()
    );

    for level in fade {
        led.set_level(level);
        Timer::after_millis(TUNING.step_ms as u64).await;
    }
}
