//! Servomotor sweep
//!
//! Drives a hobby servo on GPIO22 with a 50 Hz PWM signal: shows 180, 90
//! and 0 degrees for five seconds each, then sweeps back and forth forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use joydeck_core::config::{ServoPins, SweepTuning};
use joydeck_core::demo::{angle_to_pulse_us, pulse_to_level, SweepPlan};
use joydeck_hal::PwmOutput;
use joydeck_hal_rp2040::pwm::slice_config;
use joydeck_hal_rp2040::PwmChannel;

const TUNING: SweepTuning = SweepTuning::DEFAULT;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Servo sweep starting...");

    if let Err(fault) = TUNING.validate() {
        defmt::panic!("Configuration fault: {}", fault);
    }

    let p = embassy_rp::init(Default::default());

    // GPIO22 is PWM slice 3, channel A
    let slice = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, slice_config(TUNING.pwm));
    let (output, _) = slice.split();
    let mut servo = PwmChannel::new(unwrap!(output), TUNING.pwm.wrap);

    info!(
        "Servo on GPIO{}: {} Hz frame, {}-{} us (90 deg nominal {} us, calibrated {} us)",
        ServoPins::DEFAULT.signal.pin,
        TUNING.pwm.frequency_hz(TUNING.sys_clk_hz),
        TUNING.min_pulse_us,
        TUNING.max_pulse_us,
        angle_to_pulse_us(90, &TUNING),
        TUNING.center_pulse_us
    );

    let mut announced = false;
    for step in SweepPlan::new(TUNING) {
        servo.set_level(pulse_to_level(step.pulse_us, &TUNING));
        if step.hold_ms == TUNING.hold_ms {
            info!("Holding {} us for {} ms", step.pulse_us, step.hold_ms);
        } else if !announced {
            info!(
                "Sweeping in {} us steps every {} ms",
                TUNING.step_us, TUNING.step_ms
            );
            announced = true;
        }
        Timer::after_millis(step.hold_ms as u64).await;
    }
}
