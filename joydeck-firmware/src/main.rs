//! Joydeck - joystick panel firmware
//!
//! An analog joystick moves an 8x8 cursor on a 128x64 OLED and sets the
//! brightness of a red and a blue LED. The joystick button toggles a thick
//! border (and the green LED); button A switches all LEDs off and on.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use joydeck_core::config::{validate_panel, DisplayConfig, PanelPins, PanelTuning, PinConfig};
use joydeck_core::control::{ControlLoop, Panel};
use joydeck_core::input::Button;
use joydeck_core::output::StatusLeds;
use joydeck_display::Ssd1306;
use joydeck_hal::pwm::DEFAULT_SYS_CLK_HZ;
use joydeck_hal::InputPin;
use joydeck_hal_rp2040::i2c::i2c_config;
use joydeck_hal_rp2040::pwm::slice_config;
use joydeck_hal_rp2040::{ButtonPin, JoystickAdc, LedPin, PwmChannel};

mod panel;
mod tasks;

/// Board wiring; the peripherals taken below must match it
const PINS: PanelPins = PanelPins::DEFAULT;
const TUNING: PanelTuning = PanelTuning::DEFAULT;
const DISPLAY: DisplayConfig = DisplayConfig::DEFAULT;

fn pull(pin: &PinConfig) -> Pull {
    if pin.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joydeck firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    if let Err(fault) = validate_panel(&PINS, &TUNING, &DISPLAY) {
        defmt::panic!("Configuration fault: {}", fault);
    }

    // OLED on I2C1 (SDA GPIO14, SCL GPIO15)
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config(DISPLAY.i2c));
    let mut display = Ssd1306::with_address(i2c, DISPLAY.address);
    if let Err(err) = display.init() {
        defmt::panic!("OLED init failed at {=u8:#x}: {}", display.address(), err);
    }
    info!(
        "OLED initialized: {}x{} at {=u8:#x}, {} Hz",
        DISPLAY.width,
        DISPLAY.height,
        display.address(),
        DISPLAY.i2c.frequency
    );

    // Joystick on ADC0 (GPIO26) and ADC1 (GPIO27)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let joy_x = Channel::new_pin(p.PIN_26, Pull::None);
    let joy_y = Channel::new_pin(p.PIN_27, Pull::None);
    let adc = JoystickAdc::new(adc, [(PINS.joystick_x, joy_x), (PINS.joystick_y, joy_y)]);
    info!("ADC initialized: X={}, Y={}", PINS.joystick_x, PINS.joystick_y);

    // Buttons, active low
    let joy_button = ButtonPin::new(Input::new(p.PIN_22, pull(&PINS.joystick_button)));
    let button_a = ButtonPin::new(Input::new(p.PIN_5, pull(&PINS.button_a)));
    info!(
        "Buttons initialized: joystick={} a={} (high = released)",
        joy_button.is_high(),
        button_a.is_high()
    );

    // Green LED on GPIO11, blue/red on PWM slice 6 (GPIO12 = A, GPIO13 = B)
    let green = LedPin::new(Output::new(p.PIN_11, Level::Low));
    let slice = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, slice_config(TUNING.pwm));
    let (blue, red) = slice.split();
    let wrap = TUNING.pwm_wrap();
    let leds = StatusLeds::new(
        green,
        PwmChannel::new(unwrap!(red), wrap),
        PwmChannel::new(unwrap!(blue), wrap),
    );
    info!(
        "LEDs initialized: PWM {} Hz, wrap {}",
        TUNING.pwm.frequency_hz(DEFAULT_SYS_CLK_HZ),
        wrap
    );

    panel::install(Panel::new(leds, &PINS, TUNING));
    let control = ControlLoop::new(adc, display, &PINS, TUNING);

    // Spawn tasks
    spawner.spawn(tasks::button_task(joy_button, Button::Joystick).unwrap());
    spawner.spawn(tasks::button_task(button_a, Button::A).unwrap());
    spawner.spawn(tasks::control_task(control).unwrap());

    info!("All tasks spawned, panel running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
