//! Panel shared between the button tasks and the control loop
//!
//! Every access goes through a critical section, so a button press and its
//! LED writes are never interleaved with the output stage.

use core::cell::RefCell;

use defmt::unwrap;

use embassy_rp::i2c::{Blocking as I2cBlocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::PwmOutput as SliceOutput;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use joydeck_core::control::{ControlLoop, Panel, PanelHandle};
use joydeck_core::input::AnalogSample;
use joydeck_core::output::PwmLevels;
use joydeck_core::state::ModeState;
use joydeck_display::Ssd1306;
use joydeck_hal_rp2040::{JoystickAdc, LedPin, PwmChannel};

/// Panel wired to the RP2040 outputs
pub type BoardPanel =
    Panel<LedPin<'static>, PwmChannel<SliceOutput<'static>>, PwmChannel<SliceOutput<'static>>>;

/// Control loop over the joystick ADC inputs and the I2C1 OLED
pub type BoardControl =
    ControlLoop<JoystickAdc<'static, 2>, Ssd1306<I2c<'static, I2C1, I2cBlocking>>>;

/// The panel, installed once at startup
pub static PANEL: Mutex<CriticalSectionRawMutex, RefCell<Option<BoardPanel>>> =
    Mutex::new(RefCell::new(None));

/// Install the panel before any task runs
pub fn install(panel: BoardPanel) {
    PANEL.lock(|cell| *cell.borrow_mut() = Some(panel));
}

/// Run `f` on the panel inside a critical section
///
/// Panics if called before [`install`].
pub fn with_panel<R>(f: impl FnOnce(&mut BoardPanel) -> R) -> R {
    PANEL.lock(|cell| {
        let mut slot = cell.borrow_mut();
        let panel = unwrap!(slot.as_mut(), "panel used before install");
        f(panel)
    })
}

/// [`PanelHandle`] that locks [`PANEL`] for each call
pub struct SharedPanel;

impl PanelHandle for SharedPanel {
    fn mode(&mut self) -> ModeState {
        with_panel(|panel| panel.mode())
    }

    fn update_outputs(&mut self, sample: AnalogSample) -> PwmLevels {
        with_panel(|panel| panel.update_outputs(sample))
    }
}
