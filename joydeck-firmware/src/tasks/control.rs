//! Control loop task
//!
//! Steps the control loop forever, sleeping where it asks to. Any fault is
//! fatal.

use defmt::*;
use embassy_time::Timer;
use joydeck_core::control::Step;

use crate::panel::{BoardControl, SharedPanel};

#[embassy_executor::task]
pub async fn control_task(mut control: BoardControl) {
    info!("Control loop started");
    let mut panel = SharedPanel;
    let mut anomalies = 0;

    loop {
        match control.step(&mut panel) {
            Ok(Step::Continue) => {}
            Ok(Step::Sleep(ms)) => Timer::after_millis(ms as u64).await,
            Err(fault) => {
                error!("Control loop fault: {}", fault);
                defmt::panic!("halting after {} cycles", control.cycles());
            }
        }

        if control.anomalies() != anomalies {
            anomalies = control.anomalies();
            warn!("ADC reading above full scale clamped ({} so far)", anomalies);
        }
    }
}
