//! Clock on the embassy time driver

use embassy_time::Instant;
use joydeck_hal::Clock;

/// Milliseconds since boot, truncated to 32 bits
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
