//! Time source abstraction

/// Monotonic millisecond clock
///
/// The value wraps after ~49 days; consumers compare timestamps with
/// wrapping arithmetic.
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;
}
