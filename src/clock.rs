//! Millisecond clock source
//!
//! The control loop only ever compares "now" against stored marks, so the
//! clock is a plain wrapping `u32` counter. Subtraction wraps, which keeps
//! elapsed-time checks correct across the counter rollover (~49.7 days).

use embassy_time::{Duration, Instant};

/// Monotonic millisecond counter that wraps after `u32::MAX`
pub trait Clock {
    /// Current time in milliseconds
    fn now_millis(&mut self) -> u32;
}

/// Clock backed by the `embassy-time` driver of the target
///
/// Truncates the 64-bit tick count to 32 bits, giving the same rollover
/// behavior as a native millisecond counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&mut self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Milliseconds elapsed from `mark` to `now`, tolerant of counter wraparound
#[inline]
pub const fn elapsed_since(now: u32, mark: u32) -> u32 {
    now.wrapping_sub(mark)
}

/// Returns if at least `interval` has passed since `mark`
#[inline]
pub const fn has_elapsed(now: u32, mark: u32, interval: Duration) -> bool {
    elapsed_since(now, mark) as u64 >= interval.as_millis()
}
