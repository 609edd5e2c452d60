//! Frame pacing for the active pattern.
//!
//! Unlike a fixed-rate scheduler, the frame period here belongs to whichever
//! renderer ran last: every renderer hands back the interval it wants before
//! its next frame. The scheduler never sleeps; the caller polls [`is_due`]
//! every loop iteration.
//!
//! [`is_due`]: FrameScheduler::is_due

use embassy_time::Duration;

use crate::clock::has_elapsed;

/// Frame period used until the first renderer reports its own.
pub const INITIAL_RENDER_INTERVAL: Duration = Duration::from_millis(50);

/// Shortest accepted frame period. A zero period would render every poll.
pub const MIN_RENDER_INTERVAL: Duration = Duration::from_millis(1);

/// Tracks when the last frame was rendered and how long to wait for the next.
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    last_frame: u32,
    interval: Duration,
}

impl FrameScheduler {
    /// Create a new frame scheduler.
    ///
    /// Uses [`INITIAL_RENDER_INTERVAL`] until the first frame reports its own.
    pub const fn new(now: u32) -> Self {
        Self::with_interval(now, INITIAL_RENDER_INTERVAL)
    }

    /// Create a new frame scheduler with a custom starting interval.
    pub const fn with_interval(now: u32, interval: Duration) -> Self {
        Self {
            last_frame: now,
            interval: clamp_interval(interval),
        }
    }

    /// Returns if the current render interval has passed since the last frame.
    pub const fn is_due(&self, now: u32) -> bool {
        has_elapsed(now, self.last_frame, self.interval)
    }

    /// Record `now` as the start of a new frame.
    pub fn start_frame(&mut self, now: u32) {
        self.last_frame = now;
    }

    /// Replace the render interval. Zero is raised to [`MIN_RENDER_INTERVAL`].
    pub fn set_interval(&mut self, interval: Duration) {
        let interval = clamp_interval(interval);
        if interval != self.interval {
            trace!("render interval {} ms", interval.as_millis());
        }
        self.interval = interval;
    }

    /// Current render interval, always greater than zero.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Time of the last rendered frame.
    pub const fn last_frame(&self) -> u32 {
        self.last_frame
    }
}

const fn clamp_interval(interval: Duration) -> Duration {
    if interval.as_millis() < MIN_RENDER_INTERVAL.as_millis() {
        MIN_RENDER_INTERVAL
    } else {
        interval
    }
}
