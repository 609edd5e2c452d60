//! Input sampling and edge detection for the Mode and Toggle lines.
//!
//! Each line is sampled no more often than its own interval, which doubles
//! as debouncing. Levels are normalized so that "high" always means
//! released/idle and "low" means pressed/asserted, whatever the wiring.
//!
//! Toggle has priority over Mode: until the Toggle line is due for a sample,
//! the Mode line is not looked at. Mode is therefore only processed on polls
//! that also sample Toggle.

use embassy_time::Duration;
use embedded_hal::digital::InputPin;

use crate::clock::has_elapsed;
use crate::config::{InputWiring, ModeCycling};
use crate::pattern::PatternId;
use crate::storage::PersistentStorage;
use crate::store::PatternStore;

/// Level change between two consecutive samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// High to low: pressed
    Falling,
    /// Low to high: released
    Rising,
}

/// Result of one sample of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSample {
    /// Normalized level, `true` = released
    pub high: bool,
    pub edge: Option<Edge>,
}

/// Interval-gated sampler for one digital line
pub struct LineMonitor<P: InputPin> {
    pin: P,
    wiring: InputWiring,
    interval: Duration,
    /// Extra wait before the very first sample
    holdoff: Option<Duration>,
    last_sample: u32,
    high: bool,
    previous: bool,
}

impl<P: InputPin> LineMonitor<P> {
    /// Create a monitor whose first sample is due one `interval` after `now`
    ///
    /// The line is assumed released until the first sample.
    pub const fn new(pin: P, wiring: InputWiring, interval: Duration, now: u32) -> Self {
        Self {
            pin,
            wiring,
            interval,
            holdoff: None,
            last_sample: now,
            high: true,
            previous: true,
        }
    }

    /// Delay the first sample until `holdoff` after the creation time
    #[must_use]
    pub fn with_holdoff(mut self, holdoff: Duration) -> Self {
        self.holdoff = Some(holdoff);
        self
    }

    /// Sample the line if its interval has elapsed since the last sample
    pub fn sample(&mut self, now: u32) -> Option<LineSample> {
        let wait = self.holdoff.unwrap_or(self.interval);
        if !has_elapsed(now, self.last_sample, wait) {
            return None;
        }
        self.holdoff = None;
        self.last_sample = now;

        self.previous = self.high;
        self.high = self.read_level();

        let edge = match (self.previous, self.high) {
            (true, false) => Some(Edge::Falling),
            (false, true) => Some(Edge::Rising),
            _ => None,
        };
        Some(LineSample {
            high: self.high,
            edge,
        })
    }

    /// Last sampled normalized level, `true` = released
    pub const fn is_high(&self) -> bool {
        self.high
    }

    pub const fn wiring(&self) -> InputWiring {
        self.wiring
    }

    /// Get a mutable reference to the pin.
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// A failed read counts as released.
    fn read_level(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(raw) => raw != self.wiring.asserted_high(),
            Err(_) => {
                warn!("input read failed, treating line as released");
                true
            }
        }
    }
}

/// Active pattern and the storage cell holding the locked one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub pattern: PatternId,
    pub address: usize,
}

/// What one poll of the inputs did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollResult {
    /// Toggle sample, `None` when Toggle was not due (Mode skipped too)
    pub toggle: Option<LineSample>,
    pub mode: Option<LineSample>,
    /// New storage address after a lock
    pub committed: Option<usize>,
}

/// Turns Mode/Toggle samples into pattern changes and locks
pub struct EdgeDetector<M: InputPin, T: InputPin> {
    mode: LineMonitor<M>,
    toggle: LineMonitor<T>,
    cycling: ModeCycling,
}

impl<M: InputPin, T: InputPin> EdgeDetector<M, T> {
    pub const fn new(mode: LineMonitor<M>, toggle: LineMonitor<T>, cycling: ModeCycling) -> Self {
        Self {
            mode,
            toggle,
            cycling,
        }
    }

    /// Sample whichever lines are due and apply their rules to `selection`
    ///
    /// - Toggle low: force [`PatternId::OFF`], on every such sample.
    /// - Toggle rising edge: reload the locked pattern from `store`.
    /// - Mode falling edge (or any low sample with [`ModeCycling::WhileHeld`]):
    ///   advance to the next pattern, wrapping at `total`.
    /// - Mode rising edge with a pattern different from the locked one:
    ///   commit it and move `selection.address`.
    pub fn poll<S: PersistentStorage>(
        &mut self,
        now: u32,
        selection: &mut Selection,
        store: &mut PatternStore<S>,
        total: u8,
    ) -> PollResult {
        let Some(toggle) = self.toggle.sample(now) else {
            return PollResult::default();
        };

        if !toggle.high {
            if selection.pattern != PatternId::OFF {
                debug!("toggle low, strip off");
            }
            selection.pattern = PatternId::OFF;
        } else if toggle.edge == Some(Edge::Rising) {
            selection.pattern = store.read(selection.address);
            debug!("toggle released, resuming pattern {}", selection.pattern.get());
        }

        let mut result = PollResult {
            toggle: Some(toggle),
            ..PollResult::default()
        };

        let Some(mode) = self.mode.sample(now) else {
            return result;
        };
        result.mode = Some(mode);

        let advance = match self.cycling {
            ModeCycling::OnFallingEdge => mode.edge == Some(Edge::Falling),
            ModeCycling::WhileHeld => !mode.high,
        };
        if advance {
            selection.pattern = selection.pattern.next(total);
            debug!("mode pressed, pattern {}", selection.pattern.get());
        }

        if mode.edge == Some(Edge::Rising) && selection.pattern != store.read(selection.address) {
            selection.address = store.commit(selection.pattern, selection.address);
            result.committed = Some(selection.address);
        }

        result
    }

    /// Get a mutable reference to the mode line.
    pub fn mode_mut(&mut self) -> &mut LineMonitor<M> {
        &mut self.mode
    }

    /// Get a mutable reference to the toggle line.
    pub fn toggle_mut(&mut self) -> &mut LineMonitor<T> {
        &mut self.toggle
    }
}
