//! Animation phase state
//!
//! Each renderer routine owns one record here and advances it by exactly one
//! step per call. Records are disjoint: switching to another pattern leaves
//! every other routine's record where it was, so coming back resumes
//! mid-animation unless [`PhaseState::reset`] is called.

/// Cursor of the wipe renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipePhase {
    /// Last painted pixel
    pub cursor: usize,
    /// Current pass paints black instead of the color
    pub blank: bool,
}

/// Rotating offset of a chase renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChasePhase {
    pub offset: usize,
}

impl ChasePhase {
    /// Step the offset, wrapping at `period`
    pub fn advance(&mut self, period: usize) {
        self.offset += 1;
        if self.offset >= period {
            self.offset = 0;
        }
    }
}

/// Global hue-wheel phase, wraps at 256
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HuePhase {
    pub cycle: u8,
}

impl HuePhase {
    pub fn advance(&mut self) {
        self.cycle = self.cycle.wrapping_add(1);
    }
}

/// Hue phase plus a 3-slot queue offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueChasePhase {
    pub queue: usize,
    pub hue: HuePhase,
}

/// Two-phase toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipPhase {
    pub flipped: bool,
}

impl FlipPhase {
    /// Toggle and return the new state; the first call returns `true`
    pub fn advance(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }
}

/// Phase records of every renderer routine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseState {
    pub flashing: FlipPhase,
    pub wipe: WipePhase,
    pub chase: ChasePhase,
    pub tricolor_chase: ChasePhase,
    pub spaced_chase: ChasePhase,
    pub banded_chase: ChasePhase,
    pub rainbow: HuePhase,
    pub rainbow_full: HuePhase,
    pub rainbow_chase: HueChasePhase,
    pub halves: FlipPhase,
    pub bands: FlipPhase,
}

impl PhaseState {
    pub const fn new() -> Self {
        Self {
            flashing: FlipPhase { flipped: false },
            wipe: WipePhase {
                cursor: 0,
                blank: false,
            },
            chase: ChasePhase { offset: 0 },
            tricolor_chase: ChasePhase { offset: 0 },
            spaced_chase: ChasePhase { offset: 0 },
            banded_chase: ChasePhase { offset: 0 },
            rainbow: HuePhase { cycle: 0 },
            rainbow_full: HuePhase { cycle: 0 },
            rainbow_chase: HueChasePhase {
                queue: 0,
                hue: HuePhase { cycle: 0 },
            },
            halves: FlipPhase { flipped: false },
            bands: FlipPhase { flipped: false },
        }
    }

    /// Rewind every renderer to its first frame
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
