//! Pattern catalog and dispatch
//!
//! A pattern is one renderer routine plus its fixed parameters (colors,
//! widths, frame period). Patterns live in a [`PatternTable`] indexed by
//! [`PatternId`]; adding a pattern means pushing a table entry, the control
//! loop never changes.
//!
//! Every renderer is non-blocking: O(strip length) buffer writes, exactly one
//! [`show`](crate::PixelStrip::show), one step of its own phase record, then
//! it returns the frame period it wants before its next call.

mod bands;
mod chase;
mod phase;
mod rainbow;
mod solid;
mod wipe;

use embassy_time::Duration;
use heapless::Vec;

pub use phase::{ChasePhase, FlipPhase, HueChasePhase, HuePhase, PhaseState, WipePhase};

use crate::color::{Rgb, rgb_from_u32};
use crate::error::{Error, Result};
use crate::strip::PixelStrip;

const RED: Rgb = rgb_from_u32(0xFF_00_00);
const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);

/// Frame period for patterns that repaint the same picture every call
pub const STATIC_INTERVAL: Duration = Duration::from_millis(50);

/// Identifier of a selectable pattern
///
/// Valid identifiers are `1..=total` for a given table; `0` and anything past
/// the end are sentinels that render [`ERROR_PATTERN`]. The raw byte is what
/// gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternId(u8);

impl PatternId {
    /// Reserved "all pixels off" pattern
    pub const OFF: Self = Self(1);

    /// Wrap a raw byte without validation
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns if the identifier is in `1..=total`
    pub const fn is_valid(self, total: u8) -> bool {
        self.0 != 0 && self.0 <= total
    }

    /// Next identifier in the cycle, wrapping from `total` back to [`Self::OFF`]
    ///
    /// Invalid identifiers past the end wrap as well.
    #[must_use]
    pub const fn next(self, total: u8) -> Self {
        if self.0 >= total {
            Self::OFF
        } else {
            Self(self.0 + 1)
        }
    }
}

/// One renderer together with its parameter bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// All pixels off
    Off { interval: Duration },
    /// Whole strip one color, repainted every call
    Solid { color: Rgb, interval: Duration },
    /// Whole strip alternates between a color and off
    Flashing { color: Rgb, interval: Duration },
    /// Cursor paints one pixel per call, alternating color and off passes
    Wipe { color: Rgb, interval: Duration },
    /// Every third pixel lit, offset rotating over 3
    TheaterChase { color: Rgb, interval: Duration },
    /// Three interleaved colors on every third pixel, offset rotating over 3
    TricolorChase { colors: [Rgb; 3], interval: Duration },
    /// Three colors followed by three dark pixels, offset rotating over 6
    SpacedTricolorChase { colors: [Rgb; 3], interval: Duration },
    /// Color/gap bands of `width` pixels in six slots, offset rotating over `6 * width`
    BandedTricolorChase {
        colors: [Rgb; 3],
        width: u8,
        interval: Duration,
    },
    /// One wheel step per pixel, phase rotating over 256
    Rainbow { interval: Duration },
    /// The full wheel spread over the strip, phase rotating over 256
    RainbowFull { interval: Duration },
    /// Wheel colors on every third pixel, offset rotating over 3
    RainbowChase { interval: Duration },
    /// Two halves in two colors, swapping every call
    AlternatingHalves { colors: [Rgb; 2], interval: Duration },
    /// Bands of `width` pixels in two colors, swapping every call
    AlternatingBands {
        colors: [Rgb; 2],
        width: u8,
        interval: Duration,
    },
}

/// Rendered whenever the active identifier has no table entry: fast flashing red
pub const ERROR_PATTERN: Pattern = Pattern::Flashing {
    color: RED,
    interval: Duration::from_millis(10),
};

/// Stock catalog, identifier `n` is entry `n - 1`
pub const DEFAULT_PATTERNS: [Pattern; 13] = [
    Pattern::Off {
        interval: STATIC_INTERVAL,
    },
    Pattern::RainbowFull {
        interval: Duration::from_millis(1),
    },
    Pattern::TricolorChase {
        colors: [RED, WHITE, BLUE],
        interval: Duration::from_millis(50),
    },
    Pattern::Rainbow {
        interval: Duration::from_millis(5),
    },
    Pattern::RainbowChase {
        interval: Duration::from_millis(50),
    },
    Pattern::Wipe {
        color: GREEN,
        interval: Duration::from_millis(10),
    },
    Pattern::SpacedTricolorChase {
        colors: [RED, WHITE, BLUE],
        interval: Duration::from_millis(25),
    },
    Pattern::Solid {
        color: WHITE,
        interval: STATIC_INTERVAL,
    },
    Pattern::Flashing {
        color: WHITE,
        interval: Duration::from_millis(200),
    },
    Pattern::TheaterChase {
        color: RED,
        interval: Duration::from_millis(50),
    },
    Pattern::AlternatingHalves {
        colors: [RED, BLUE],
        interval: Duration::from_millis(100),
    },
    Pattern::AlternatingBands {
        colors: [rgb_from_u32(0xF5_C8_42), BLUE],
        width: 10,
        interval: Duration::from_millis(100),
    },
    Pattern::BandedTricolorChase {
        colors: [
            rgb_from_u32(0xA8_75_00),
            rgb_from_u32(0xFF_0E_59),
            rgb_from_u32(0x2B_C6_39),
        ],
        width: 3,
        interval: Duration::from_millis(20),
    },
];

impl Pattern {
    /// Render one frame and return the frame period to wait before the next
    pub fn render<S>(&self, phase: &mut PhaseState, strip: &mut S) -> Duration
    where
        S: PixelStrip + ?Sized,
    {
        match *self {
            Self::Off { interval } => {
                solid::off(strip);
                interval
            }
            Self::Solid { color, interval } => {
                solid::solid(strip, color);
                interval
            }
            Self::Flashing { color, interval } => {
                solid::flashing(strip, &mut phase.flashing, color);
                interval
            }
            Self::Wipe { color, interval } => {
                wipe::wipe(strip, &mut phase.wipe, color);
                interval
            }
            Self::TheaterChase { color, interval } => {
                chase::theater_chase(strip, &mut phase.chase, color);
                interval
            }
            Self::TricolorChase { colors, interval } => {
                chase::tricolor_chase(strip, &mut phase.tricolor_chase, colors);
                interval
            }
            Self::SpacedTricolorChase { colors, interval } => {
                chase::spaced_tricolor_chase(strip, &mut phase.spaced_chase, colors);
                interval
            }
            Self::BandedTricolorChase {
                colors,
                width,
                interval,
            } => {
                chase::banded_tricolor_chase(strip, &mut phase.banded_chase, colors, width);
                interval
            }
            Self::Rainbow { interval } => {
                rainbow::rainbow(strip, &mut phase.rainbow);
                interval
            }
            Self::RainbowFull { interval } => {
                rainbow::rainbow_full(strip, &mut phase.rainbow_full);
                interval
            }
            Self::RainbowChase { interval } => {
                rainbow::rainbow_chase(strip, &mut phase.rainbow_chase);
                interval
            }
            Self::AlternatingHalves { colors, interval } => {
                bands::alternating_halves(strip, &mut phase.halves, colors);
                interval
            }
            Self::AlternatingBands {
                colors,
                width,
                interval,
            } => {
                bands::alternating_bands(strip, &mut phase.bands, colors, width);
                interval
            }
        }
    }

    /// Frame period this pattern reports after each render
    pub const fn interval(&self) -> Duration {
        match *self {
            Self::Off { interval }
            | Self::Solid { interval, .. }
            | Self::Flashing { interval, .. }
            | Self::Wipe { interval, .. }
            | Self::TheaterChase { interval, .. }
            | Self::TricolorChase { interval, .. }
            | Self::SpacedTricolorChase { interval, .. }
            | Self::BandedTricolorChase { interval, .. }
            | Self::Rainbow { interval }
            | Self::RainbowFull { interval }
            | Self::RainbowChase { interval }
            | Self::AlternatingHalves { interval, .. }
            | Self::AlternatingBands { interval, .. } => interval,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off { .. } => "off",
            Self::Solid { .. } => "solid",
            Self::Flashing { .. } => "flashing",
            Self::Wipe { .. } => "wipe",
            Self::TheaterChase { .. } => "theater_chase",
            Self::TricolorChase { .. } => "tricolor_chase",
            Self::SpacedTricolorChase { .. } => "spaced_tricolor_chase",
            Self::BandedTricolorChase { .. } => "banded_tricolor_chase",
            Self::Rainbow { .. } => "rainbow",
            Self::RainbowFull { .. } => "rainbow_full",
            Self::RainbowChase { .. } => "rainbow_chase",
            Self::AlternatingHalves { .. } => "alternating_halves",
            Self::AlternatingBands { .. } => "alternating_bands",
        }
    }
}

/// Pattern table with room for `CAP` entries
///
/// Identifier `n` maps to entry `n - 1`. Identifiers are bytes, so at most
/// 255 entries are usable whatever `CAP` is.
#[derive(Debug, Clone)]
pub struct PatternTable<const CAP: usize> {
    entries: Vec<Pattern, CAP>,
}

impl<const CAP: usize> PatternTable<CAP> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Table holding [`DEFAULT_PATTERNS`]
    pub fn with_default_patterns() -> Result<Self> {
        Self::from_patterns(&DEFAULT_PATTERNS)
    }

    pub fn from_patterns(patterns: &[Pattern]) -> Result<Self> {
        let mut table = Self::new();
        for pattern in patterns {
            table.push(*pattern)?;
        }
        Ok(table)
    }

    /// Append a pattern and return its identifier
    pub fn push(&mut self, pattern: Pattern) -> Result<PatternId> {
        let id = u8::try_from(self.entries.len() + 1).map_err(|_| Error::PatternTableFull)?;
        self.entries
            .push(pattern)
            .map_err(|_| Error::PatternTableFull)?;
        Ok(PatternId(id))
    }

    /// Entry for `id`, or `None` for `0` and identifiers past the end
    pub fn get(&self, id: PatternId) -> Option<&Pattern> {
        let index = usize::from(id.get()).checked_sub(1)?;
        self.entries.get(index)
    }

    /// Number of patterns; the highest valid identifier
    #[allow(clippy::cast_possible_truncation)]
    pub fn total(&self) -> u8 {
        // push() never lets the length pass u8::MAX
        self.entries.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, pattern)` pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &Pattern)> {
        self.entries
            .iter()
            .zip(1..=u8::MAX)
            .map(|(pattern, id)| (PatternId(id), pattern))
    }
}

impl<const CAP: usize> Default for PatternTable<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
