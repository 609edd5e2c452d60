//! Compile-time configuration
//!
//! Everything here is fixed when the firmware is built. Boards pick a
//! [`LineAssignment`], then build a [`ControllerConfig`] from the defaults
//! with the `with_*` builders.

use embassy_time::Duration;

use crate::pattern::PatternId;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = 74;

/// Global strip brightness (0-255)
pub const BRIGHTNESS: u8 = 255;

/// Minimum time between two samples of the Mode line.
///
/// Longer values give slow patterns time to be seen while cycling.
pub const MODE_DELAY: Duration = Duration::from_millis(2000);

/// Minimum time between two samples of the Toggle line (debounce)
pub const TOGGLE_DELAY: Duration = Duration::from_millis(200);

/// The Mode line is ignored for this long after boot.
///
/// Some flight controllers hold their pinio outputs low until the startup
/// tones finish.
pub const MODE_STARTUP_HOLDOFF: Duration = Duration::from_millis(8000);

/// Pattern written on first boot (blank storage)
pub const DEFAULT_PATTERN: PatternId = PatternId::from_raw(2);

/// How an input line is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputWiring {
    /// Button to ground with the internal pull-up enabled. Low = pressed.
    PullUp,
    /// Push-pull signal (flight controller pinio), no pull-up. Low = asserted.
    PushPull,
    /// Push-pull signal with inverted logic. High = asserted.
    PushPullInverted,
}

impl InputWiring {
    /// Whether the board should enable the pin's internal pull-up
    pub const fn uses_pull_up(self) -> bool {
        matches!(self, Self::PullUp)
    }

    /// Whether a raw high reading means asserted
    pub const fn asserted_high(self) -> bool {
        matches!(self, Self::PushPullInverted)
    }
}

/// What the Mode line does while it is asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeCycling {
    /// Advance once per press
    OnFallingEdge,
    /// Advance on every sample taken while held, one step per [`MODE_DELAY`]
    WhileHeld,
}

/// What happens to a renderer's phase when the active pattern changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhasePolicy {
    /// Resume where the renderer left off
    PreserveOnSwitch,
    /// Restart every renderer from its first frame
    ResetOnSwitch,
}

/// Pins used by a reference board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineAssignment {
    pub led: u8,
    pub mode: u8,
    pub toggle: u8,
}

impl LineAssignment {
    /// DFRobot Beetle (Mode on A0 = 18)
    pub const BEETLE: Self = Self {
        led: 9,
        mode: 18,
        toggle: 10,
    };
    /// Digispark ATtiny85 (remove the on-board LED from pin 1)
    pub const DIGISPARK: Self = Self {
        led: 0,
        mode: 1,
        toggle: 2,
    };
    /// Arduino Nano
    pub const NANO: Self = Self {
        led: 2,
        mode: 12,
        toggle: 13,
    };
}

/// Configuration for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub brightness: u8,
    pub mode_delay: Duration,
    pub toggle_delay: Duration,
    pub mode_startup_holdoff: Duration,
    pub default_pattern: PatternId,
    pub mode_wiring: InputWiring,
    pub toggle_wiring: InputWiring,
    pub mode_cycling: ModeCycling,
    pub phase_policy: PhasePolicy,
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            brightness: BRIGHTNESS,
            mode_delay: MODE_DELAY,
            toggle_delay: TOGGLE_DELAY,
            mode_startup_holdoff: MODE_STARTUP_HOLDOFF,
            default_pattern: DEFAULT_PATTERN,
            mode_wiring: InputWiring::PullUp,
            toggle_wiring: InputWiring::PullUp,
            mode_cycling: ModeCycling::OnFallingEdge,
            phase_policy: PhasePolicy::PreserveOnSwitch,
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_delays(mut self, mode_delay: Duration, toggle_delay: Duration) -> Self {
        self.mode_delay = mode_delay;
        self.toggle_delay = toggle_delay;
        self
    }

    #[must_use]
    pub const fn with_mode_startup_holdoff(mut self, holdoff: Duration) -> Self {
        self.mode_startup_holdoff = holdoff;
        self
    }

    #[must_use]
    pub const fn with_default_pattern(mut self, pattern: PatternId) -> Self {
        self.default_pattern = pattern;
        self
    }

    /// Same wiring for both lines
    #[must_use]
    pub const fn with_wiring(mut self, wiring: InputWiring) -> Self {
        self.mode_wiring = wiring;
        self.toggle_wiring = wiring;
        self
    }

    #[must_use]
    pub const fn with_mode_cycling(mut self, cycling: ModeCycling) -> Self {
        self.mode_cycling = cycling;
        self
    }

    #[must_use]
    pub const fn with_phase_policy(mut self, policy: PhasePolicy) -> Self {
        self.phase_policy = policy;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
