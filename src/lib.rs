#![no_std]

#[macro_use]
mod logging;

pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod pattern;
pub mod storage;
pub mod store;
pub mod strip;

pub use clock::{Clock, EmbassyClock};
pub use config::{ControllerConfig, InputWiring, LineAssignment, ModeCycling, PhasePolicy};
pub use controller::{Controller, ControllerState};
pub use error::{Error, Result};
pub use frame_scheduler::FrameScheduler;
pub use input::{Edge, EdgeDetector, LineMonitor, LineSample, PollResult, Selection};
pub use pattern::{
    DEFAULT_PATTERNS, ERROR_PATTERN, Pattern, PatternId, PatternTable, PhaseState,
};
pub use storage::{PersistentStorage, RamStorage};
pub use store::{PatternStore, StoredPattern};
pub use strip::{BufferedStrip, PixelStrip, SmartLedsOutput};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to push a finished frame to the hardware.
/// [`BufferedStrip`] is generic over it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
