//! Control loop
//!
//! Ties the input lines, the pattern store and the renderers together. Every
//! [`tick`](Controller::tick) polls the inputs, then independently checks if
//! the active pattern is due for a frame. Neither step blocks, so input
//! response never waits on an animation and animations never wait on input.

use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::{ControllerConfig, PhasePolicy};
use crate::error::{Error, Result};
use crate::frame_scheduler::FrameScheduler;
use crate::input::{EdgeDetector, LineMonitor, PollResult, Selection};
use crate::pattern::{ERROR_PATTERN, PatternId, PatternTable, PhaseState};
use crate::storage::PersistentStorage;
use crate::store::PatternStore;
use crate::strip::PixelStrip;

/// Mutable state shared by input handling and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub selection: Selection,
    pub phase: PhaseState,
    /// Pattern drawn by the last frame
    pub rendered: Option<PatternId>,
}

/// Single-strip pattern controller
pub struct Controller<M, T, S, P, const CAP: usize>
where
    M: InputPin,
    T: InputPin,
    S: PersistentStorage,
    P: PixelStrip,
{
    inputs: EdgeDetector<M, T>,
    store: PatternStore<S>,
    strip: P,
    table: PatternTable<CAP>,
    frames: FrameScheduler,
    phase_policy: PhasePolicy,
    state: ControllerState,
}

impl<M, T, S, P, const CAP: usize> Controller<M, T, S, P, CAP>
where
    M: InputPin,
    T: InputPin,
    S: PersistentStorage,
    P: PixelStrip,
{
    /// Boot the controller
    ///
    /// Blanks the strip, applies the brightness, then restores the locked
    /// pattern from storage (writing the default on first boot). `now` is the
    /// boot time; input intervals and the first frame are measured from it.
    pub fn new(
        config: &ControllerConfig,
        table: PatternTable<CAP>,
        mode_pin: M,
        toggle_pin: T,
        storage: S,
        mut strip: P,
        now: u32,
    ) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyPatternTable);
        }
        let mut store = PatternStore::new(storage, table.total(), config.default_pattern)?;

        strip.clear();
        strip.show();
        strip.set_brightness(config.brightness);

        let stored = store.load_initial();
        info!(
            "booted with pattern {} of {}, cell {} of {}",
            stored.pattern.get(),
            table.total(),
            stored.address,
            store.capacity()
        );

        let mode = LineMonitor::new(mode_pin, config.mode_wiring, config.mode_delay, now)
            .with_holdoff(config.mode_startup_holdoff);
        let toggle = LineMonitor::new(toggle_pin, config.toggle_wiring, config.toggle_delay, now);

        Ok(Self {
            inputs: EdgeDetector::new(mode, toggle, config.mode_cycling),
            store,
            strip,
            table,
            frames: FrameScheduler::new(now),
            phase_policy: config.phase_policy,
            state: ControllerState {
                selection: Selection {
                    pattern: stored.pattern,
                    address: stored.address,
                },
                phase: PhaseState::new(),
                rendered: None,
            },
        })
    }

    /// Run one loop iteration at time `now`
    ///
    /// Returns `true` if a frame was rendered.
    pub fn tick(&mut self, now: u32) -> bool {
        self.poll_inputs(now);

        if !self.frames.is_due(now) {
            return false;
        }
        self.frames.start_frame(now);
        self.render_frame();
        true
    }

    /// Poll the inputs only, without rendering
    pub fn poll_inputs(&mut self, now: u32) -> PollResult {
        let total = self.table.total();
        self.inputs
            .poll(now, &mut self.state.selection, &mut self.store, total)
    }

    /// Loop forever on `clock`
    pub fn run<C: Clock>(&mut self, clock: &mut C) -> ! {
        loop {
            let now = clock.now_millis();
            self.tick(now);
        }
    }

    fn render_frame(&mut self) {
        let id = self.state.selection.pattern;
        if self.state.rendered != Some(id) {
            self.switch_to(id);
        }

        let pattern = self.table.get(id).unwrap_or(&ERROR_PATTERN);
        let interval = pattern.render(&mut self.state.phase, &mut self.strip);
        self.frames.set_interval(interval);
    }

    fn switch_to(&mut self, id: PatternId) {
        if self.state.rendered.is_some() && self.phase_policy == PhasePolicy::ResetOnSwitch {
            self.state.phase.reset();
        }
        match self.table.get(id) {
            Some(pattern) => debug!("rendering pattern {} ({})", id.get(), pattern.name()),
            None => warn!(
                "pattern {} is not in 1..={}, showing error pattern",
                id.get(),
                self.table.total()
            ),
        }
        self.state.rendered = Some(id);
    }

    /// Active pattern and locked cell
    pub const fn selection(&self) -> Selection {
        self.state.selection
    }

    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Current render interval
    pub const fn frames(&self) -> &FrameScheduler {
        &self.frames
    }

    pub const fn table(&self) -> &PatternTable<CAP> {
        &self.table
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &P {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut P {
        &mut self.strip
    }

    /// Get a reference to the pattern store.
    pub const fn store(&self) -> &PatternStore<S> {
        &self.store
    }

    /// Get a mutable reference to the input lines.
    pub fn inputs_mut(&mut self) -> &mut EdgeDetector<M, T> {
        &mut self.inputs
    }
}
