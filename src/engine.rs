//! Stopwatch state machine.
//!
//! Owns elapsed time, run state and lap history, plus the handle of the one
//! periodic tick source that is allowed to exist while running.

use crate::cue::{Cue, CueSink};
use crate::format_elapsed;
use log::{debug, warn};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Identifies one installed tick source. Ticks carrying a stale id are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(u64);

impl TickId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Elapsed time captured by a lap command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapRecord {
    /// 1-based ordinal, the oldest lap is number 1.
    pub number: usize,
    pub elapsed_ms: u64,
}

/// Something that can deliver periodic ticks tagged with a [`TickId`].
///
/// Dropping the returned handle must cancel the schedule.
pub trait TickSource {
    type Handle;

    fn start(&mut self, period_ms: u32, id: TickId) -> Self::Handle;
}

pub struct Stopwatch<T: TickSource> {
    elapsed_ms: u64,
    state: RunState,
    laps: VecDeque<LapRecord>,
    period_ms: u32,
    ticks: T,
    active: Option<T::Handle>,
    generation: u64,
    sinks: Vec<Box<dyn CueSink>>,
}

impl<T: TickSource> Stopwatch<T> {
    pub fn new(ticks: T, period_ms: u32) -> Self {
        Self {
            elapsed_ms: 0,
            state: RunState::Stopped,
            laps: VecDeque::new(),
            period_ms,
            ticks,
            active: None,
            generation: 0,
            sinks: Vec::new(),
        }
    }

    /// Register a cue subscriber.
    pub fn subscribe(&mut self, sink: impl CueSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Laps, most recent first.
    pub fn laps(&self) -> impl ExactSizeIterator<Item = &LapRecord> + '_ {
        self.laps.iter()
    }

    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }

    /// Start when stopped, pause when running. Returns the new state.
    pub fn toggle_run(&mut self) -> RunState {
        match self.state {
            RunState::Stopped => self.start(),
            RunState::Running => self.pause(),
        }
        self.state
    }

    /// Advance by one period. Returns whether the tick was accepted.
    pub fn tick(&mut self, id: TickId) -> bool {
        if self.state != RunState::Running || self.active.is_none() || id.0 != self.generation {
            debug!("Ignoring stale tick {} (current {})", id.0, self.generation);
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(self.period_ms));
        true
    }

    /// Record a lap while running; no-op while stopped.
    pub fn lap(&mut self) -> Option<LapRecord> {
        if self.state != RunState::Running {
            debug!("Lap ignored while stopped");
            return None;
        }
        let record = LapRecord {
            number: self.laps.len() + 1,
            elapsed_ms: self.elapsed_ms,
        };
        self.laps.push_front(record);
        debug!("Lap {} at {}", record.number, format_elapsed(record.elapsed_ms));
        self.emit(Cue::Lap);
        Some(record)
    }

    /// Stop, zero the time and drop every lap in one step.
    pub fn reset(&mut self) {
        self.cancel_ticks();
        self.state = RunState::Stopped;
        self.elapsed_ms = 0;
        self.laps.clear();
        debug!("Stopwatch reset");
        self.emit(Cue::Reset);
    }

    fn start(&mut self) {
        self.cancel_ticks();
        let id = TickId(self.generation);
        self.active = Some(self.ticks.start(self.period_ms, id));
        self.state = RunState::Running;
        debug!("Started tick source {} at {}", id.0, self.formatted());
        self.emit(Cue::Start);
    }

    fn pause(&mut self) {
        self.cancel_ticks();
        self.state = RunState::Stopped;
        debug!("Paused at {}", self.formatted());
        self.emit(Cue::Pause);
    }

    // Every cancellation moves to a new generation so queued ticks from the
    // dropped source can never match again.
    fn cancel_ticks(&mut self) {
        if self.active.take().is_some() {
            debug!("Cancelled tick source {}", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
    }

    fn emit(&mut self, cue: Cue) {
        for sink in self.sinks.iter_mut() {
            if let Err(err) = sink.cue(cue) {
                warn!("Dropping {} cue: {}", cue, err);
            }
        }
    }
}
