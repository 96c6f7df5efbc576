//! Notifications emitted by the stopwatch for audio feedback.
//!
//! The engine only knows about the [`CueSink`] trait; how a cue is played (or
//! whether it is played at all) is up to the subscriber.

use crate::config::{LAP_SOUND_URL, PAUSE_SOUND_URL, RESET_SOUND_URL, START_SOUND_URL};
use std::fmt;

/// Semantic event kinds emitted on state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Start,
    Pause,
    Reset,
    Lap,
}

impl Cue {
    /// Sound played for this cue by the browser sink.
    pub fn sound_url(self) -> &'static str {
        match self {
            Cue::Start => START_SOUND_URL,
            Cue::Pause => PAUSE_SOUND_URL,
            Cue::Reset => RESET_SOUND_URL,
            Cue::Lap => LAP_SOUND_URL,
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cue::Start => "start",
            Cue::Pause => "pause",
            Cue::Reset => "reset",
            Cue::Lap => "lap",
        };
        f.write_str(name)
    }
}

/// Failure reported by a cue sink. Never propagated past the engine.
#[derive(Debug)]
pub enum CueError {
    /// The playback resource could not be created.
    Unavailable(String),
    /// The resource exists but refused to play.
    Playback(String),
}

impl fmt::Display for CueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CueError::Unavailable(reason) => write!(f, "Cue resource unavailable: {}", reason),
            CueError::Playback(reason) => write!(f, "Cue playback failed: {}", reason),
        }
    }
}

impl std::error::Error for CueError {}

/// Subscriber for stopwatch cues. Fire-and-forget: the result is only logged.
pub trait CueSink {
    fn cue(&mut self, cue: Cue) -> Result<(), CueError>;
}

impl<F> CueSink for F
where
    F: FnMut(Cue) -> Result<(), CueError>,
{
    fn cue(&mut self, cue: Cue) -> Result<(), CueError> {
        self(cue)
    }
}
