//! Timekeeping core for the stopwatch widget.
//!
//! Everything here is independent of the browser so it can be exercised with
//! plain `cargo test`; the Yew front-end in `main.rs` wires it to real timers,
//! audio and the DOM.

pub mod config;
pub mod cue;
pub mod engine;
pub mod theme;

pub use cue::{Cue, CueError, CueSink};
pub use engine::{LapRecord, RunState, Stopwatch, TickId, TickSource};
pub use theme::{Palette, ThemeAction, ThemeContext, ThemeState};

/// Format milliseconds as `MM:SS:CC` (minutes, seconds, hundredths).
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let centis = (ms % 1000) / 10;
    format!("{:02}:{:02}:{:02}", minutes, seconds, centis)
}

/// Fraction of the current minute covered, in whole seconds. Range `[0, 1)`.
pub fn minute_progress(ms: u64) -> f64 {
    let seconds = (ms / 1000) % 60;
    seconds as f64 / 60.0
}
