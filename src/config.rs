//! Application-level configuration constants.

// Timekeeping
pub const TICK_PERIOD_MS: u32 = 10;

// Audio cues
pub const START_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/wood_plank_flicks.ogg";
pub const PAUSE_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/clang_and_wobble.ogg";
pub const RESET_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/wood_plank_flicks.ogg";
pub const LAP_SOUND_URL: &str = "https://actions.google.com/sounds/v1/cartoon/pop.ogg";

// Progress ring geometry
pub const RING_SIZE: u32 = 220;
pub const RING_RADIUS: f64 = 90.0;
pub const RING_STROKE_WIDTH: u32 = 12;

// Logging
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};
