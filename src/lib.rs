//! Chase Survival - outlast a pursuer that keeps getting faster
//!
//! Core modules:
//! - `sim`: Deterministic simulation (match clock, pursuit agent, tick ordering)
//! - `audio`: Chase cue playback
//! - `ui`: Presentation hooks and a text HUD model
//! - `settings`: Data-driven tuning and difficulty presets
//! - `error`: Configuration and setup errors

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod ui;

pub use audio::{AudioManager, ChaseAudio, SoundCue};
pub use error::{SettingsError, SetupError, TuningError};
pub use settings::{ChaseTuning, Difficulty, Settings};
pub use ui::{HudScreen, Presentation, TextHud};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Pursuer defaults
    pub const ACTIVATION_DELAY: f32 = 20.0;
    pub const START_SPEED: f32 = 2.0;
    pub const MAX_SPEED: f32 = 15.0;
    /// Time to reach max speed once chasing (match length minus activation delay)
    pub const RAMP_DURATION: f32 = 100.0;
    pub const TOUCH_DISTANCE: f32 = 1.5;

    /// Match defaults
    pub const MATCH_DURATION: f32 = 120.0;
    /// Delay between session creation and match start
    pub const MATCH_WARMUP: f32 = 0.5;

    /// Max distance when snapping the pursuer onto the walkable surface at setup
    pub const NAV_SAMPLE_DISTANCE: f32 = 2.0;
    /// Seconds of chase between periodic pursuer status lines
    pub const STATUS_LOG_INTERVAL: f32 = 5.0;

    /// Remaining time at which the HUD timer turns to danger styling
    pub const DANGER_THRESHOLD: f32 = 30.0;
    /// Chase loop volume
    pub const CHASE_VOLUME: f32 = 0.7;
}

/// Linear interpolation between `a` and `b` (t is not clamped)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Format seconds as `MM:SS` (both fields floored, negative input shows `00:00`)
pub fn format_clock(seconds: f32) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let minutes = (seconds / 60.0).floor() as u32;
    let secs = (seconds % 60.0).floor() as u32;
    format!("{:02}:{:02}", minutes, secs)
}
