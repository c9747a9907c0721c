//! Match tuning and preferences
//!
//! Every value here is scenario-time configuration: read once when a match is
//! set up, never mutated while it runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SettingsError, TuningError};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Pursuer and clock tuning for this preset
    pub fn tuning(&self) -> ChaseTuning {
        let base = ChaseTuning::default();
        match self {
            Difficulty::Easy => ChaseTuning {
                activation_delay: 30.0,
                start_speed: 1.5,
                max_speed: 11.0,
                ramp_duration: 90.0,
                touch_distance: 1.2,
                ..base
            },
            Difficulty::Normal => base,
            Difficulty::Hard => ChaseTuning {
                activation_delay: 10.0,
                start_speed: 3.0,
                max_speed: 18.0,
                ramp_duration: 80.0,
                touch_distance: 1.8,
                ..base
            },
        }
    }
}

/// Pursuer and match timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseTuning {
    /// Match time before the pursuer starts moving (seconds)
    pub activation_delay: f32,
    /// Pursuer speed at activation
    pub start_speed: f32,
    /// Pursuer speed once the ramp completes
    pub max_speed: f32,
    /// Chase time to go from start_speed to max_speed (seconds)
    pub ramp_duration: f32,
    /// Pursuer-to-player distance that counts as being caught
    pub touch_distance: f32,
    /// Survive this long to win (seconds)
    pub match_duration: f32,
    /// Delay before the match clock starts (seconds)
    pub warmup: f32,
}

impl Default for ChaseTuning {
    fn default() -> Self {
        Self {
            activation_delay: ACTIVATION_DELAY,
            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            ramp_duration: RAMP_DURATION,
            touch_distance: TOUCH_DISTANCE,
            match_duration: MATCH_DURATION,
            warmup: MATCH_WARMUP,
        }
    }
}

impl ChaseTuning {
    /// Check every field; the first offending field is reported
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("activation_delay", self.activation_delay),
            ("start_speed", self.start_speed),
            ("max_speed", self.max_speed),
            ("ramp_duration", self.ramp_duration),
            ("touch_distance", self.touch_distance),
            ("match_duration", self.match_duration),
            ("warmup", self.warmup),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("ramp_duration", self.ramp_duration),
            ("touch_distance", self.touch_distance),
            ("match_duration", self.match_duration),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.max_speed < self.start_speed {
            return Err(TuningError::DecreasingRamp {
                start: self.start_speed,
                max: self.max_speed,
            });
        }

        Ok(())
    }
}

/// Chase cue playback preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Chase cue volume (0.0 - 1.0)
    pub volume: f32,
    /// Loop the chase cue until stopped
    pub looped: bool,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: CHASE_VOLUME,
            looped: true,
            muted: false,
        }
    }
}

/// HUD preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudSettings {
    /// Remaining seconds at which the timer switches to danger styling
    pub danger_threshold: f32,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            danger_threshold: DANGER_THRESHOLD,
        }
    }
}

/// Everything a match host reads at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub tuning: ChaseTuning,
    pub audio: AudioSettings,
    pub hud: HudSettings,
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset tuning)
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tuning: difficulty.tuning(),
            ..Self::default()
        }
    }

    /// Apply a difficulty preset (replaces the tuning block)
    pub fn apply_preset(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tuning = difficulty.tuning();
    }

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} difficulty)",
            path.display(),
            settings.difficulty.as_str()
        );
        Ok(settings)
    }
}
