//! Error types
//!
//! Only configuration and setup can fail. Runtime hiccups (player position
//! unavailable, unreachable path, redundant outcome reports) are logged and
//! skipped, never surfaced as errors.

use glam::Vec3;

/// A tuning value that cannot drive a sane match
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuningError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("max_speed ({max}) is below start_speed ({start}); the speed ramp would decrease")]
    DecreasingRamp { start: f32, max: f32 },
}

/// Fatal-to-feature pursuer setup problems.
///
/// The pursuer disables itself and the match carries on without it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("pursuer has no locomotion actuator")]
    MissingLocomotion,

    #[error("pursuer at {position} is not on the walkable surface")]
    OffNavMesh { position: Vec3 },

    #[error("invalid pursuer tuning: {0}")]
    InvalidTuning(#[from] TuningError),
}

/// Failure loading a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings rejected: {0}")]
    Invalid(#[from] TuningError),
}
