//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Collaborators injected, never looked up
//! - No rendering or platform dependencies

pub mod match_state;
pub mod nav;
pub mod pursuit;
pub mod ramp;
pub mod runner;
pub mod tick;

pub use match_state::{MatchAuthority, MatchController, MatchEvent, MatchOutcome};
pub use nav::{
    KinematicActor, Locomotion, OpenFloor, PathPlanner, PathResult, PathStatus, PlayerTracker,
    SharedPosition,
};
pub use pursuit::{AgentStatus, PursuitAgent, PursuitRig, PursuitState};
pub use ramp::SpeedRamp;
pub use runner::{FleeingRunner, RUNNER_PANIC_RADIUS, RUNNER_RUN_SPEED, RUNNER_WALK_SPEED};
pub use tick::{ChaseSession, FixedStep, tick};
