//! Per-tick ordering
//!
//! Core game loop that advances a match deterministically. Within one tick
//! the pursuer's contact check always runs before the match clock, so a catch
//! in the same tick the timer runs out is a loss.

use super::match_state::{MatchController, MatchOutcome};
use super::nav::Locomotion;
use super::pursuit::PursuitAgent;
use crate::audio::ChaseAudio;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::settings::ChaseTuning;
use crate::ui::Presentation;

/// One match: the clock/outcome owner plus the pursuer that reports into it
pub struct ChaseSession<P: Presentation, L: Locomotion, A: ChaseAudio> {
    pub controller: MatchController<P>,
    pub pursuer: PursuitAgent<L, A>,
    match_duration: f32,
    /// Seconds left before the match clock starts
    warmup_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl<P: Presentation, L: Locomotion, A: ChaseAudio> ChaseSession<P, L, A> {
    /// Session whose match starts after `tuning.warmup` seconds of ticks
    pub fn new(
        tuning: &ChaseTuning,
        controller: MatchController<P>,
        pursuer: PursuitAgent<L, A>,
    ) -> Self {
        let mut session = Self {
            controller,
            pursuer,
            match_duration: tuning.match_duration,
            warmup_remaining: tuning.warmup.max(0.0),
            time_ticks: 0,
        };
        if session.warmup_remaining <= 0.0 {
            session.controller.start(session.match_duration);
        }
        session
    }

    /// Start a fresh match immediately (clock, outcome and pursuer reset,
    /// pursuer body back at its spawn point)
    pub fn restart(&mut self) {
        self.warmup_remaining = 0.0;
        self.controller.start(self.match_duration);
        self.pursuer.reset();
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.controller.outcome()
    }

    /// Match started and decided
    pub fn is_over(&self) -> bool {
        self.controller.is_started() && self.controller.outcome().is_terminal()
    }
}

/// Advance the session by one timestep
pub fn tick<P: Presentation, L: Locomotion, A: ChaseAudio>(
    session: &mut ChaseSession<P, L, A>,
    dt: f32,
) {
    session.time_ticks += 1;

    if session.warmup_remaining > 0.0 {
        session.warmup_remaining -= dt;
        if session.warmup_remaining <= 0.0 {
            session.warmup_remaining = 0.0;
            let duration = session.match_duration;
            session.controller.start(duration);
        }
    }

    // Contact before expiry: the pursuer sees this tick's outcome first
    session.pursuer.update(dt, &mut session.controller);
    session.pursuer.advance_body(dt);
    session.controller.tick(dt);

    let threat = (session.pursuer.is_chasing() && session.controller.is_live())
        .then(|| session.pursuer.speed_progress());
    session.controller.presentation_mut().show_threat(threat);
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of wall time; runs `step(SIM_DT)` as many times as fit.
    /// Returns the number of steps run.
    pub fn advance(&mut self, frame_dt: f32, mut step: impl FnMut(f32)) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            step(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
