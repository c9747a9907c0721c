//! Pursuit agent
//!
//! One-way state machine: `Dormant -> Chasing`. While chasing, each update
//! recomputes the ramp speed, re-plans toward the player's latest position and
//! checks for contact. Contact fires the loss report at most once per match.
//!
//! Collaborators are handed over at construction in a [`PursuitRig`]. The match
//! is passed to every update instead of being looked up.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::match_state::MatchAuthority;
use super::nav::{Locomotion, PathPlanner, PathStatus, PlayerTracker};
use super::ramp::SpeedRamp;
use crate::audio::{ChaseAudio, SoundCue};
use crate::consts::{NAV_SAMPLE_DISTANCE, STATUS_LOG_INTERVAL};
use crate::error::SetupError;
use crate::settings::ChaseTuning;

/// Pursuit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PursuitState {
    /// Waiting for the activation delay
    #[default]
    Dormant,
    /// Moving toward the player
    Chasing,
}

/// Everything the pursuer drives or queries
pub struct PursuitRig<L: Locomotion, A: ChaseAudio> {
    /// Body actuator; `None` is a setup error
    pub locomotion: Option<L>,
    pub planner: Box<dyn PathPlanner>,
    pub tracker: Box<dyn PlayerTracker>,
    /// Chase cue output; optional, the chase is silent without it
    pub audio: Option<A>,
}

/// Point-in-time pursuer diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub enabled: bool,
    pub state: PursuitState,
    /// Speed last applied to the body
    pub speed: f32,
    /// Ramp completion (0..1)
    pub speed_progress: f32,
    /// Measured body speed
    pub actual_speed: f32,
    pub last_path: Option<PathStatus>,
    pub distance_to_player: Option<f32>,
    pub contact_fired: bool,
    pub missed_updates: u32,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[pursuer] {:?}{} speed {:.1} ({:.0}%), velocity {:.1}, path {:?}",
            self.state,
            if self.enabled { "" } else { " (disabled)" },
            self.speed,
            self.speed_progress * 100.0,
            self.actual_speed,
            self.last_path,
        )?;
        if let Some(d) = self.distance_to_player {
            write!(f, ", distance {:.1}", d)?;
        }
        if self.missed_updates > 0 {
            write!(f, ", missed {}", self.missed_updates)?;
        }
        Ok(())
    }
}

/// Autonomous pursuer
pub struct PursuitAgent<L: Locomotion, A: ChaseAudio> {
    ramp: SpeedRamp,
    activation_delay: f32,
    touch_distance: f32,

    locomotion: Option<L>,
    planner: Box<dyn PathPlanner>,
    tracker: Box<dyn PlayerTracker>,
    audio: Option<A>,
    setup_error: Option<SetupError>,
    /// Body position at construction, restored on reset
    spawn: Option<Vec3>,

    /// Local wall clock, advanced on every update
    clock: f32,
    state: PursuitState,
    chase_started_at: Option<f32>,
    current_speed: f32,
    contact_fired: bool,
    halted: bool,
    seen_serial: Option<u32>,
    last_path: Option<PathStatus>,
    last_distance: Option<f32>,
    missed_updates: u32,
    next_status_log: f32,
}

impl<L: Locomotion, A: ChaseAudio> PursuitAgent<L, A> {
    /// Build the pursuer and run setup checks.
    ///
    /// A failed check disables the agent (logged, see [`setup_error`](Self::setup_error));
    /// the match itself is unaffected.
    pub fn new(tuning: &ChaseTuning, rig: PursuitRig<L, A>) -> Self {
        let PursuitRig {
            locomotion,
            planner,
            tracker,
            audio,
        } = rig;

        let mut agent = Self {
            ramp: SpeedRamp::from_tuning(tuning),
            activation_delay: tuning.activation_delay,
            touch_distance: tuning.touch_distance,
            locomotion,
            planner,
            tracker,
            audio,
            setup_error: None,
            spawn: None,
            clock: 0.0,
            state: PursuitState::Dormant,
            chase_started_at: None,
            current_speed: 0.0,
            contact_fired: false,
            halted: false,
            seen_serial: None,
            last_path: None,
            last_distance: None,
            missed_updates: 0,
            next_status_log: 0.0,
        };

        if let Err(err) = agent.check_setup(tuning) {
            log::error!("Pursuer disabled: {}", err);
            agent.setup_error = Some(err);
            return agent;
        }

        if agent.audio.is_none() {
            log::warn!("Pursuer has no audio output; the chase will be silent");
        }
        if let Some(body) = agent.locomotion.as_mut() {
            body.set_speed(0.0);
            agent.spawn = Some(body.position());
        }
        log::info!(
            "Pursuer ready, chasing after {:.1}s (speed {} -> {} over {}s)",
            agent.activation_delay,
            agent.ramp.start_speed,
            agent.ramp.max_speed,
            agent.ramp.duration
        );
        agent
    }

    fn check_setup(&self, tuning: &ChaseTuning) -> Result<(), SetupError> {
        tuning.validate()?;
        let body = self.locomotion.as_ref().ok_or(SetupError::MissingLocomotion)?;
        let position = body.position();
        self.planner
            .sample_on_surface(position, NAV_SAMPLE_DISTANCE)
            .ok_or(SetupError::OffNavMesh { position })?;
        Ok(())
    }

    /// Advance one tick against the match
    pub fn update(&mut self, dt: f32, authority: &mut dyn MatchAuthority) {
        self.step(dt, Some(authority));
    }

    /// Advance one tick with no match attached: activation uses the local
    /// clock and contact only stops the body.
    pub fn update_unsupervised(&mut self, dt: f32) {
        self.step(dt, None);
    }

    fn step(&mut self, dt: f32, authority: Option<&mut dyn MatchAuthority>) {
        self.clock += dt.max(0.0);
        if self.setup_error.is_some() {
            return;
        }

        if let Some(serial) = authority.as_deref().map(|a| a.match_serial()) {
            if self.seen_serial != Some(serial) {
                if self.seen_serial.is_some() {
                    log::info!("New match detected, pursuer reset");
                }
                self.reset();
                self.seen_serial = Some(serial);
            }
        }

        let live = authority.as_deref().is_none_or(|a| a.is_live());
        if !live {
            self.halt();
            return;
        }

        match self.state {
            PursuitState::Dormant => {
                let now = authority.as_deref().map_or(self.clock, |a| a.elapsed());
                if now >= self.activation_delay {
                    self.start_chasing();
                }
            }
            PursuitState::Chasing => self.update_chasing(authority),
        }
    }

    /// Debug/test only: begin chasing now, ignoring the activation delay.
    ///
    /// Same one-way transition as the timed one; no-op if already chasing or
    /// disabled.
    pub fn force_start_chasing(&mut self) {
        if self.setup_error.is_some() || self.state == PursuitState::Chasing {
            return;
        }
        log::warn!("Forcing pursuit start (debug)");
        self.start_chasing();
    }

    fn start_chasing(&mut self) {
        self.state = PursuitState::Chasing;
        self.chase_started_at = Some(self.clock);
        self.current_speed = self.ramp.start_speed;
        self.halted = false;
        self.next_status_log = self.clock + STATUS_LOG_INTERVAL;

        if let Some(body) = self.locomotion.as_mut() {
            body.resume();
            body.set_speed(self.ramp.start_speed);
        }
        if let Some(audio) = self.audio.as_mut() {
            audio.play_loop(SoundCue::ChaseLoop);
        }

        log::info!(
            "Pursuer is chasing! speed {} (target {} -> {})",
            self.ramp.start_speed,
            self.ramp.start_speed,
            self.ramp.max_speed
        );
    }

    fn update_chasing(&mut self, authority: Option<&mut dyn MatchAuthority>) {
        let Some(target) = self.tracker.current_position() else {
            self.missed_updates += 1;
            self.last_distance = None;
            log::debug!("Player position unavailable, chase update skipped");
            return;
        };
        let speed = self.ramp.speed_at(self.chase_elapsed());
        let Some(body) = self.locomotion.as_mut() else {
            return;
        };
        body.set_speed(speed);

        // Re-plan every tick so the pursuer tracks a moving target
        let position = body.position();
        let path = self.planner.query_path(position, target);
        match path.destination() {
            Some(destination) => body.set_destination(destination),
            None => log::debug!("No path from {} to player at {}", position, target),
        }
        self.current_speed = speed;
        self.last_path = Some(path.status);

        let distance = position.distance(target);
        self.last_distance = Some(distance);

        if self.clock >= self.next_status_log {
            self.next_status_log = self.clock + STATUS_LOG_INTERVAL;
            log::debug!("{}", self.status());
        }

        if distance <= self.touch_distance && !self.contact_fired {
            self.on_contact(authority, distance);
        }
    }

    fn on_contact(&mut self, authority: Option<&mut dyn MatchAuthority>, distance: f32) {
        self.contact_fired = true;
        log::info!("Pursuer touched the player (distance {:.2})", distance);

        match authority {
            Some(authority) => {
                authority.report_contact();
            }
            None => log::warn!("No match attached, contact not reported"),
        }

        if let Some(body) = self.locomotion.as_mut() {
            body.stop();
        }
        if let Some(audio) = self.audio.as_mut() {
            audio.stop_all();
        }
        self.halted = true;
    }

    /// Freeze once the match is not live
    fn halt(&mut self) {
        if self.halted {
            return;
        }
        self.halted = true;
        if let Some(body) = self.locomotion.as_mut() {
            body.stop();
        }
        if self.state == PursuitState::Chasing {
            if let Some(audio) = self.audio.as_mut() {
                audio.stop_all();
            }
        }
    }

    /// Back to the initial state for a new match: body returned to its spawn
    /// point and idle. The wall clock keeps running.
    pub fn reset(&mut self) {
        self.state = PursuitState::Dormant;
        self.chase_started_at = None;
        self.current_speed = 0.0;
        self.contact_fired = false;
        self.halted = false;
        self.last_path = None;
        self.last_distance = None;
        self.missed_updates = 0;
        if let Some(body) = self.locomotion.as_mut() {
            body.set_speed(0.0);
            if let Some(spawn) = self.spawn {
                body.warp(spawn);
            }
        }
    }

    /// Integrate the body for this tick (self-moving bodies ignore it)
    pub fn advance_body(&mut self, dt: f32) {
        if self.setup_error.is_some() {
            return;
        }
        if let Some(body) = self.locomotion.as_mut() {
            body.advance(dt);
        }
    }

    fn chase_elapsed(&self) -> f32 {
        self.chase_started_at.map_or(0.0, |t| self.clock - t)
    }

    pub fn state(&self) -> PursuitState {
        self.state
    }

    pub fn is_chasing(&self) -> bool {
        self.state == PursuitState::Chasing
    }

    pub fn is_enabled(&self) -> bool {
        self.setup_error.is_none()
    }

    pub fn setup_error(&self) -> Option<&SetupError> {
        self.setup_error.as_ref()
    }

    /// Whether contact has already been reported this match
    pub fn contact_fired(&self) -> bool {
        self.contact_fired
    }

    /// Speed last applied to the body
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Speed the ramp prescribes right now, from wall time alone
    pub fn ramp_speed(&self) -> f32 {
        match self.state {
            PursuitState::Dormant => 0.0,
            PursuitState::Chasing => self.ramp.speed_at(self.chase_elapsed()),
        }
    }

    /// Ramp completion (0..1), zero while dormant
    pub fn speed_progress(&self) -> f32 {
        match self.state {
            PursuitState::Dormant => 0.0,
            PursuitState::Chasing => self.ramp.progress(self.chase_elapsed()),
        }
    }

    /// Local wall clock (seconds of updates since construction)
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Chase updates skipped because the player position was unavailable
    pub fn missed_updates(&self) -> u32 {
        self.missed_updates
    }

    pub fn locomotion(&self) -> Option<&L> {
        self.locomotion.as_ref()
    }

    pub fn audio(&self) -> Option<&A> {
        self.audio.as_ref()
    }

    pub fn position(&self) -> Option<Vec3> {
        self.locomotion.as_ref().map(|b| b.position())
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            enabled: self.is_enabled(),
            state: self.state,
            speed: self.current_speed,
            speed_progress: self.speed_progress(),
            actual_speed: self
                .locomotion
                .as_ref()
                .map_or(0.0, |b| b.velocity().length()),
            last_path: self.last_path,
            distance_to_player: self.last_distance,
            contact_fired: self.contact_fired,
            missed_updates: self.missed_updates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::sim::match_state::{MatchController, MatchOutcome};
    use crate::sim::nav::{KinematicActor, OpenFloor, SharedPosition};
    use crate::ui::TextHud;

    type Agent = PursuitAgent<KinematicActor, AudioManager>;

    fn scenario_tuning() -> ChaseTuning {
        ChaseTuning {
            activation_delay: 20.0,
            start_speed: 2.0,
            max_speed: 15.0,
            ramp_duration: 100.0,
            touch_distance: 1.5,
            match_duration: 120.0,
            warmup: 0.0,
        }
    }

    /// Pursuer at the origin, player far away on a large floor
    fn agent_with(tuning: &ChaseTuning, player: &SharedPosition) -> Agent {
        PursuitAgent::new(
            tuning,
            PursuitRig {
                locomotion: Some(KinematicActor::new(Vec3::ZERO)),
                planner: Box::new(OpenFloor::square(500.0)),
                tracker: Box::new(player.clone()),
                audio: Some(AudioManager::default()),
            },
        )
    }

    fn started_match(duration: f32) -> MatchController<TextHud> {
        let mut controller = MatchController::new(TextHud::default());
        controller.start(duration);
        controller
    }

    fn far_player() -> SharedPosition {
        SharedPosition::new(Vec3::new(400.0, 0.0, 0.0))
    }

    #[test]
    fn test_activation_boundary() {
        // Scenario: 20s delay activates exactly at elapsed == 20.0
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(120.0);

        controller.tick(19.5);
        agent.update(0.5, &mut controller);
        assert_eq!(agent.state(), PursuitState::Dormant);
        assert_eq!(agent.ramp_speed(), 0.0);

        controller.tick(0.5);
        assert_eq!(controller.elapsed(), 20.0);
        agent.update(0.5, &mut controller);
        assert_eq!(agent.state(), PursuitState::Chasing);
        assert_eq!(agent.current_speed(), 2.0);
        assert_eq!(agent.locomotion().unwrap().speed(), 2.0);
        assert!(agent.audio().unwrap().is_playing());
    }

    #[test]
    fn test_speed_reaches_max_after_ramp() {
        // Scenario: activation at 20s, 100s later (match time 120s) speed == 15
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(500.0);

        controller.tick(20.0);
        agent.update(0.5, &mut controller);
        assert!(agent.is_chasing());

        for _ in 0..200 {
            agent.update(0.5, &mut controller);
            controller.tick(0.5);
        }
        assert_eq!(agent.ramp_speed(), 15.0);
        assert_eq!(agent.current_speed(), 15.0);
        assert_eq!(agent.speed_progress(), 1.0);
    }

    #[test]
    fn test_speed_midway() {
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        agent.force_start_chasing();
        for _ in 0..100 {
            agent.update_unsupervised(0.5);
        }
        // 50s into a 100s ramp
        assert!((agent.current_speed() - 8.5).abs() < 1e-4);
        assert!((agent.speed_progress() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_missed_updates_do_not_stall_ramp() {
        // Scenario: player unavailable for 5 ticks mid-chase
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        agent.force_start_chasing();

        for _ in 0..20 {
            agent.update_unsupervised(0.5);
        }
        let before = agent.current_speed();

        player.clear();
        for _ in 0..5 {
            agent.update_unsupervised(0.5);
        }
        assert_eq!(agent.missed_updates(), 5);
        assert_eq!(agent.current_speed(), before);

        let ramp = SpeedRamp::from_tuning(&scenario_tuning());
        assert_eq!(agent.ramp_speed(), ramp.speed_at(12.5));

        // Next good tick applies the wall-time speed, not a delayed one
        player.set(Vec3::new(400.0, 0.0, 0.0));
        agent.update_unsupervised(0.5);
        assert_eq!(agent.current_speed(), ramp.speed_at(13.0));
        assert!(agent.is_chasing());
    }

    #[test]
    fn test_never_activates_before_delay() {
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(120.0);

        let mut activations = 0;
        let mut was_chasing = false;
        for _ in 0..(120 * 4) {
            let elapsed = controller.elapsed();
            agent.update(0.25, &mut controller);
            if agent.is_chasing() {
                assert!(elapsed >= 20.0);
                if !was_chasing {
                    activations += 1;
                }
            }
            was_chasing = agent.is_chasing();
            controller.tick(0.25);
        }
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_retargets_every_tick() {
        let player = SharedPosition::new(Vec3::new(50.0, 0.0, 0.0));
        let mut agent = agent_with(&scenario_tuning(), &player);
        agent.force_start_chasing();

        agent.update_unsupervised(0.1);
        assert_eq!(
            agent.locomotion().unwrap().destination(),
            Some(Vec3::new(50.0, 0.0, 0.0))
        );

        player.set(Vec3::new(0.0, 0.0, -30.0));
        agent.update_unsupervised(0.1);
        assert_eq!(
            agent.locomotion().unwrap().destination(),
            Some(Vec3::new(0.0, 0.0, -30.0))
        );
        assert_eq!(agent.status().last_path, Some(PathStatus::Complete));
    }

    #[test]
    fn test_contact_reports_loss_once() {
        let player = SharedPosition::new(Vec3::new(1.0, 0.0, 0.0));
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(120.0);
        controller.tick(20.0);

        agent.update(0.1, &mut controller); // activates
        agent.update(0.1, &mut controller); // contact
        assert_eq!(controller.outcome(), MatchOutcome::Lost);
        assert!(agent.contact_fired());
        assert!(agent.locomotion().unwrap().is_stopped());
        assert!(!agent.audio().unwrap().is_playing());

        for _ in 0..10 {
            agent.update(0.1, &mut controller);
        }
        assert_eq!(controller.redundant_reports(), 0);
        assert_eq!(controller.outcome(), MatchOutcome::Lost);
    }

    #[test]
    fn test_latch_blocks_repeat_contact_unsupervised() {
        let player = SharedPosition::new(Vec3::new(0.5, 0.0, 0.0));
        let mut agent = agent_with(&scenario_tuning(), &player);
        agent.force_start_chasing();
        agent.update_unsupervised(0.1);
        assert!(agent.contact_fired());
        assert!(agent.locomotion().unwrap().is_stopped());

        agent.update_unsupervised(0.1);
        assert!(agent.contact_fired());
        assert_eq!(agent.audio().unwrap().cues_started(), 1);
    }

    #[test]
    fn test_freezes_when_match_ends() {
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(25.0);
        controller.tick(20.0);
        agent.update(0.5, &mut controller);
        assert!(agent.is_chasing());
        agent.update(0.5, &mut controller);
        agent.advance_body(0.5);
        assert!(agent.position().unwrap().x > 0.0);

        controller.tick(5.0);
        assert_eq!(controller.outcome(), MatchOutcome::Won);

        let speed = agent.current_speed();
        agent.update(0.5, &mut controller);
        assert!(agent.locomotion().unwrap().is_stopped());
        assert!(!agent.audio().unwrap().is_playing());
        assert_eq!(agent.current_speed(), speed);

        let pos = agent.position();
        agent.advance_body(1.0);
        assert_eq!(agent.position(), pos);
    }

    #[test]
    fn test_restart_resets_agent() {
        let player = SharedPosition::new(Vec3::new(1.0, 0.0, 0.0));
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(120.0);
        controller.tick(20.0);
        agent.update(0.1, &mut controller);
        agent.update(0.1, &mut controller);
        assert_eq!(controller.outcome(), MatchOutcome::Lost);

        controller.start(120.0);
        agent.update(0.1, &mut controller);
        assert_eq!(agent.state(), PursuitState::Dormant);
        assert!(!agent.contact_fired());
        assert_eq!(agent.speed_progress(), 0.0);
        assert_eq!(agent.position(), Some(Vec3::ZERO));
        assert_eq!(agent.locomotion().unwrap().destination(), None);

        // Chases again after the delay and can catch again
        controller.tick(20.0);
        agent.update(0.1, &mut controller);
        assert!(agent.is_chasing());
        assert!(!agent.locomotion().unwrap().is_stopped());
        agent.update(0.1, &mut controller);
        assert_eq!(controller.outcome(), MatchOutcome::Lost);
        assert_eq!(agent.audio().unwrap().cues_started(), 2);
    }

    #[test]
    fn test_restart_returns_body_to_spawn() {
        let player = SharedPosition::new(Vec3::new(30.0, 0.0, 0.0));
        let mut agent = agent_with(&scenario_tuning(), &player);
        let mut controller = started_match(120.0);
        controller.tick(20.0);
        for _ in 0..60 {
            agent.update(0.25, &mut controller);
            agent.advance_body(0.25);
            controller.tick(0.25);
        }
        assert_eq!(controller.outcome(), MatchOutcome::Lost);
        assert!(agent.position().unwrap().x > 25.0);

        // New match: pursuer back at spawn, out of reach of the player
        controller.start(120.0);
        agent.update(0.25, &mut controller);
        assert_eq!(agent.position(), Some(Vec3::ZERO));
        assert_eq!(controller.outcome(), MatchOutcome::Running);
    }

    #[test]
    fn test_unsupervised_uses_local_clock() {
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        for _ in 0..39 {
            agent.update_unsupervised(0.5);
        }
        assert_eq!(agent.state(), PursuitState::Dormant);
        agent.update_unsupervised(0.5);
        assert_eq!(agent.clock(), 20.0);
        assert_eq!(agent.state(), PursuitState::Chasing);
    }

    #[test]
    fn test_missing_locomotion_disables() {
        let player = far_player();
        let mut agent: Agent = PursuitAgent::new(
            &scenario_tuning(),
            PursuitRig {
                locomotion: None,
                planner: Box::new(OpenFloor::square(10.0)),
                tracker: Box::new(player.clone()),
                audio: None,
            },
        );
        assert_eq!(agent.setup_error(), Some(&SetupError::MissingLocomotion));

        let mut controller = started_match(120.0);
        controller.tick(50.0);
        agent.update(1.0, &mut controller);
        agent.force_start_chasing();
        assert_eq!(agent.state(), PursuitState::Dormant);
        assert!(controller.is_live());
    }

    #[test]
    fn test_off_mesh_disables() {
        let player = far_player();
        let agent: Agent = PursuitAgent::new(
            &scenario_tuning(),
            PursuitRig {
                locomotion: Some(KinematicActor::new(Vec3::new(0.0, 10.0, 0.0))),
                planner: Box::new(OpenFloor::square(10.0)),
                tracker: Box::new(player.clone()),
                audio: None,
            },
        );
        assert!(matches!(
            agent.setup_error(),
            Some(SetupError::OffNavMesh { .. })
        ));
        assert!(!agent.is_enabled());
        assert!(!agent.status().enabled);
    }

    #[test]
    fn test_invalid_tuning_disables() {
        let player = far_player();
        let tuning = ChaseTuning {
            max_speed: 1.0,
            ..scenario_tuning()
        };
        let agent = agent_with(&tuning, &player);
        assert!(matches!(
            agent.setup_error(),
            Some(SetupError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_status_display() {
        let player = far_player();
        let mut agent = agent_with(&scenario_tuning(), &player);
        agent.force_start_chasing();
        agent.update_unsupervised(0.5);
        let status = agent.status();
        assert_eq!(status.state, PursuitState::Chasing);
        assert_eq!(status.distance_to_player, Some(400.0));
        let line = status.to_string();
        assert!(line.starts_with("[pursuer] Chasing"));
        assert!(line.contains("distance 400.0"));
    }
}
