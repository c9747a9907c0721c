//! Match clock and outcome
//!
//! `MatchController` is the only writer of the match outcome. Everything else
//! reads it, and the pursuer requests the single loss transition through
//! [`MatchAuthority::report_contact`].

use serde::{Deserialize, Serialize};

/// Slack on the expiry check so summed fixed steps land on the exact tick
const EXPIRY_TOLERANCE: f64 = 1e-6;

use crate::format_clock;
use crate::ui::Presentation;

/// Result of the current match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Still playing (or not started yet)
    #[default]
    Running,
    /// Pursuer reached the player
    Lost,
    /// Player outlasted the clock
    Won,
}

impl MatchOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchOutcome::Running)
    }
}

/// Outcome-level notifications for the host (audio, saves, analytics...)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Started { serial: u32, duration: f32 },
    Caught { elapsed: f32 },
    Survived { elapsed: f32 },
}

/// What the pursuer is allowed to see and do with the match
pub trait MatchAuthority {
    /// Seconds since the current match started
    fn elapsed(&self) -> f32;
    fn outcome(&self) -> MatchOutcome;
    /// True once started and while the outcome is still `Running`
    fn is_live(&self) -> bool;
    /// Bumped on every `start`, lets dependents detect a restart
    fn match_serial(&self) -> u32;
    /// Request the loss transition. Returns true if this call ended the match.
    fn report_contact(&mut self) -> bool;
}

/// Owns the match clock and outcome
#[derive(Debug)]
pub struct MatchController<P: Presentation> {
    duration: f32,
    /// Summed in f64 so a long run of small steps does not drift
    clock: f64,
    outcome: MatchOutcome,
    started: bool,
    serial: u32,
    redundant_reports: u32,
    events: Vec<MatchEvent>,
    presentation: P,
}

impl<P: Presentation> MatchController<P> {
    /// Controller in the not-started state; call [`start`](Self::start) to begin
    pub fn new(presentation: P) -> Self {
        Self {
            duration: 0.0,
            clock: 0.0,
            outcome: MatchOutcome::Running,
            started: false,
            serial: 0,
            redundant_reports: 0,
            events: Vec::new(),
            presentation,
        }
    }

    /// Begin (or restart) a match lasting `duration` seconds
    pub fn start(&mut self, duration: f32) {
        if !(duration > 0.0) {
            log::warn!("Match duration {} is not positive; it ends on the first tick", duration);
        }
        self.duration = duration;
        self.clock = 0.0;
        self.outcome = MatchOutcome::Running;
        self.started = true;
        self.serial = self.serial.wrapping_add(1);
        self.redundant_reports = 0;
        self.events.push(MatchEvent::Started {
            serial: self.serial,
            duration,
        });
        self.presentation.show_running();
        log::info!("Match started: survive {}", format_clock(duration));
    }

    /// Advance the clock. No-op unless the match is live.
    pub fn tick(&mut self, dt: f32) {
        if !self.is_live() {
            return;
        }

        self.clock += f64::from(dt.max(0.0));

        if self.clock + EXPIRY_TOLERANCE >= f64::from(self.duration) {
            self.outcome = MatchOutcome::Won;
            self.events.push(MatchEvent::Survived {
                elapsed: self.elapsed(),
            });
            self.presentation.show_won();
            log::info!("Victory - survived {:.1}s", self.clock);
        } else {
            self.presentation.update_timer(self.remaining());
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.clock as f32
    }

    pub fn remaining(&self) -> f32 {
        (f64::from(self.duration) - self.clock).max(0.0) as f32
    }

    /// Remaining time as `MM:SS`
    pub fn formatted_remaining(&self) -> String {
        format_clock(self.remaining())
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_live(&self) -> bool {
        self.started && self.outcome == MatchOutcome::Running
    }

    /// Contact reports ignored because no match was live (not started or already decided)
    pub fn redundant_reports(&self) -> u32 {
        self.redundant_reports
    }

    /// Take queued events (oldest first)
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }
}

impl<P: Presentation> MatchAuthority for MatchController<P> {
    fn elapsed(&self) -> f32 {
        MatchController::elapsed(self)
    }

    fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    fn is_live(&self) -> bool {
        MatchController::is_live(self)
    }

    fn match_serial(&self) -> u32 {
        self.serial
    }

    fn report_contact(&mut self) -> bool {
        if !self.started {
            self.redundant_reports += 1;
            log::warn!("Contact reported before the match started, ignored");
            return false;
        }
        if self.outcome.is_terminal() {
            self.redundant_reports += 1;
            log::warn!(
                "Contact reported after the match ended ({:?}), ignored",
                self.outcome
            );
            return false;
        }

        self.outcome = MatchOutcome::Lost;
        self.events.push(MatchEvent::Caught {
            elapsed: self.elapsed(),
        });
        self.presentation.show_lost();
        log::info!("Game over - caught after {:.1}s", self.clock);
        true
    }
}
