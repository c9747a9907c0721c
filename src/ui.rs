//! Presentation layer
//!
//! `MatchController` pushes outcome changes and the countdown through
//! [`Presentation`]. `TextHud` is a renderer-agnostic model of the HUD: what
//! panel is up, what the timer reads and whether the danger styling is on.

use crate::format_clock;
use crate::settings::HudSettings;

/// Sink for match state changes
pub trait Presentation {
    /// Match (re)started: show the in-game HUD, hide result panels
    fn show_running(&mut self);
    /// Countdown update, called every tick while running
    fn update_timer(&mut self, remaining: f32);
    /// Pursuer caught the player
    fn show_lost(&mut self);
    /// Player survived the full duration
    fn show_won(&mut self);
    /// Pursuit warning: ramp progress (0..1) while chasing, `None` otherwise
    fn show_threat(&mut self, _speed_progress: Option<f32>) {}
}

/// Which panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudScreen {
    /// Nothing shown yet (before the first match starts)
    #[default]
    Hidden,
    Running,
    Lost,
    Won,
}

/// HUD state in plain data
#[derive(Debug, Clone, Default)]
pub struct TextHud {
    settings: HudSettings,
    screen: HudScreen,
    timer_text: String,
    danger: bool,
    warning: Option<String>,
    panel_text: Option<String>,
}

impl TextHud {
    pub fn new(settings: HudSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> HudScreen {
        self.screen
    }

    /// Countdown as `MM:SS`
    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    /// Timer is in danger styling (little time left)
    pub fn is_danger(&self) -> bool {
        self.danger
    }

    /// Blinking pursuit warning, if shown
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Result panel message, if a result panel is up
    pub fn panel_text(&self) -> Option<&str> {
        self.panel_text.as_deref()
    }
}

impl Presentation for TextHud {
    fn show_running(&mut self) {
        self.screen = HudScreen::Running;
        self.panel_text = None;
        self.warning = None;
        self.danger = false;
    }

    fn update_timer(&mut self, remaining: f32) {
        self.timer_text = format_clock(remaining);
        self.danger = remaining <= self.settings.danger_threshold;
    }

    fn show_lost(&mut self) {
        self.screen = HudScreen::Lost;
        self.warning = None;
        self.panel_text = Some("GAME OVER\n\nThe pursuer caught you!".to_string());
    }

    fn show_won(&mut self) {
        self.screen = HudScreen::Won;
        self.warning = None;
        self.panel_text = Some("VICTORY!\n\nYou survived!".to_string());
    }

    fn show_threat(&mut self, speed_progress: Option<f32>) {
        // Only meaningful while the in-game HUD is up
        if self.screen != HudScreen::Running {
            return;
        }
        self.warning = speed_progress
            .map(|p| format!("! DANGER ! Pursuer speed: {:.0}%", p.clamp(0.0, 1.0) * 100.0));
    }
}
