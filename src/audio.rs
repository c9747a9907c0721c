//! Chase audio
//!
//! The simulation only ever asks for two things: start a looping cue and stop
//! everything. `AudioManager` tracks what is playing so repeated requests are
//! harmless; an engine backend mirrors its state onto real voices.

use crate::settings::AudioSettings;

/// Sound cue identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Pursuer started chasing
    ChaseLoop,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::ChaseLoop => "chase_loop",
        }
    }
}

/// Audio collaborator driven by the pursuer
pub trait ChaseAudio {
    /// Start a looping cue. Ignored if a cue is already playing.
    fn play_loop(&mut self, cue: SoundCue);
    /// Stop every playing sound
    fn stop_all(&mut self);
}

/// Playback state for the chase cue
#[derive(Debug, Clone)]
pub struct AudioManager {
    current: Option<SoundCue>,
    paused: bool,
    volume: f32,
    looped: bool,
    muted: bool,
    cues_started: u32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&AudioSettings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            current: None,
            paused: false,
            volume: settings.volume.clamp(0.0, 1.0),
            looped: settings.looped,
            muted: settings.muted,
            cues_started: 0,
        }
    }

    /// Set cue volume (0.0 - 1.0)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Pause without forgetting the current cue
    pub fn pause(&mut self) {
        if self.current.is_some() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Cue currently loaded (playing or paused)
    pub fn current(&self) -> Option<SoundCue> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some() && !self.paused
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Number of cues actually started (ignored requests excluded)
    pub fn cues_started(&self) -> u32 {
        self.cues_started
    }
}

impl ChaseAudio for AudioManager {
    fn play_loop(&mut self, cue: SoundCue) {
        if self.current.is_some() {
            return;
        }
        self.current = Some(cue);
        self.paused = false;
        self.cues_started += 1;
        log::info!(
            "Playing {} (volume {:.2}, loop {})",
            cue.as_str(),
            self.effective_volume(),
            self.looped
        );
    }

    fn stop_all(&mut self) {
        if let Some(cue) = self.current.take() {
            log::debug!("Stopped {}", cue.as_str());
        }
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_loop_is_idempotent() {
        let mut audio = AudioManager::default();
        audio.play_loop(SoundCue::ChaseLoop);
        audio.play_loop(SoundCue::ChaseLoop);
        assert!(audio.is_playing());
        assert_eq!(audio.cues_started(), 1);
    }

    #[test]
    fn test_stop_all_allows_replay() {
        let mut audio = AudioManager::default();
        audio.play_loop(SoundCue::ChaseLoop);
        audio.stop_all();
        assert!(!audio.is_playing());
        assert_eq!(audio.current(), None);

        audio.play_loop(SoundCue::ChaseLoop);
        assert_eq!(audio.cues_started(), 2);
    }

    #[test]
    fn test_pause_resume() {
        let mut audio = AudioManager::default();
        audio.pause();
        assert!(!audio.is_playing());

        audio.play_loop(SoundCue::ChaseLoop);
        audio.pause();
        assert!(!audio.is_playing());
        assert_eq!(audio.current(), Some(SoundCue::ChaseLoop));
        audio.resume();
        assert!(audio.is_playing());
    }

    #[test]
    fn test_effective_volume() {
        let mut audio = AudioManager::default();
        assert!((audio.effective_volume() - 0.7).abs() < 1e-6);
        audio.set_volume(3.0);
        assert_eq!(audio.effective_volume(), 1.0);
        audio.set_muted(true);
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn test_settings_carry_loop_and_mute() {
        let audio = AudioManager::new(&AudioSettings {
            volume: 0.4,
            looped: false,
            muted: true,
        });
        assert!(!audio.is_looped());
        assert_eq!(audio.effective_volume(), 0.0);
        assert!(AudioManager::default().is_looped());
    }
}
