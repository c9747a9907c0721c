//! Pursuer speed ramp
//!
//! Speed is a pure function of time since activation. Nothing else feeds into
//! it, so a tick where the chase update is skipped never slows the ramp down.

use serde::{Deserialize, Serialize};

use crate::lerp;
use crate::settings::ChaseTuning;

/// Linear start_speed -> max_speed ramp over `duration` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRamp {
    pub start_speed: f32,
    pub max_speed: f32,
    pub duration: f32,
}

impl SpeedRamp {
    pub fn new(start_speed: f32, max_speed: f32, duration: f32) -> Self {
        Self {
            start_speed,
            max_speed,
            duration,
        }
    }

    pub fn from_tuning(tuning: &ChaseTuning) -> Self {
        Self::new(tuning.start_speed, tuning.max_speed, tuning.ramp_duration)
    }

    /// Ramp completion in [0, 1] after `elapsed` seconds of chase
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed.clamp(0.0, self.duration) / self.duration).clamp(0.0, 1.0)
    }

    /// Speed after `elapsed` seconds of chase
    pub fn speed_at(&self, elapsed: f32) -> f32 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.max_speed;
        }
        // lerp can round a hair past the end value
        let (lo, hi) = if self.start_speed <= self.max_speed {
            (self.start_speed, self.max_speed)
        } else {
            (self.max_speed, self.start_speed)
        };
        lerp(self.start_speed, self.max_speed, t).clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_endpoints() {
        let ramp = SpeedRamp::new(2.0, 15.0, 100.0);
        assert_eq!(ramp.speed_at(0.0), 2.0);
        assert_eq!(ramp.speed_at(100.0), 15.0);
        assert_eq!(ramp.speed_at(250.0), 15.0);
        assert_eq!(ramp.speed_at(-5.0), 2.0);
        assert!((ramp.speed_at(50.0) - 8.5).abs() < 1e-5);
    }

    #[test]
    fn test_progress_clamped() {
        let ramp = SpeedRamp::new(2.0, 15.0, 100.0);
        assert_eq!(ramp.progress(-1.0), 0.0);
        assert!((ramp.progress(25.0) - 0.25).abs() < 1e-6);
        assert_eq!(ramp.progress(1000.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_speed_non_decreasing(
            start in 0.0f32..20.0,
            extra in 0.0f32..20.0,
            duration in 0.01f32..300.0,
            a in -10.0f32..500.0,
            b in -10.0f32..500.0,
        ) {
            let ramp = SpeedRamp::new(start, start + extra, duration);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ramp.speed_at(lo) <= ramp.speed_at(hi));
        }

        #[test]
        fn prop_speed_bounds(
            start in 0.0f32..20.0,
            extra in 0.0f32..20.0,
            duration in 0.01f32..300.0,
            past in 0.0f32..100.0,
        ) {
            let ramp = SpeedRamp::new(start, start + extra, duration);
            prop_assert_eq!(ramp.speed_at(0.0), start);
            prop_assert_eq!(ramp.speed_at(duration + past), start + extra);
        }
    }
}
