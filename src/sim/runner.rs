//! Scripted player for headless matches
//!
//! Wanders at walking pace, sprints directly away from the pursuer once it
//! gets close, and steers back toward the middle when pinned against an edge.
//! Seeded, so a given seed always plays the same match.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::nav::{OpenFloor, SharedPosition};

/// Walking speed (units/s)
pub const RUNNER_WALK_SPEED: f32 = 6.0;
/// Sprint speed (units/s)
pub const RUNNER_RUN_SPEED: f32 = 12.0;
/// Pursuer distance that triggers a sprint
pub const RUNNER_PANIC_RADIUS: f32 = 12.0;
/// Distance from an edge where steering back inward starts
const EDGE_MARGIN: f32 = 6.0;
/// Max heading change while wandering (radians/s)
const WANDER_TURN_RATE: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct FleeingRunner {
    position: Vec3,
    /// Unit heading on the XZ plane
    heading: Vec2,
    rng: Pcg32,
    floor: OpenFloor,
    slot: SharedPosition,
    sprinting: bool,
}

impl FleeingRunner {
    pub fn new(seed: u64, start: Vec3, floor: OpenFloor) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let position = floor.clamp(start);
        Self {
            position,
            heading: Vec2::from_angle(angle),
            rng,
            floor,
            slot: SharedPosition::new(position),
            sprinting: false,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Handle the pursuer reads the player position from
    pub fn tracker(&self) -> SharedPosition {
        self.slot.clone()
    }

    /// Move one step, reacting to the pursuer position if known
    pub fn advance(&mut self, dt: f32, pursuer: Option<Vec3>) {
        if dt <= 0.0 {
            return;
        }
        let here = Vec2::new(self.position.x, self.position.z);

        let threat = pursuer
            .map(|p| here - Vec2::new(p.x, p.z))
            .filter(|away| away.length() < RUNNER_PANIC_RADIUS);
        self.sprinting = threat.is_some();

        let mut desired = match threat {
            Some(away) => away.normalize_or(self.heading),
            None => {
                let turn = self.rng.random_range(-1.0f32..=1.0) * WANDER_TURN_RATE * dt;
                Vec2::from_angle(turn).rotate(self.heading)
            }
        };

        // Steer inward near the edges so the chase does not end in a corner
        let center = (self.floor.min + self.floor.max) * 0.5;
        let edge_dist = (here - self.floor.min).min(self.floor.max - here).min_element();
        if edge_dist < EDGE_MARGIN {
            let pull = 1.0 - (edge_dist / EDGE_MARGIN).clamp(0.0, 1.0);
            desired += (center - here).normalize_or_zero() * pull * 2.0;
        }
        self.heading = desired.normalize_or(self.heading);

        let speed = if self.sprinting {
            RUNNER_RUN_SPEED
        } else {
            RUNNER_WALK_SPEED
        };
        let next = here + self.heading * speed * dt;
        self.position = self.floor.clamp(Vec3::new(next.x, self.position.y, next.y));
        self.slot.set(self.position);
    }
}
