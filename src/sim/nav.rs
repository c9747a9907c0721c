//! Navigation collaborators
//!
//! The pursuer talks to three outside systems: a path planner, something that
//! knows where the player is, and a locomotion actuator that moves the pursuer
//! body. The traits here are those seams. `OpenFloor` and `KinematicActor` are
//! self-contained implementations for headless matches and tests: a flat
//! rectangular walkable area on the XZ plane and a body that walks in straight
//! lines.

use std::cell::Cell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Outcome of a path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStatus {
    /// Path reaches the target
    Complete,
    /// Path ends at the closest reachable point
    Partial,
    /// No path (start off the walkable surface)
    Invalid,
}

/// Planned path, start corner first
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub status: PathStatus,
    pub corners: Vec<Vec3>,
}

impl PathResult {
    pub fn invalid() -> Self {
        Self {
            status: PathStatus::Invalid,
            corners: Vec::new(),
        }
    }

    /// Where following this path ends up
    pub fn destination(&self) -> Option<Vec3> {
        match self.status {
            PathStatus::Invalid => None,
            _ => self.corners.last().copied(),
        }
    }

    /// Total polyline length
    pub fn length(&self) -> f32 {
        self.corners.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Walkable-surface queries
pub trait PathPlanner {
    fn query_path(&self, from: Vec3, to: Vec3) -> PathResult;
    /// Closest walkable point within `max_distance` of `pos`
    fn sample_on_surface(&self, pos: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Source of the player's position. `None` when it cannot be read this tick.
pub trait PlayerTracker {
    fn current_position(&self) -> Option<Vec3>;
}

/// Moves the pursuer body
pub trait Locomotion {
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;
    fn set_speed(&mut self, speed: f32);
    fn set_destination(&mut self, destination: Vec3);
    /// Halt until [`resume`](Self::resume)
    fn stop(&mut self);
    fn resume(&mut self);
    /// Teleport without travelling (respawn); clears any pending destination
    fn warp(&mut self, position: Vec3);
    /// Integrate one step. Bodies moved by an engine leave this empty.
    fn advance(&mut self, _dt: f32) {}
}

/// Shared, single-threaded position slot.
///
/// The host writes the player position each tick; the pursuer holds a clone
/// as its [`PlayerTracker`]. Clearing it models a lost player reference.
#[derive(Debug, Clone, Default)]
pub struct SharedPosition(Rc<Cell<Option<Vec3>>>);

impl SharedPosition {
    pub fn new(pos: Vec3) -> Self {
        Self(Rc::new(Cell::new(Some(pos))))
    }

    pub fn set(&self, pos: Vec3) {
        self.0.set(Some(pos));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Vec3> {
        self.0.get()
    }
}

impl PlayerTracker for SharedPosition {
    fn current_position(&self) -> Option<Vec3> {
        self.get()
    }
}

/// Flat rectangular walkable area at height `surface_y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenFloor {
    /// Minimum corner (x, z)
    pub min: Vec2,
    /// Maximum corner (x, z)
    pub max: Vec2,
    pub surface_y: f32,
}

impl OpenFloor {
    pub fn new(min: Vec2, max: Vec2, surface_y: f32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
            surface_y,
        }
    }

    /// Square floor of side `2 * half_extent` centred on the origin
    pub fn square(half_extent: f32) -> Self {
        Self::new(Vec2::splat(-half_extent), Vec2::splat(half_extent), 0.0)
    }

    pub fn contains(&self, pos: Vec3) -> bool {
        let p = Vec2::new(pos.x, pos.z);
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Project onto the floor surface, clamped to its bounds
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        let p = Vec2::new(pos.x, pos.z).clamp(self.min, self.max);
        Vec3::new(p.x, self.surface_y, p.y)
    }
}

impl PathPlanner for OpenFloor {
    fn query_path(&self, from: Vec3, to: Vec3) -> PathResult {
        if !self.contains(from) {
            return PathResult::invalid();
        }
        let start = self.clamp(from);
        let end = self.clamp(to);
        let status = if self.contains(to) {
            PathStatus::Complete
        } else {
            PathStatus::Partial
        };
        PathResult {
            status,
            corners: vec![start, end],
        }
    }

    fn sample_on_surface(&self, pos: Vec3, max_distance: f32) -> Option<Vec3> {
        let hit = self.clamp(pos);
        (hit.distance(pos) <= max_distance).then_some(hit)
    }
}

/// Straight-line mover with a speed cap
#[derive(Debug, Clone)]
pub struct KinematicActor {
    position: Vec3,
    velocity: Vec3,
    speed: f32,
    destination: Option<Vec3>,
    stopping_distance: f32,
    stopped: bool,
}

impl KinematicActor {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            speed: 0.0,
            destination: None,
            stopping_distance: 0.0,
            stopped: false,
        }
    }

    /// Stop this far short of the destination
    pub fn with_stopping_distance(mut self, distance: f32) -> Self {
        self.stopping_distance = distance.max(0.0);
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

}

impl Locomotion for KinematicActor {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.velocity = Vec3::ZERO;
    }

    fn resume(&mut self) {
        self.stopped = false;
    }

    fn warp(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.destination = None;
    }

    fn advance(&mut self, dt: f32) {
        self.velocity = Vec3::ZERO;
        if self.stopped || dt <= 0.0 {
            return;
        }
        let Some(destination) = self.destination else {
            return;
        };

        let to_dest = destination - self.position;
        let remaining = to_dest.length() - self.stopping_distance;
        if remaining <= 0.0 {
            return;
        }

        // Clamp the step so we never overshoot the stopping point
        let step = (self.speed * dt).min(remaining);
        let dir = to_dest.normalize_or_zero();
        self.position += dir * step;
        self.velocity = dir * (step / dt);
    }
}
