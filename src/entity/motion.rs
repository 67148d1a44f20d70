//! Continuous-position movement over a discrete tile grid.
//!
//! Both the player and the pursuers move with a [`Motion`]: an actor heads for the center
//! of a neighboring tile, may only change course when it sits exactly on a tile center,
//! and wraps horizontally when it leaves the world through a tunnel.

use glam::{IVec2, Vec2};

use crate::config::{SimulationConfig, StepTiming};
use crate::map::direction::Direction;
use crate::map::grid::{tile_center, tile_of, CollisionGrid};

/// Per-session constants every [`Motion`] needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub tile_size: f32,
    /// Half of the actor's width; the wrap thresholds sit this far outside the world.
    pub half_width: f32,
    /// Width of the world, in pixels.
    pub world_width: f32,
    pub step_distance: f32,
    pub step_timing: StepTiming,
}

impl Kinematics {
    pub fn new(config: &SimulationConfig, grid: &CollisionGrid) -> Self {
        Self {
            tile_size: config.tile_size,
            half_width: config.actor_size / 2.0,
            world_width: grid.width() as f32 * config.tile_size,
            step_distance: config.step_distance,
            step_timing: config.step_timing,
        }
    }

    /// The maximum distance covered along each axis during a tick of length `dt`.
    pub fn step_for(&self, dt: f32) -> f32 {
        match self.step_timing {
            StepTiming::PerTick => self.step_distance,
            StepTiming::Scaled { reference_rate } => self.step_distance * dt * reference_rate,
        }
    }
}

/// Moves `current` toward `target` by at most `step`, landing on `target` exactly.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= step {
        target
    } else {
        current + step * delta.signum()
    }
}

/// The movement state of a single actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// Center of the actor, in pixels.
    pub position: Vec2,
    pub direction: Direction,
    /// The tile center currently being approached.
    pub target: Vec2,
    pub moving: bool,
    kinematics: Kinematics,
}

impl Motion {
    /// Creates a stationary actor centered on `tile`.
    pub fn new(tile: IVec2, direction: Direction, kinematics: Kinematics) -> Self {
        Self::at_position(tile_center(tile, kinematics.tile_size), direction, kinematics)
    }

    /// Creates a stationary actor at an arbitrary pixel position.
    pub fn at_position(position: Vec2, direction: Direction, kinematics: Kinematics) -> Self {
        Self {
            position,
            direction,
            target: position,
            moving: false,
            kinematics,
        }
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// The tile the actor's center is in.
    pub fn tile(&self) -> IVec2 {
        tile_of(self.position, self.kinematics.tile_size)
    }

    /// Returns `true` if the actor sits exactly on a tile center.
    pub fn is_aligned(&self) -> bool {
        let tile_size = self.kinematics.tile_size;
        let offset = self.position - Vec2::splat(tile_size / 2.0);
        offset.x % tile_size == 0.0 && offset.y % tile_size == 0.0
    }

    /// Returns `true` if a new direction would be honored right now.
    pub fn can_turn(&self) -> bool {
        !self.moving || self.is_aligned()
    }

    fn neighbor_target(&self, direction: Direction) -> Vec2 {
        self.position + direction.as_vec2() * self.kinematics.tile_size
    }

    /// Heads one tile in `direction` if that tile is open.
    ///
    /// Ignored mid-tile. When the tile ahead is blocked the actor stops where it is but keeps
    /// the new heading. Returns `true` if the request was honored.
    pub fn request_move(&mut self, direction: Direction, grid: &CollisionGrid) -> bool {
        if !self.can_turn() {
            return false;
        }

        self.direction = direction;
        let target = self.neighbor_target(direction);
        if grid.is_blocked_wrapping(tile_of(target, self.kinematics.tile_size)) {
            self.target = self.position;
            self.moving = false;
        } else {
            self.target = target;
            self.moving = true;
        }
        true
    }

    /// Heads one tile in `direction` without consulting the grid.
    ///
    /// Ignored mid-tile. The caller guarantees the tile is open. Returns `true` if honored.
    pub fn force_move(&mut self, direction: Direction) -> bool {
        if !self.can_turn() {
            return false;
        }

        self.direction = direction;
        self.target = self.neighbor_target(direction);
        self.moving = true;
        true
    }

    /// Stops on the current position.
    pub fn halt(&mut self) {
        self.target = self.position;
        self.moving = false;
    }

    /// Teleports an actor that has fully left the world to the opposite edge.
    ///
    /// Only the edge the actor is heading toward counts, so an actor that just landed on the
    /// far threshold is not sent back. Returns `true` if a teleport happened; the caller must
    /// then re-issue a move, since the old target lies on the far side.
    pub fn wrap_horizontal(&mut self) -> bool {
        if !self.direction.is_horizontal() {
            return false;
        }

        let half_width = self.kinematics.half_width;
        let world_width = self.kinematics.world_width;

        match self.direction {
            Direction::Left if self.position.x <= -half_width => {
                self.position.x = world_width + half_width;
                true
            }
            Direction::Right if self.position.x >= world_width + half_width => {
                self.position.x = -half_width;
                true
            }
            _ => false,
        }
    }

    /// Moves toward the target by at most one step per axis.
    ///
    /// Returns `true` if this call reached the target.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.moving {
            return false;
        }

        let step = self.kinematics.step_for(dt);
        self.position.x = approach(self.position.x, self.target.x, step);
        self.position.y = approach(self.position.y, self.target.y, step);

        self.position == self.target
    }
}
