//! The player-controlled actor.

use glam::{IVec2, Vec2};

use crate::entity::collision::Collidable;
use crate::entity::motion::{Kinematics, Motion};
use crate::map::direction::Direction;
use crate::map::grid::CollisionGrid;

/// The player: keeps going straight until redirected or stopped by a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub motion: Motion,
}

impl Player {
    /// Creates the player on its spawn tile, facing left and at rest.
    pub fn new(spawn: IVec2, kinematics: Kinematics) -> Self {
        Self {
            motion: Motion::new(spawn, Direction::Left, kinematics),
        }
    }

    /// Sets the player off in its initial heading.
    pub fn kickstart(&mut self, grid: &CollisionGrid) {
        self.motion.request_move(self.motion.direction, grid);
    }

    /// Applies this tick's directional intent. Only honored at tile centers.
    pub fn handle_intent(&mut self, intent: Option<Direction>, grid: &CollisionGrid) -> bool {
        match intent {
            Some(direction) => self.motion.request_move(direction, grid),
            None => false,
        }
    }

    pub fn tile(&self) -> IVec2 {
        self.motion.tile()
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// Advances one tick. On arrival the player continues in its current heading.
    pub fn tick(&mut self, dt: f32, grid: &CollisionGrid) {
        if self.motion.wrap_horizontal() {
            self.motion.request_move(self.motion.direction, grid);
        }

        if self.motion.advance(dt) {
            // A wrap and a plain arrival both continue straight.
            self.motion.wrap_horizontal();
            self.motion.request_move(self.motion.direction, grid);
        }
    }
}

impl Collidable for Player {
    fn center(&self) -> Vec2 {
        self.motion.position
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.motion.kinematics().half_width * 2.0)
    }
}
