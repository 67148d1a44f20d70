//! Pursuer actors: targeting cycles, direction choice and mode-switch reversals.

use glam::{IVec2, Vec2};
use tracing::trace;

use crate::entity::collision::Collidable;
use crate::entity::motion::{Kinematics, Motion};
use crate::entity::selector::{select_direction, MoveRequest};
use crate::entity::targeting::{PursuerKind, TargetContext};
use crate::game::events::ModeSwitched;
use crate::map::direction::Direction;
use crate::map::grid::CollisionGrid;

/// A computer-controlled pursuer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    pub kind: PursuerKind,
    pub motion: Motion,
    /// `true` while chasing, `false` while scattering.
    hunting: bool,
    /// The tile chosen by the most recent targeting cycle.
    destination: IVec2,
}

impl Pursuer {
    /// Creates a scattering pursuer on its spawn tile, facing left and at rest.
    pub fn new(kind: PursuerKind, spawn: IVec2, kinematics: Kinematics) -> Self {
        Self {
            kind,
            motion: Motion::new(spawn, Direction::Left, kinematics),
            hunting: false,
            destination: spawn,
        }
    }

    pub fn is_hunting(&self) -> bool {
        self.hunting
    }

    pub fn destination(&self) -> IVec2 {
        self.destination
    }

    pub fn tile(&self) -> IVec2 {
        self.motion.tile()
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// Applies a move request. Returns `true` if the pursuer is now heading somewhere new.
    ///
    /// Requests are only honored at tile centers or at rest. A search that finds no open,
    /// non-reversing neighbor leaves the pursuer at rest until the next cycle.
    pub fn apply(&mut self, request: MoveRequest, grid: &CollisionGrid) -> bool {
        if !self.motion.can_turn() {
            return false;
        }

        match request {
            MoveRequest::Forced(direction) => self.motion.force_move(direction),
            MoveRequest::Search(destination) => {
                self.destination = destination;
                match select_direction(grid, self.motion.tile(), self.motion.direction, destination) {
                    Some(direction) => self.motion.force_move(direction),
                    None => {
                        trace!(pursuer = self.kind.as_ref(), tile = %self.motion.tile(), "Dead end, waiting for next cycle");
                        self.motion.halt();
                        false
                    }
                }
            }
        }
    }

    /// Runs a targeting cycle: picks a destination for the current mode, then a direction.
    pub fn retarget(&mut self, grid: &CollisionGrid, ctx: &TargetContext) -> bool {
        let destination = self.kind.destination(self.hunting, self.motion.position, ctx);
        self.apply(MoveRequest::Search(destination), grid)
    }

    /// Reacts to a global mode change: turns around if the tile behind is open, then
    /// adopts the new mode.
    pub fn on_mode_switched(&mut self, event: ModeSwitched, grid: &CollisionGrid) {
        let reverse = self.motion.direction.opposite();
        if !grid.is_blocked_wrapping(self.motion.tile() + reverse.as_ivec2()) {
            let reversed = self.apply(MoveRequest::Forced(reverse), grid);
            trace!(pursuer = self.kind.as_ref(), reversed, "Mode switch reversal");
        }

        self.hunting = event.mode.is_chase();
    }

    /// Advances one tick, running a targeting cycle on arrival or while at rest.
    pub fn tick(&mut self, dt: f32, grid: &CollisionGrid, ctx: &TargetContext) {
        if self.motion.wrap_horizontal() {
            self.motion.force_move(self.motion.direction);
        }

        if !self.motion.moving {
            self.retarget(grid, ctx);
        }

        if self.motion.advance(dt) {
            if self.motion.wrap_horizontal() {
                self.motion.force_move(self.motion.direction);
            } else {
                self.retarget(grid, ctx);
            }
        }
    }
}

impl Collidable for Pursuer {
    fn center(&self) -> Vec2 {
        self.motion.position
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.motion.kinematics().half_width * 2.0)
    }
}
