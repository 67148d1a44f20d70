//! Destination tiles for each pursuer profile.

use glam::{IVec2, Vec2};
use strum_macros::{AsRefStr, EnumIter};
use tracing::trace;

use crate::constants::{AMBUSH_LOOKAHEAD, FLEE_RADIUS, PINCER_PIVOT_OFFSET};
use crate::map::direction::Direction;

/// The four pursuer profiles, each with its own chase heuristic and scatter corner.
///
/// Declaration order is the spawn and update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PursuerKind {
    /// Heads straight for the player's tile.
    Direct,
    /// Aims a fixed distance ahead of the player's heading.
    Ambusher,
    /// Reflects the direct pursuer through a point ahead of the player.
    Pincer,
    /// Retreats home while the player is near, chases once the player is far.
    Skittish,
}

impl PursuerKind {
    /// Stable index of the profile, `0..4`.
    pub const fn index(self) -> usize {
        match self {
            PursuerKind::Direct => 0,
            PursuerKind::Ambusher => 1,
            PursuerKind::Pincer => 2,
            PursuerKind::Skittish => 3,
        }
    }

    /// The fixed corner this profile retreats to while scattering.
    ///
    /// `map_size` is the grid size in tiles, so two of the corners lie just past the edge.
    pub fn scatter_corner(self, map_size: IVec2) -> IVec2 {
        match self {
            PursuerKind::Direct => map_size,
            PursuerKind::Ambusher => IVec2::new(0, map_size.y),
            PursuerKind::Pincer => IVec2::new(map_size.x, 0),
            PursuerKind::Skittish => IVec2::ZERO,
        }
    }

    /// The tile this profile pursues while chasing.
    ///
    /// `own_position` is the pursuer's pixel position; only the skittish profile reads it.
    pub fn chase_target(self, own_position: Vec2, ctx: &TargetContext) -> IVec2 {
        match self {
            PursuerKind::Direct => ctx.player_tile,
            PursuerKind::Ambusher => ctx.player_tile + ctx.player_direction.as_ivec2() * AMBUSH_LOOKAHEAD,
            PursuerKind::Pincer => {
                let pivot = ctx.player_tile + ctx.player_direction.as_ivec2() * PINCER_PIVOT_OFFSET;
                pivot * 2 - ctx.direct_tile
            }
            PursuerKind::Skittish => {
                let distance = (own_position.distance(ctx.player_position) / ctx.tile_size).floor();
                if distance <= FLEE_RADIUS {
                    IVec2::ZERO
                } else {
                    ctx.player_tile
                }
            }
        }
    }

    /// Picks the destination for the current mode.
    pub fn destination(self, hunting: bool, own_position: Vec2, ctx: &TargetContext) -> IVec2 {
        let destination = if hunting {
            self.chase_target(own_position, ctx)
        } else {
            self.scatter_corner(ctx.map_size)
        };

        if destination.x < 0 || destination.y < 0 || destination.x > ctx.map_size.x || destination.y > ctx.map_size.y {
            trace!(pursuer = self.as_ref(), destination = %destination, "Destination lies outside the map");
        }

        destination
    }
}

/// World state read by a targeting cycle.
///
/// Built fresh before each pursuer's update, so it reflects every actor that has already
/// moved during the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetContext {
    pub player_tile: IVec2,
    pub player_position: Vec2,
    pub player_direction: Direction,
    /// Current tile of the direct pursuer, read by the pincer.
    pub direct_tile: IVec2,
    /// Grid size, in tiles.
    pub map_size: IVec2,
    pub tile_size: f32,
}
