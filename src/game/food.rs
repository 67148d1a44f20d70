//! Pellet bookkeeping: a single collision-and-remove check per tick.

use glam::{IVec2, Vec2};

use crate::entity::collision::{boxes_overlap, Collidable};
use crate::map::grid::tile_center;

/// The pellets still on the board.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodField {
    /// Pellet centers, in pixels.
    pellets: Vec<Vec2>,
    pellet_size: Vec2,
}

impl FoodField {
    /// Places one pellet at the center of each tile.
    pub fn new(tiles: &[IVec2], tile_size: f32, pellet_size: f32) -> Self {
        Self {
            pellets: tiles.iter().map(|&tile| tile_center(tile, tile_size)).collect(),
            pellet_size: Vec2::splat(pellet_size),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pellets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pellets.is_empty()
    }

    /// Removes every pellet overlapping `eater` and returns how many were removed.
    pub fn collect(&mut self, eater: &dyn Collidable) -> u32 {
        let before = self.pellets.len();
        let (center, size) = (eater.center(), eater.size());
        let pellet_size = self.pellet_size;
        self.pellets
            .retain(|&pellet| !boxes_overlap(center, size, pellet, pellet_size));
        (before - self.pellets.len()) as u32
    }
}
