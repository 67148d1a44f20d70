//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::UVec2;

/// The nominal tick rate that per-tick step distances are tuned for.
pub const TICKS_PER_SECOND: f32 = 60.0;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TICKS_PER_SECOND as f64) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 32.0;
/// The size of the built-in board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(20, 21);

/// Side length of an actor's square collision box, in pixels.
pub const ACTOR_SIZE: f32 = 32.0;
/// Distance an actor covers in one tick, in pixels.
pub const DEFAULT_STEP_DISTANCE: f32 = 4.0;

/// Side length of a pellet's collision box, in pixels.
pub const PELLET_SIZE: f32 = 8.0;
/// Points awarded per pellet.
pub const PELLET_SCORE: u32 = 10;

/// Seconds spent in scatter mode before switching to chase.
pub const SCATTER_DURATION: f32 = 7.0;
/// Seconds spent in chase mode before switching back to scatter.
pub const CHASE_DURATION: f32 = 20.0;

/// How many tiles ahead of the player the ambusher aims.
pub const AMBUSH_LOOKAHEAD: i32 = 4;
/// How many tiles ahead of the player the pincer's pivot sits.
pub const PINCER_PIVOT_OFFSET: i32 = 2;
/// Tile radius within which the skittish pursuer retreats instead of chasing.
pub const FLEE_RADIUS: f32 = 8.0;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An open tile with nothing on it.
    Empty,
    /// A wall tile.
    Wall,
    /// An open tile holding a pellet.
    Pellet,
    /// An open tile at the edge of a wrap-around row.
    Tunnel,
    /// A starting position for an actor: `0` is the player, `1..=4` the pursuers.
    StartingPosition(u8),
}

impl MapTile {
    /// Returns `true` if actors cannot enter this tile.
    pub const fn is_blocked(self) -> bool {
        matches!(self, MapTile::Wall)
    }
}

/// The raw layout of the built-in board, as rows of characters.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "####################",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#..................#",
    "#.##.#.######.#.##.#",
    "#....#...##...#....#",
    "####.###.##.###.####",
    "####.#..........####",
    "####... #### ...####",
    "T  ...#2 13 4#...  T",
    "####...######...####",
    "####.#..........####",
    "####.#.########.####",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#..#.....0......#..#",
    "##.#.#.######.#.#.##",
    "#....#...##...#....#",
    "#.######.##.######.#",
    "#..................#",
    "####################",
];
