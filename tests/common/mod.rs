#![allow(dead_code)]

use glam::IVec2;
use maze_chase::config::SimulationConfig;
use maze_chase::entity::motion::Kinematics;
use maze_chase::entity::targeting::TargetContext;
use maze_chase::map::direction::Direction;
use maze_chase::map::grid::CollisionGrid;
use maze_chase::map::parser::SpawnTiles;

/// A 5x5 box with a 3x3 open interior.
pub const OPEN_ROOM: [&str; 5] = ["#####", "#   #", "#   #", "#   #", "#####"];

/// A plus-shaped junction centered on (2, 2).
pub const JUNCTION: [&str; 5] = ["#####", "## ##", "#   #", "## ##", "#####"];

/// A single row open end to end, so actors wrap across it.
pub const TUNNEL: [&str; 3] = ["#####", "     ", "#####"];

/// A closed corridor along row 1, twenty tiles wide.
pub const CORRIDOR: [&str; 3] = ["####################", "#                  #", "####################"];

pub fn grid(rows: &[&str]) -> CollisionGrid {
    CollisionGrid::from_walls(rows).unwrap()
}

pub fn kinematics(grid: &CollisionGrid) -> Kinematics {
    Kinematics::new(&SimulationConfig::default(), grid)
}

/// Spawns in [`CORRIDOR`]: player at the left end, pursuers spread to the right.
pub fn corridor_spawns(player: i32, pursuers: [i32; 4]) -> SpawnTiles {
    SpawnTiles {
        player: IVec2::new(player, 1),
        pursuers: pursuers.map(|x| IVec2::new(x, 1)),
    }
}

pub fn target_context(player_tile: IVec2, player_direction: Direction) -> TargetContext {
    TargetContext {
        player_tile,
        player_position: player_tile.as_vec2() * 32.0 + 16.0,
        player_direction,
        direct_tile: player_tile,
        map_size: IVec2::new(20, 21),
        tile_size: 32.0,
    }
}
