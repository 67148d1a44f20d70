//! Greedy one-step direction choice for pursuers.

use glam::IVec2;
use smallvec::SmallVec;

use crate::map::direction::Direction;
use crate::map::grid::CollisionGrid;

/// How a pursuer decides its next heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// Take this direction unconditionally, reversal and walls included.
    Forced(Direction),
    /// Search the open neighbors for the one closest to this tile.
    Search(IVec2),
}

fn manhattan(a: IVec2, b: IVec2) -> i32 {
    (a - b).abs().element_sum()
}

/// Lists the directions a pursuer at `from` heading `heading` may take, in canonical order.
///
/// The reverse of `heading` is never offered, and neither is any blocked neighbor.
pub fn open_directions(grid: &CollisionGrid, from: IVec2, heading: Direction) -> SmallVec<[Direction; 3]> {
    let reverse = heading.opposite();
    Direction::DIRECTIONS
        .into_iter()
        .filter(|&direction| direction != reverse)
        .filter(|&direction| !grid.is_blocked_wrapping(from + direction.as_ivec2()))
        .collect()
}

/// Chooses the open, non-reversing direction whose neighbor tile is nearest `destination`
/// by Manhattan distance.
///
/// Ties go to the direction listed first in [`Direction::DIRECTIONS`]. Returns `None` at a
/// dead end where only the reverse is open.
pub fn select_direction(
    grid: &CollisionGrid,
    from: IVec2,
    heading: Direction,
    destination: IVec2,
) -> Option<Direction> {
    open_directions(grid, from, heading)
        .into_iter()
        .min_by_key(|direction| manhattan(from + direction.as_ivec2(), destination))
}
