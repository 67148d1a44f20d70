use glam::{IVec2, UVec2, Vec2};
use maze_chase::constants::RAW_BOARD;
use maze_chase::error::{MapError, ParseError};
use maze_chase::map::grid::{tile_center, tile_of, CollisionGrid};
use maze_chase::map::parser::MapTileParser;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_tile_of_floors_negative_positions() {
    let test_cases = [
        (Vec2::new(16.0, 16.0), IVec2::new(0, 0)),
        (Vec2::new(31.9, 32.0), IVec2::new(0, 1)),
        (Vec2::new(-1.0, 5.0), IVec2::new(-1, 0)),
        (Vec2::new(-32.0, -33.0), IVec2::new(-1, -2)),
    ];

    for (position, expected) in test_cases {
        assert_eq!(tile_of(position, 32.0), expected, "position {position}");
    }
}

#[test]
fn test_tile_center() {
    assert_eq!(tile_center(IVec2::new(2, 3), 32.0), Vec2::new(80.0, 112.0));
    assert_eq!(tile_of(tile_center(IVec2::new(-1, 7), 32.0), 32.0), IVec2::new(-1, 7));
}

#[test]
fn test_new_rejects_bad_dimensions() {
    assert_eq!(
        CollisionGrid::new(3, 2, vec![false; 5]).unwrap_err(),
        MapError::InvalidDimensions {
            width: 3,
            height: 2,
            cells: 5
        }
    );
    assert!(CollisionGrid::new(0, 0, Vec::new()).is_err());
    assert!(CollisionGrid::new(3, 2, vec![false; 6]).is_ok());
}

#[test]
fn test_from_walls() {
    let grid = common::grid(&common::OPEN_ROOM);

    assert_eq!(grid.size(), UVec2::new(5, 5));
    assert_eq!(grid.open_tiles(), 9);
    assert!(grid.is_blocked(IVec2::new(0, 0)));
    assert!(!grid.is_blocked(IVec2::new(2, 2)));

    assert_eq!(
        CollisionGrid::from_walls(&["###", "##"]).unwrap_err(),
        ParseError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_out_of_bounds_is_blocked() {
    let grid = common::grid(&common::TUNNEL);

    for tile in [IVec2::new(-1, 1), IVec2::new(5, 1), IVec2::new(2, -1), IVec2::new(2, 3)] {
        assert_that(&grid.contains(tile)).is_false();
        assert_that(&grid.is_blocked(tile)).is_true();
    }
}

#[test]
fn test_wrapping_lookup_only_wraps_columns() {
    let grid = common::grid(&common::TUNNEL);

    assert_eq!(grid.wrap_column(IVec2::new(-1, 1)), IVec2::new(4, 1));
    assert_eq!(grid.wrap_column(IVec2::new(5, 1)), IVec2::new(0, 1));
    assert!(!grid.is_blocked_wrapping(IVec2::new(-1, 1)));
    assert!(!grid.is_blocked_wrapping(IVec2::new(5, 1)));

    assert!(grid.is_blocked_wrapping(IVec2::new(2, -1)));
    assert!(grid.is_blocked_wrapping(IVec2::new(2, 3)));
}

#[test]
fn test_from_parsed_board() {
    let parsed = MapTileParser::parse_board(&RAW_BOARD).unwrap();
    let grid = CollisionGrid::from_parsed(&parsed);

    assert_eq!(grid.size(), UVec2::new(20, 21));
    // Tunnel mouths and spawns are open.
    assert!(!grid.is_blocked(IVec2::new(0, 9)));
    assert!(!grid.is_blocked(IVec2::new(19, 9)));
    assert!(!grid.is_blocked(parsed.spawns.player));
    assert!(grid.is_blocked(IVec2::new(6, 9)));
}
