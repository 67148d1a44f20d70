use std::collections::HashSet;

use glam::{IVec2, Vec2};
use maze_chase::entity::targeting::PursuerKind;
use maze_chase::map::direction::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

#[test]
fn test_profiles_in_update_order() {
    let kinds: Vec<_> = PursuerKind::iter().collect();
    assert_eq!(
        kinds,
        vec![
            PursuerKind::Direct,
            PursuerKind::Ambusher,
            PursuerKind::Pincer,
            PursuerKind::Skittish
        ]
    );

    for (index, kind) in kinds.into_iter().enumerate() {
        assert_eq!(kind.index(), index);
    }
}

#[test]
fn test_scatter_corners_are_distinct() {
    let map_size = IVec2::new(20, 21);
    let corners: HashSet<IVec2> = PursuerKind::iter().map(|kind| kind.scatter_corner(map_size)).collect();

    assert_that(&corners.len()).is_equal_to(4);
    assert_eq!(PursuerKind::Direct.scatter_corner(map_size), IVec2::new(20, 21));
    assert_eq!(PursuerKind::Ambusher.scatter_corner(map_size), IVec2::new(0, 21));
    assert_eq!(PursuerKind::Pincer.scatter_corner(map_size), IVec2::new(20, 0));
    assert_eq!(PursuerKind::Skittish.scatter_corner(map_size), IVec2::ZERO);
}

#[test]
fn test_direct_targets_player_tile() {
    let ctx = common::target_context(IVec2::new(10, 10), Direction::Right);
    assert_eq!(PursuerKind::Direct.chase_target(Vec2::ZERO, &ctx), IVec2::new(10, 10));
}

#[test]
fn test_ambusher_leads_the_player() {
    let test_cases = [
        (Direction::Right, IVec2::new(14, 10)),
        (Direction::Left, IVec2::new(6, 10)),
        (Direction::Up, IVec2::new(10, 6)),
        (Direction::Down, IVec2::new(10, 14)),
    ];

    for (direction, expected) in test_cases {
        let ctx = common::target_context(IVec2::new(10, 10), direction);
        assert_eq!(PursuerKind::Ambusher.chase_target(Vec2::ZERO, &ctx), expected, "{direction:?}");
    }
}

#[test]
fn test_ambusher_target_may_leave_the_map() {
    let ctx = common::target_context(IVec2::new(1, 1), Direction::Up);
    assert_eq!(PursuerKind::Ambusher.chase_target(Vec2::ZERO, &ctx), IVec2::new(1, -3));
}

#[test]
fn test_pincer_reflects_direct_pursuer() {
    let mut ctx = common::target_context(IVec2::new(10, 10), Direction::Right);
    ctx.direct_tile = IVec2::new(6, 6);

    assert_eq!(PursuerKind::Pincer.chase_target(Vec2::ZERO, &ctx), IVec2::new(18, 14));
}

#[test]
fn test_skittish_flee_radius() {
    let ctx = common::target_context(IVec2::new(10, 10), Direction::Left);
    let player = ctx.player_position;

    let test_cases = [
        (8.0, IVec2::ZERO),
        (8.9, IVec2::ZERO),
        (9.0, ctx.player_tile),
        (15.0, ctx.player_tile),
    ];

    for (tiles, expected) in test_cases {
        let own_position = player + Vec2::new(tiles * 32.0, 0.0);
        assert_eq!(PursuerKind::Skittish.chase_target(own_position, &ctx), expected, "{tiles} tiles away");
    }
}

#[test]
fn test_skittish_chases_distant_player() {
    let ctx = common::target_context(IVec2::new(12, 15), Direction::Up);
    let own_position = Vec2::new(16.0, 16.0);

    assert_eq!(PursuerKind::Skittish.chase_target(own_position, &ctx), IVec2::new(12, 15));
}

#[test]
fn test_destination_follows_mode() {
    let ctx = common::target_context(IVec2::new(10, 10), Direction::Right);

    for kind in PursuerKind::iter() {
        let far_away = Vec2::new(2000.0, 2000.0);
        assert_eq!(kind.destination(false, far_away, &ctx), kind.scatter_corner(ctx.map_size));
        assert_eq!(kind.destination(true, far_away, &ctx), kind.chase_target(far_away, &ctx));
    }
}
