use maze_chase::game::events::ModeSwitched;
use maze_chase::game::mode::{GlobalMode, ModeController};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_starts_in_scatter() {
    let controller = ModeController::default();

    assert_eq!(controller.mode(), GlobalMode::Scatter);
    assert_eq!(controller.elapsed(), 0.0);
    assert_eq!(controller.duration(GlobalMode::Scatter), 7.0);
    assert_eq!(controller.duration(GlobalMode::Chase), 20.0);
}

#[test]
fn test_scatter_then_chase_then_scatter() {
    let mut controller = ModeController::default();

    for _ in 0..6 {
        assert_that(&controller.advance(1.0)).is_none();
    }
    assert_eq!(
        controller.advance(1.0),
        Some(ModeSwitched {
            mode: GlobalMode::Chase
        })
    );
    assert_eq!(controller.mode(), GlobalMode::Chase);
    assert_eq!(controller.elapsed(), 0.0);

    for _ in 0..19 {
        assert_that(&controller.advance(1.0)).is_none();
    }
    assert_eq!(
        controller.advance(1.0),
        Some(ModeSwitched {
            mode: GlobalMode::Scatter
        })
    );
    assert_eq!(controller.elapsed(), 0.0);
}

#[test]
fn test_overshoot_is_discarded() {
    let mut controller = ModeController::new(1.0, 2.0);

    assert!(controller.advance(1.5).is_some());
    assert_eq!(controller.elapsed(), 0.0);
    assert!(controller.advance(1.5).is_none());
    assert_eq!(controller.elapsed(), 1.5);
}

#[test]
fn test_mode_names() {
    assert_eq!(GlobalMode::Scatter.to_string(), "scatter");
    assert_eq!(GlobalMode::Chase.as_ref(), "chase");
    assert_eq!(GlobalMode::Scatter.next(), GlobalMode::Chase);
    assert_eq!(GlobalMode::Chase.next(), GlobalMode::Scatter);
    assert!(GlobalMode::Chase.is_chase());
    assert!(!GlobalMode::Scatter.is_chase());
}
