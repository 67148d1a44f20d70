//! Actors and the rules they move by.

pub mod collision;
pub mod motion;
pub mod player;
pub mod pursuer;
pub mod selector;
pub mod targeting;
