//! Grid-based chase simulation: a player and four pursuers moving through a tile maze.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod map;
