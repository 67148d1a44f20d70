//! Centralized error types for the maze-chase simulation.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use glam::IVec2;

use crate::game::registry::{ActorId, Role};

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
/// Every variant is a setup-time failure; a running session does not produce errors.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
    #[error("Spawn marker '{0}' appears more than once")]
    DuplicateSpawn(u8),
    #[error("Spawn marker '{0}' is missing")]
    MissingSpawn(u8),
}

/// Errors related to the collision grid and spawn placement.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MapError {
    #[error("Grid of {width}x{height} tiles cannot hold {cells} cells")]
    InvalidDimensions { width: u32, height: u32, cells: usize },

    #[error("Spawn tile {tile} for {role} lies outside the grid")]
    SpawnOutOfBounds { role: Role, tile: IVec2 },

    #[error("Spawn tile {tile} for {role} is blocked")]
    SpawnBlocked { role: Role, tile: IVec2 },
}

/// Errors raised when validating a [`SimulationConfig`](crate::config::SimulationConfig).
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("Actor size {actor_size} does not wrap onto tile centers for tile size {tile_size}")]
    MisalignedWrap { actor_size: f32, tile_size: f32 },
}

/// Errors related to actor bookkeeping.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Role already registered: {0}")]
    DuplicateRole(Role),

    #[error("Unknown actor: {0}")]
    UnknownActor(ActorId),
}

/// Result type for simulation setup operations.
pub type GameResult<T> = Result<T, GameError>;
