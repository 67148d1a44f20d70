//! Tunable simulation parameters.

use crate::constants::{
    ACTOR_SIZE, CHASE_DURATION, DEFAULT_STEP_DISTANCE, PELLET_SCORE, PELLET_SIZE, SCATTER_DURATION, TICKS_PER_SECOND,
    TILE_SIZE,
};
use crate::error::ConfigError;

/// How far an actor travels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StepTiming {
    /// A fixed `step_distance` every tick, regardless of `dt`.
    ///
    /// Speed is tied to the tick rate; the loop is expected to run at a fixed timestep.
    #[default]
    PerTick,
    /// `step_distance * dt * reference_rate`, so speed holds across tick rates.
    Scaled { reference_rate: f32 },
}

/// Parameters for a simulation session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Size of a tile, in pixels.
    pub tile_size: f32,
    /// Side length of every actor's collision box, in pixels.
    pub actor_size: f32,
    pub step_distance: f32,
    pub step_timing: StepTiming,
    pub pellet_size: f32,
    pub pellet_score: u32,
    /// Seconds of scatter before chase begins.
    pub scatter_duration: f32,
    /// Seconds of chase before scatter resumes.
    pub chase_duration: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            actor_size: ACTOR_SIZE,
            step_distance: DEFAULT_STEP_DISTANCE,
            step_timing: StepTiming::PerTick,
            pellet_size: PELLET_SIZE,
            pellet_score: PELLET_SCORE,
            scatter_duration: SCATTER_DURATION,
            chase_duration: CHASE_DURATION,
        }
    }
}

impl SimulationConfig {
    /// Switches to frame-rate independent stepping at the nominal tick rate.
    pub fn with_scaled_step(mut self) -> Self {
        self.step_timing = StepTiming::Scaled {
            reference_rate: TICKS_PER_SECOND,
        };
        self
    }

    /// Checks that every length and duration is finite and positive, and that an actor
    /// wrapped through a tunnel lands on a tile center.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut fields = vec![
            ("tile_size", self.tile_size),
            ("actor_size", self.actor_size),
            ("step_distance", self.step_distance),
            ("pellet_size", self.pellet_size),
            ("scatter_duration", self.scatter_duration),
            ("chase_duration", self.chase_duration),
        ];
        if let StepTiming::Scaled { reference_rate } = self.step_timing {
            fields.push(("reference_rate", reference_rate));
        }

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Wrap thresholds sit half an actor outside the world.
        if (self.actor_size / 2.0 - self.tile_size / 2.0) % self.tile_size != 0.0 {
            return Err(ConfigError::MisalignedWrap {
                actor_size: self.actor_size,
                tile_size: self.tile_size,
            });
        }

        Ok(())
    }
}
