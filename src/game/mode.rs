//! The global scatter/chase timer.

use strum_macros::{AsRefStr, Display};
use tracing::debug;

use crate::constants::{CHASE_DURATION, SCATTER_DURATION};
use crate::game::events::ModeSwitched;

/// The behavior shared by every pursuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GlobalMode {
    /// Each pursuer heads for its own corner.
    #[default]
    Scatter,
    /// Each pursuer hunts the player with its own heuristic.
    Chase,
}

impl GlobalMode {
    /// The mode that follows this one.
    pub const fn next(self) -> GlobalMode {
        match self {
            GlobalMode::Scatter => GlobalMode::Chase,
            GlobalMode::Chase => GlobalMode::Scatter,
        }
    }

    pub const fn is_chase(self) -> bool {
        matches!(self, GlobalMode::Chase)
    }
}

/// Alternates between scatter and chase forever, starting in scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeController {
    mode: GlobalMode,
    elapsed: f32,
    scatter_duration: f32,
    chase_duration: f32,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(SCATTER_DURATION, CHASE_DURATION)
    }
}

impl ModeController {
    pub fn new(scatter_duration: f32, chase_duration: f32) -> Self {
        Self {
            mode: GlobalMode::Scatter,
            elapsed: 0.0,
            scatter_duration,
            chase_duration,
        }
    }

    pub fn mode(&self) -> GlobalMode {
        self.mode
    }

    /// Time spent in the current mode.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// How long the given mode lasts.
    pub fn duration(&self, mode: GlobalMode) -> f32 {
        match mode {
            GlobalMode::Scatter => self.scatter_duration,
            GlobalMode::Chase => self.chase_duration,
        }
    }

    /// Advances the timer by `dt`.
    ///
    /// Returns the switch event when the current mode has run its course; the elapsed time
    /// restarts from zero on every switch.
    pub fn advance(&mut self, dt: f32) -> Option<ModeSwitched> {
        self.elapsed += dt;
        if self.elapsed < self.duration(self.mode) {
            return None;
        }

        self.mode = self.mode.next();
        self.elapsed = 0.0;
        debug!(mode = self.mode.as_ref(), "Pursuer mode switched");

        Some(ModeSwitched { mode: self.mode })
    }
}
