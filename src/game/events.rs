use crate::game::mode::GlobalMode;

/// Broadcast to every pursuer, and never to the player, when the global mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSwitched {
    /// The mode now in effect.
    pub mode: GlobalMode,
}

/// What happened during one [`Simulation::step`](crate::game::Simulation::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepEvents {
    /// Set when the global mode changed at the start of the tick.
    pub mode_switched: Option<GlobalMode>,
    pub pellets_eaten: u32,
    /// A pursuer overlapped the player after everyone moved.
    pub pursuer_collided: bool,
    /// The last pellet is gone. Never set for sessions without food.
    pub food_area_cleared: bool,
}
