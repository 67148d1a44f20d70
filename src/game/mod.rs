//! This module contains the simulation session: actors, the mode timer and the per-tick update.

use glam::{IVec2, Vec2};
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use strum_macros::AsRefStr;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::entity::collision::Collidable;
use crate::entity::motion::Kinematics;
use crate::entity::player::Player;
use crate::entity::pursuer::Pursuer;
use crate::entity::targeting::{PursuerKind, TargetContext};
use crate::error::{GameResult, MapError};
use crate::map::direction::Direction;
use crate::map::grid::CollisionGrid;
use crate::map::parser::{MapTileParser, SpawnTiles};

use self::events::StepEvents;
use self::food::FoodField;
use self::mode::{GlobalMode, ModeController};
use self::registry::{ActorId, ActorRegistry, Role};

pub mod events;
pub mod food;
pub mod mode;
pub mod registry;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Running,
    /// Every pellet was eaten.
    Won,
    /// A pursuer caught the player.
    Lost,
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, SessionStatus::Running)
    }
}

/// One play session, from spawn until won or lost.
///
/// Nothing carries over between sessions; a restart builds a new `Simulation`.
pub struct Simulation {
    config: SimulationConfig,
    grid: CollisionGrid,
    registry: ActorRegistry,
    player: Player,
    /// Pursuers in update order.
    pursuers: SmallVec<[Pursuer; 4]>,
    mode: ModeController,
    food: Option<FoodField>,
    intent: Option<Direction>,
    score: u32,
    status: SessionStatus,
    ticks: u64,
}

impl Simulation {
    /// Starts a session on `grid` with every actor on its spawn tile.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or if any spawn tile is outside the grid or blocked.
    pub fn new(grid: CollisionGrid, spawns: SpawnTiles, config: SimulationConfig) -> GameResult<Self> {
        config.validate()?;

        validate_spawn(&grid, Role::Player, spawns.player)?;
        for kind in PursuerKind::iter() {
            validate_spawn(&grid, Role::Pursuer(kind), spawns.pursuer(kind))?;
        }

        let kinematics = Kinematics::new(&config, &grid);
        let mut registry = ActorRegistry::new();

        registry.register(Role::Player, 0)?;
        let player = Player::new(spawns.player, kinematics);

        let mut pursuers = SmallVec::new();
        for (slot, kind) in PursuerKind::iter().enumerate() {
            registry.register(Role::Pursuer(kind), slot)?;
            pursuers.push(Pursuer::new(kind, spawns.pursuer(kind), kinematics));
        }

        let mut simulation = Self {
            mode: ModeController::new(config.scatter_duration, config.chase_duration),
            config,
            grid,
            registry,
            player,
            pursuers,
            food: None,
            intent: None,
            score: 0,
            status: SessionStatus::Running,
            ticks: 0,
        };
        simulation.kickstart();

        info!(
            width = simulation.grid.width(),
            height = simulation.grid.height(),
            player = %spawns.player,
            "Session started"
        );

        Ok(simulation)
    }

    /// Parses a board, builds its grid and food, and starts a session on it.
    pub fn from_board(raw_board: &[&str], config: SimulationConfig) -> GameResult<Self> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let grid = CollisionGrid::from_parsed(&parsed);
        let food = FoodField::new(&parsed.pellets, config.tile_size, config.pellet_size);

        Ok(Self::new(grid, parsed.spawns, config)?.with_food(food))
    }

    /// Attaches pellets; the session is won once they are all eaten.
    pub fn with_food(mut self, food: FoodField) -> Self {
        self.food = Some(food);
        self
    }

    /// Sets every actor off, as if each had just arrived on its spawn tile.
    fn kickstart(&mut self) {
        self.player.kickstart(&self.grid);
        for slot in 0..self.pursuers.len() {
            let ctx = self.target_context();
            self.pursuers[slot].retarget(&self.grid, &ctx);
        }
    }

    /// Snapshot of the state pursuers target from.
    fn target_context(&self) -> TargetContext {
        let player_tile = self.player.tile();
        let direct_tile = self
            .registry
            .slot_of(PursuerKind::Direct)
            .and_then(|slot| self.pursuers.get(slot))
            .map_or(player_tile, |direct| direct.tile());

        TargetContext {
            player_tile,
            player_position: self.player.position(),
            player_direction: self.player.direction(),
            direct_tile,
            map_size: self.grid.size().as_ivec2(),
            tile_size: self.config.tile_size,
        }
    }

    /// Records the player's directional intent for the next step. The latest call wins.
    pub fn apply_player_intent(&mut self, intent: Option<Direction>) {
        self.intent = intent;
    }

    /// Advances the session by one tick of length `dt`.
    ///
    /// Order: mode timer and broadcast, player intent, player motion, pursuer motion in
    /// profile order, then pellet and pursuer overlap checks.
    pub fn step(&mut self, dt: f32) -> StepEvents {
        let mut events = StepEvents::default();
        if self.status.is_over() {
            warn!(status = self.status.as_ref(), "Step called on a finished session");
            return events;
        }
        self.ticks += 1;

        if let Some(switched) = self.mode.advance(dt) {
            for pursuer in self.pursuers.iter_mut() {
                pursuer.on_mode_switched(switched, &self.grid);
            }
            events.mode_switched = Some(switched.mode);
        }

        let intent = self.intent.take();
        self.player.handle_intent(intent, &self.grid);

        self.player.tick(dt, &self.grid);
        for slot in 0..self.pursuers.len() {
            // Rebuilt per pursuer so later pursuers see earlier ones post-motion.
            let ctx = self.target_context();
            self.pursuers[slot].tick(dt, &self.grid, &ctx);
        }

        if let Some(food) = self.food.as_mut() {
            events.pellets_eaten = food.collect(&self.player);
            self.score += events.pellets_eaten * self.config.pellet_score;
            events.food_area_cleared = food.is_empty();
        }

        events.pursuer_collided = self
            .pursuers
            .iter()
            .any(|pursuer| pursuer.is_colliding_with(&self.player));

        if events.pursuer_collided {
            self.status = SessionStatus::Lost;
        } else if events.food_area_cleared {
            self.status = SessionStatus::Won;
        }
        if self.status.is_over() {
            debug!(status = self.status.as_ref(), score = self.score, tick = self.ticks, "Session over");
        }

        events
    }

    pub fn player_tile(&self) -> IVec2 {
        self.player.tile()
    }

    pub fn player_position(&self) -> Vec2 {
        self.player.position()
    }

    pub fn player_direction(&self) -> Direction {
        self.player.direction()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Looks up the id of the pursuer with the given profile.
    pub fn pursuer_id(&self, kind: PursuerKind) -> Option<ActorId> {
        self.registry.id_of(Role::Pursuer(kind))
    }

    pub fn pursuer(&self, id: ActorId) -> Option<&Pursuer> {
        let slot = self.registry.pursuer_slot(id).ok()?;
        self.pursuers.get(slot)
    }

    pub fn pursuer_tile(&self, id: ActorId) -> Option<IVec2> {
        self.pursuer(id).map(Pursuer::tile)
    }

    pub fn pursuer_direction(&self, id: ActorId) -> Option<Direction> {
        self.pursuer(id).map(Pursuer::direction)
    }

    /// The destination chosen by the pursuer's most recent targeting cycle.
    pub fn pursuer_destination(&self, id: ActorId) -> Option<IVec2> {
        self.pursuer(id).map(Pursuer::destination)
    }

    /// All pursuers, in update order.
    pub fn pursuers(&self) -> &[Pursuer] {
        &self.pursuers
    }

    pub fn current_mode(&self) -> GlobalMode {
        self.mode.mode()
    }

    /// Time spent in the current mode.
    pub fn mode_elapsed(&self) -> f32 {
        self.mode.elapsed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pellets left, or `None` for sessions without food.
    pub fn pellets_remaining(&self) -> Option<usize> {
        self.food.as_ref().map(FoodField::remaining)
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of steps taken so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn grid(&self) -> &CollisionGrid {
        &self.grid
    }

    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

fn validate_spawn(grid: &CollisionGrid, role: Role, tile: IVec2) -> Result<(), MapError> {
    if !grid.contains(tile) {
        return Err(MapError::SpawnOutOfBounds { role, tile });
    }
    if grid.is_blocked(tile) {
        return Err(MapError::SpawnBlocked { role, tile });
    }
    Ok(())
}
