use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use maze_chase::config::SimulationConfig;
use maze_chase::constants::{LOOP_TIME, RAW_BOARD};
use maze_chase::entity::selector::open_directions;
use maze_chase::formatter::{self, TickFormatter};
use maze_chase::game::Simulation;
use maze_chase::map::direction::Direction;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Runs a headless maze-chase session with a random-walking player.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Stop after this many ticks.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Seed for the autopilot; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Pace the loop to the nominal tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,
    /// Scale movement by the tick length instead of stepping a fixed distance.
    #[arg(long)]
    scaled_step: bool,
    /// Log debug output from the simulation.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}={level}", name = env!("CARGO_CRATE_NAME"))));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .event_format(TickFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Picks a heading for the player whenever it sits on a tile center.
///
/// Prefers any open direction other than straight back; reverses only at dead ends.
struct Autopilot {
    rng: SmallRng,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn intent(&mut self, simulation: &Simulation) -> Option<Direction> {
        let player = simulation.player();
        if !player.motion.is_aligned() {
            return None;
        }

        let heading = player.direction();
        let options = open_directions(simulation.grid(), player.tile(), heading);
        if options.is_empty() {
            return Some(heading.opposite());
        }
        Some(options[self.rng.random_range(0..options.len())])
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let seed = cli
        .seed
        .unwrap_or_else(|| OffsetDateTime::now_utc().unix_timestamp_nanos() as u64);
    let mut config = SimulationConfig::default();
    if cli.scaled_step {
        config = config.with_scaled_step();
    }

    let mut simulation = Simulation::from_board(&RAW_BOARD, config)?;
    let mut autopilot = Autopilot::new(seed);
    let dt = LOOP_TIME.as_secs_f32();

    for entry in simulation.registry().iter() {
        debug!(id = %entry.id, role = %entry.role, slot = entry.slot, "Actor registered");
    }

    info!(
        seed,
        ticks = cli.ticks,
        realtime = cli.realtime,
        step_timing = ?simulation.config().step_timing,
        "Starting loop ({:.3}ms)",
        LOOP_TIME.as_secs_f32() * 1000.0
    );

    while simulation.tick_count() < cli.ticks && !simulation.status().is_over() {
        let start = Instant::now();

        simulation.apply_player_intent(autopilot.intent(&simulation));
        let events = simulation.step(dt);
        formatter::set_tick(simulation.tick_count());

        if let Some(mode) = events.mode_switched {
            info!(%mode, "Mode switched");
        }
        if events.pellets_eaten > 0 {
            debug!(
                eaten = events.pellets_eaten,
                remaining = simulation.pellets_remaining().unwrap_or_default(),
                "Pellets eaten"
            );
        }

        if cli.realtime {
            let elapsed = start.elapsed();
            if elapsed < LOOP_TIME {
                spin_sleep::sleep(LOOP_TIME - elapsed);
            } else {
                warn!("Loop behind schedule by: {:?}", elapsed - LOOP_TIME);
            }
        }
    }

    info!(
        status = simulation.status().as_ref(),
        ticks = simulation.tick_count(),
        score = simulation.score(),
        remaining = simulation.pellets_remaining().unwrap_or_default(),
        "Run finished"
    );

    Ok(())
}
