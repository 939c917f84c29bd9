//! Burger Stack entry point
//!
//! Headless native driver: loads the config, lets the autopilot play until
//! the tick budget runs out or a lane overflows, and logs what happens.
//!
//! Usage: `burger-stack [config.json]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use burger_stack::GameConfig;
use burger_stack::audio::{AudioManager, LogSink};
use burger_stack::sim::{GamePhase, GameState, TickInput, tick};
use burger_stack::snapshot::Snapshot;

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Burger Stack (headless) starting...");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref());

    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Cannot start: {e}");
            std::process::exit(1);
        }
    };

    let seed = config.seed.unwrap_or_else(time_seed);
    let demo_ticks = config.demo_ticks;
    let mut audio = AudioManager::new(Box::new(LogSink), &config.audio);
    let mut state = GameState::new(config, registry, seed);

    let idle = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    for _ in 0..demo_ticks {
        tick(&mut state, &idle);
        for event in state.take_events() {
            audio.notify(&event);
        }
        if state.phase != GamePhase::Stacking {
            break;
        }
    }

    let snapshot = Snapshot::capture(&state);
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(e) => log::warn!("Could not serialize snapshot: {e}"),
    }

    tick(
        &mut state,
        &TickInput {
            quit: true,
            ..Default::default()
        },
    );

    println!(
        "seed={} ticks={} sold={} score={} phase={:?}",
        seed, snapshot.time_ticks, snapshot.sold, snapshot.score, snapshot.phase
    );
}
