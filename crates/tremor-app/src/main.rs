use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::info;

use tremor_app::game_loop::{run_to_completion, spawn_sim_loop};
use tremor_app::state::AppState;
use tremor_core::commands::ControlCommand;
use tremor_core::types::{LatLng, PlaybackSpeed};
use tremor_procgen::{grid_footprints, Footprint};
use tremor_sim::{ScenarioCatalog, SimConfig, SimulationEngine};

/// North-west corner of the synthetic district, just inland of Marina Green.
const DISTRICT_ORIGIN: LatLng = LatLng::new(37.8060, -122.4450);

/// Spacing of the synthetic district grid (meters).
const GRID_SPACING_M: f64 = 40.0;

#[derive(Parser)]
#[command(author, version, about = "Earthquake and tsunami scenario runner")]
struct Args {
    /// Scenario to run (overrides the config file)
    #[arg(long)]
    scenario: Option<String>,
    /// Playback multiplier: 1, 5, 10 or 30
    #[arg(long)]
    speed: Option<u32>,
    /// Rows in the synthetic district grid
    #[arg(long, default_value_t = 12)]
    rows: u32,
    /// Columns in the synthetic district grid
    #[arg(long, default_value_t = 20)]
    cols: u32,
    /// Load building footprints from JSON instead of the synthetic grid
    #[arg(long)]
    footprints: Option<PathBuf>,
    /// Extra scenario catalog (JSON), merged over the built-ins
    #[arg(long)]
    scenarios: Option<PathBuf>,
    /// Load engine config from JSON
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace frames in wall-clock time on a loop thread
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Frame rate in Hz (overrides the config file)
    #[arg(long)]
    frame_rate: Option<u32>,
}

fn load_footprints(path: &Path) -> anyhow::Result<Vec<Footprint>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading footprints {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing footprints {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(scenario) = args.scenario {
        config.initial_scenario = scenario;
    }
    if let Some(speed) = args.speed {
        config.speed = PlaybackSpeed::try_from(speed)?;
    }
    if let Some(frame_rate) = args.frame_rate {
        config.frame_rate = frame_rate;
    }

    let mut catalog = ScenarioCatalog::builtin();
    if let Some(path) = &args.scenarios {
        let extra = ScenarioCatalog::load(path)
            .with_context(|| format!("loading scenarios {}", path.display()))?;
        catalog.merge(extra);
    }

    let footprints = match &args.footprints {
        Some(path) => load_footprints(path)?,
        None => grid_footprints(args.rows, args.cols, DISTRICT_ORIGIN, GRID_SPACING_M),
    };

    let frame_rate = config.frame_rate;
    let mut engine = SimulationEngine::from_footprints(config, catalog, &footprints)
        .context("starting simulation")?;
    info!(
        "Running '{}' over {} buildings",
        engine.scenario().name,
        engine.buildings().len()
    );

    engine.queue_command(ControlCommand::Play);
    let summary = if args.realtime {
        let app = AppState::new();
        let (tx, handle) = spawn_sim_loop(engine, frame_rate, Arc::clone(&app.latest_snapshot))
            .context("spawning simulation loop")?;
        *app.command_tx
            .lock()
            .map_err(|_| anyhow::anyhow!("command channel lock poisoned"))? = Some(tx);
        *app.running
            .lock()
            .map_err(|_| anyhow::anyhow!("running flag lock poisoned"))? = true;

        loop {
            thread::sleep(Duration::from_millis(100));
            match app.snapshot() {
                Some(snapshot) if !snapshot.clock.is_playing => break,
                _ => {}
            }
        }
        app.shutdown();
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("simulation loop panicked"))?
    } else {
        run_to_completion(&mut engine, frame_rate)
    };

    match summary {
        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
        None => println!("Playback stopped before the run completed"),
    }
    Ok(())
}
