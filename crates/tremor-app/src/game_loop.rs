//! Simulation loop thread. Runs the engine at the host frame rate and
//! publishes snapshots.
//!
//! The engine moves into the thread, which owns it from then on. Commands
//! arrive via `mpsc` channel; the latest snapshot is stored in shared state
//! for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::debug;

use tremor_core::state::{RunSummary, SimulationSnapshot};
use tremor_sim::SimulationEngine;

use crate::state::LoopCommand;

/// Wall-clock length of one frame at `frame_rate` Hz.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / frame_rate.max(1) as u64)
}

/// Wall-clock seconds since `last`, which moves up to `now`. The clock
/// advances by real elapsed time, so a frame that runs late still covers the
/// full gap.
fn take_elapsed(last: &mut Instant, now: Instant) -> f64 {
    let elapsed = now.saturating_duration_since(*last);
    *last = now;
    elapsed.as_secs_f64()
}

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary, if
/// the run completed before shutdown.
pub fn spawn_sim_loop(
    engine: SimulationEngine,
    frame_rate: u32,
    latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
) -> io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<Option<RunSummary>>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tremor-sim-loop".into())
        .spawn(move || run_sim_loop(engine, frame_rate, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The realtime loop. Runs until Shutdown or channel disconnect.
fn run_sim_loop(
    mut engine: SimulationEngine,
    frame_rate: u32,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimulationSnapshot>>,
) -> Option<RunSummary> {
    let frame = frame_duration(frame_rate);
    let mut next_frame_time = Instant::now();
    let mut last_tick = next_frame_time;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Control(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("Simulation loop stopping at t={:.1}", engine.clock().time);
                    return engine.run_summary().cloned();
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by real elapsed time (engine handles pause semantics internally)
        let elapsed = take_elapsed(&mut last_tick, Instant::now());
        let snapshot = engine.tick(elapsed);

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            // Too far behind, reset the schedule to avoid a catch-up spiral.
            // No scenario time is lost: the next tick measures the full gap.
            next_frame_time = now;
        }
    }
}

/// Step the engine frame by frame without sleeping until playback stops.
/// The caller is expected to have queued `Play`.
pub fn run_to_completion(engine: &mut SimulationEngine, frame_rate: u32) -> Option<RunSummary> {
    let dt = frame_duration(frame_rate).as_secs_f64();
    loop {
        let snapshot = engine.tick(dt);
        if !snapshot.clock.is_playing {
            break;
        }
    }
    engine.run_summary().cloned()
}
