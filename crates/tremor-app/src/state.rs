//! State shared between the host thread and the simulation loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tremor_core::commands::ControlCommand;
use tremor_core::state::SimulationSnapshot;

/// Commands sent from the host to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control command to forward to the simulation engine.
    Control(ControlCommand),
    /// Stop the loop thread after the current frame.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Option` covers the time before the loop is started
/// - the latest snapshot is `Arc`-shared with the loop thread
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Replaced wholesale by the loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a control command to the loop. Returns false if the loop is
    /// not running or has hung up.
    pub fn send(&self, command: ControlCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(LoopCommand::Control(command)).is_ok(),
            None => false,
        }
    }

    /// Copy of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<SimulationSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Ask the loop to stop and forget the sender.
    pub fn shutdown(&self) {
        if let Ok(mut lock) = self.command_tx.lock() {
            if let Some(tx) = lock.take() {
                let _ = tx.send(LoopCommand::Shutdown);
            }
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }
}
