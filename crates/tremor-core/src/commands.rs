//! Control commands sent from the UI to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::building::BuildingEdit;
use crate::types::{BuildingId, PlaybackSpeed};

/// All possible control actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    // --- Playback ---
    Play,
    Pause,
    /// Zero the clock and clear all run state.
    Reset,
    /// Jump to a scenario time (seconds). Out-of-range targets are clamped.
    Seek { time: f64 },
    SetSpeed { speed: PlaybackSpeed },

    // --- Scenario ---
    /// Switch scenarios. Implies a full reset.
    SelectScenario { scenario_id: String },

    // --- Alerts ---
    DismissAlert { alert_id: String },

    // --- What-if ---
    /// Change one attribute and rescore the building's base risk.
    EditBuilding {
        building_id: BuildingId,
        edit: BuildingEdit,
    },
}
