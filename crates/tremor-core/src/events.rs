//! Alerts and one-shot events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AlertKind, TsunamiPhase};
use crate::state::RunSummary;
use crate::types::BuildingId;

/// An alert template that has fired in the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertInstance {
    /// `{scenario_id}-{title}-{time}`.
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
    /// Scenario time at which the alert fired.
    pub triggered_at: f64,
    /// Scenario time at which the alert leaves the active list.
    pub expires_at: f64,
}

/// Events raised during a frame, drained into that frame's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    AlertRaised { alert_id: String, kind: AlertKind },
    AlertExpired { alert_id: String },
    /// A building was inundated and received its one-time flood damage.
    BuildingFlooded { building_id: BuildingId, damage: f64 },
    TsunamiPhaseChanged { phase: TsunamiPhase },
    /// Raised at most once per run.
    RunComplete { summary: RunSummary },
}
