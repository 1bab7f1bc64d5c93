//! Snapshot system: assembles the published frame from run state.
//!
//! This system is read-only.

use tremor_core::events::SimEvent;
use tremor_core::scenario::Scenario;
use tremor_core::state::{AlertView, DamageStats, SimulationSnapshot};
use tremor_core::types::SimulationClock;

use crate::district::{AssemblyPoint, ResponderUnit};
use crate::state::SimulationState;
use crate::systems::{responders, shelters};

/// Build a complete SimulationSnapshot from the current run state.
pub fn build_snapshot(
    scenario: &Scenario,
    clock: &SimulationClock,
    state: &SimulationState,
    shelter_list: &[AssemblyPoint],
    units: &[ResponderUnit],
    events: Vec<SimEvent>,
) -> SimulationSnapshot {
    SimulationSnapshot {
        scenario_id: scenario.id.clone(),
        clock: *clock,
        shockwaves: state.shockwaves.clone(),
        epicenters: state.epicenters.clone(),
        damage: state.damage.clone(),
        stats: DamageStats::from_damage(state.damage.values()),
        tsunami: state.tsunami,
        alerts: state
            .active_alerts
            .iter()
            .map(|a| AlertView {
                id: a.id.clone(),
                kind: a.kind,
                title: a.title.clone(),
                body: a.body.clone(),
            })
            .collect(),
        shelters: shelters::build_views(shelter_list, state.time, scenario.duration),
        responders: responders::build_views(units, state.time),
        run_complete: state.summary_shown,
        events,
    }
}
