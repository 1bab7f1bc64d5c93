//! End-of-run detection.

use log::info;

use tremor_core::constants::{RUN_END_FRACTION, RUN_SETTLE_SECS};
use tremor_core::events::SimEvent;
use tremor_core::scenario::Scenario;
use tremor_core::state::{DamageStats, RunSummary};
use tremor_core::types::TsunamiConfig;

use crate::state::SimulationState;

/// Whether the run is over at `now`. Tsunami runs end once the water has
/// cleared and settled; all others at 90% of the scenario duration.
pub fn is_finished(scenario: &Scenario, cfg: &TsunamiConfig, now: f64) -> bool {
    match scenario.tsunami_arrival_time() {
        Some(arrival) => now - arrival >= cfg.total_inundation() + RUN_SETTLE_SECS,
        None => now >= RUN_END_FRACTION * scenario.duration,
    }
}

/// Raise the run summary the first time the run is finished. Returns true
/// only on that frame.
pub fn run(
    scenario: &Scenario,
    cfg: &TsunamiConfig,
    building_count: usize,
    state: &mut SimulationState,
    events: &mut Vec<SimEvent>,
) -> bool {
    if state.summary_shown || !is_finished(scenario, cfg, state.time) {
        return false;
    }

    let summary = RunSummary {
        scenario_id: scenario.id.clone(),
        time: state.time,
        buildings: building_count as u32,
        stats: DamageStats::from_damage(state.damage.values()),
        flooded_buildings: state.tsunami_damage.len() as u32,
        alerts_triggered: state.triggered_alerts.len() as u32,
    };
    info!(
        "Run complete: {} at t={:.0}s, {} collapsed, {} flooded",
        scenario.id, state.time, summary.stats.collapsed, summary.flooded_buildings
    );
    state.summary_shown = true;
    state.summary = Some(summary.clone());
    events.push(SimEvent::RunComplete { summary });
    true
}
