//! Run state derived from the clock.

use std::collections::BTreeSet;

use serde::Serialize;

use tremor_core::enums::TsunamiPhase;
use tremor_core::events::AlertInstance;
use tremor_core::state::{DamageMap, EpicenterView, RunSummary, ShockwaveView, TsunamiVisualState};

/// Everything the engine derives from scenario time. Rebuilt each frame
/// and swapped in whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationState {
    pub time: f64,
    pub shockwaves: Vec<ShockwaveView>,
    pub epicenters: Vec<EpicenterView>,
    /// Seismic damage plus recorded flood damage, capped at 100.
    pub damage: DamageMap,
    /// One-time flood damage per building. Entries never change once written.
    pub tsunami_damage: DamageMap,
    pub tsunami: TsunamiVisualState,
    pub active_alerts: Vec<AlertInstance>,
    /// Every alert id raised this run, including expired and dismissed ones.
    pub triggered_alerts: BTreeSet<String>,
    pub summary_shown: bool,
    /// Last phase seen, for transition events. `None` while the banner is hidden.
    pub tsunami_phase: Option<TsunamiPhase>,
    pub summary: Option<RunSummary>,
}
