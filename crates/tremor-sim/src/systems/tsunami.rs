//! Tsunami system: wave geometry and one-time flood damage.

use log::debug;

use tremor_core::building::Building;
use tremor_core::constants::MAX_DAMAGE;
use tremor_core::enums::TsunamiPhase;
use tremor_core::events::SimEvent;
use tremor_core::scenario::Scenario;
use tremor_core::state::{DamageMap, TsunamiVisualState};
use tremor_core::types::TsunamiConfig;
use tremor_risk::{apply_flood_damage, evaluate_tsunami};

/// Evaluate the wave at `now`. While the water is advancing, record flood
/// damage for newly inundated buildings and fold it into this frame's damage.
/// Returns the visual state and the banner phase.
#[allow(clippy::too_many_arguments)]
pub fn run(
    scenario: &Scenario,
    buildings: &[Building],
    cfg: &TsunamiConfig,
    now: f64,
    previous_phase: Option<TsunamiPhase>,
    tsunami_damage: &mut DamageMap,
    damage: &mut DamageMap,
    events: &mut Vec<SimEvent>,
) -> (TsunamiVisualState, Option<TsunamiPhase>) {
    let frame = evaluate_tsunami(&scenario.events, cfg, now);

    if let Some(front) = frame.flooding_front {
        for (id, flood) in apply_flood_damage(buildings, front, cfg, tsunami_damage) {
            tsunami_damage.insert(id, flood);
            let total = damage.entry(id).or_insert(0.0);
            *total = (*total + flood).min(MAX_DAMAGE);
            events.push(SimEvent::BuildingFlooded {
                building_id: id,
                damage: flood,
            });
        }
    }

    let phase = frame.phase();
    if phase != previous_phase {
        if let Some(phase) = phase {
            debug!("Tsunami phase -> {phase:?} at t={now:.1}");
            events.push(SimEvent::TsunamiPhaseChanged { phase });
        }
    }

    (frame.visual(), phase)
}
