//! Damage map system.

use tremor_core::building::Building;
use tremor_core::scenario::Scenario;
use tremor_core::state::DamageMap;
use tremor_risk::total_damage;

/// Recompute aggregate damage for every building from scratch.
pub fn run(buildings: &[Building], scenario: &Scenario, tsunami_damage: &DamageMap, now: f64) -> DamageMap {
    buildings
        .iter()
        .map(|b| {
            let flood = tsunami_damage.get(&b.id).copied();
            (b.id, total_damage(b, scenario.seismic_events(), now, flood))
        })
        .collect()
}
