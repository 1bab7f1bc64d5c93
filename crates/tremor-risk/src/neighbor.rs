//! Neighbor contagion: effective risk rises with the condition of nearby buildings.

use serde::{Deserialize, Serialize};

use tremor_core::building::Building;
use tremor_core::constants::*;
use tremor_core::enums::Material;
use tremor_core::state::DamageMap;
use tremor_core::types::BuildingId;
use tremor_geo::haversine_distance;

/// Aggregate condition of a building's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborStats {
    pub total: u32,
    /// Mean neighbor risk, rounded.
    pub avg_risk: f64,
    pub high_risk_count: u32,
    pub vulnerable_count: u32,
}

/// Result of a contagion evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborBoost {
    /// Additional risk points, in [0, 20].
    pub boost: u8,
    /// First few neighbor ids, in building order.
    pub neighbor_sample: Vec<BuildingId>,
    /// `None` when the building has no neighbors.
    pub stats: Option<NeighborStats>,
}

/// Risk attributed to a neighbor: its current damage, else its base risk,
/// else the unscored default. Zero counts as absent at each step.
fn neighbor_risk(neighbor: &Building, damage: &DamageMap) -> f64 {
    match damage.get(&neighbor.id) {
        Some(&d) if d != 0.0 && !d.is_nan() => d,
        _ => neighbor.base_risk_or_default(),
    }
}

fn is_vulnerable(b: &Building) -> bool {
    !b.retrofitted && (b.year_built < 1970 || b.material == Material::Brick)
}

/// Compute the contagion boost for `building` from every other building
/// within the neighbor radius.
pub fn compute_neighbor_boost(
    building: &Building,
    all: &[Building],
    damage: &DamageMap,
) -> NeighborBoost {
    let neighbors: Vec<&Building> = all
        .iter()
        .filter(|other| {
            other.id != building.id
                && haversine_distance(building.location, other.location) <= NEIGHBOR_RADIUS_M
        })
        .collect();

    if neighbors.is_empty() {
        return NeighborBoost::default();
    }

    let risks: Vec<f64> = neighbors.iter().map(|n| neighbor_risk(n, damage)).collect();
    let avg_risk = risks.iter().sum::<f64>() / risks.len() as f64;
    let high_risk_count = risks.iter().filter(|&&r| r >= NEIGHBOR_HIGH_RISK).count() as u32;
    let vulnerable_count = neighbors.iter().filter(|n| is_vulnerable(n)).count() as u32;

    let avg_tier = if avg_risk > 80.0 {
        8
    } else if avg_risk > 60.0 {
        5
    } else if avg_risk > 40.0 {
        2
    } else {
        0
    };

    let high_risk_tier = match high_risk_count {
        c if c >= 5 => 8,
        c if c >= 3 => 5,
        c if c >= 1 => 2,
        _ => 0,
    };

    let vulnerable_tier = match vulnerable_count {
        c if c >= 4 => 6,
        c if c >= 2 => 3,
        c if c >= 1 => 1,
        _ => 0,
    };

    let boost = (avg_tier + high_risk_tier + vulnerable_tier).min(NEIGHBOR_BOOST_CAP);

    NeighborBoost {
        boost,
        neighbor_sample: neighbors
            .iter()
            .take(NEIGHBOR_SAMPLE_SIZE)
            .map(|n| n.id)
            .collect(),
        stats: Some(NeighborStats {
            total: neighbors.len() as u32,
            avg_risk: avg_risk.round(),
            high_risk_count,
            vulnerable_count,
        }),
    }
}
