//! Shelter occupancy.

use tremor_core::constants::*;
use tremor_core::enums::ShelterStatus;
use tremor_core::state::ShelterView;

use crate::district::AssemblyPoint;

/// Occupancy ramps linearly to 85% of capacity over the scenario.
pub fn occupancy(capacity: u32, now: f64, duration: f64) -> u32 {
    if duration <= 0.0 {
        return 0;
    }
    let progress = (now / duration).max(0.0);
    let filled = (capacity as f64 * progress * SHELTER_PEAK_FILL).floor() as u32;
    filled.min(capacity)
}

pub fn status(fill_percent: f64) -> ShelterStatus {
    if fill_percent < SHELTER_FILLING_PERCENT {
        ShelterStatus::Open
    } else if fill_percent < SHELTER_CRITICAL_PERCENT {
        ShelterStatus::Filling
    } else {
        ShelterStatus::Critical
    }
}

pub fn build_views(shelters: &[AssemblyPoint], now: f64, duration: f64) -> Vec<ShelterView> {
    shelters
        .iter()
        .map(|s| {
            let occupancy = occupancy(s.capacity, now, duration);
            let fill_percent = if s.capacity > 0 {
                occupancy as f64 / s.capacity as f64 * 100.0
            } else {
                0.0
            };
            ShelterView {
                id: s.id.clone(),
                name: s.name.clone(),
                location: s.location,
                capacity: s.capacity,
                occupancy,
                fill_percent,
                spots_remaining: s.capacity - occupancy,
                status: status(fill_percent),
            }
        })
        .collect()
}
