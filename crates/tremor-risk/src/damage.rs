//! Seismic event damage.
//!
//! Damage is a pure function of (building, event, time). The driver sums it
//! over every rupture each frame rather than accumulating history, which is
//! what makes seeking in either direction safe.

use tremor_core::building::Building;
use tremor_core::constants::*;
use tremor_core::enums::DamageCategory;
use tremor_core::scenario::SeismicEvent;
use tremor_geo::haversine_distance;

use crate::profiles::get_profile;

/// Full radius of an event's shock front (meters).
pub fn max_shockwave_radius(magnitude: f64) -> f64 {
    magnitude * SHOCKWAVE_RADIUS_PER_MAGNITUDE
}

/// Shock front radius `elapsed` seconds after rupture (meters).
pub fn shockwave_radius(magnitude: f64, elapsed: f64) -> f64 {
    let progress = elapsed.clamp(0.0, SHOCKWAVE_DURATION_SECS) / SHOCKWAVE_DURATION_SECS;
    progress * max_shockwave_radius(magnitude)
}

fn age_multiplier(year_built: i32) -> f64 {
    match year_built {
        y if y < 1940 => 1.6,
        y if y < 1980 => 1.3,
        y if y >= 2000 => 0.7,
        _ => 1.0,
    }
}

/// Damage contributed by a single event at scenario time `now`. Zero before
/// the rupture and until the shock front reaches the building.
pub fn calculate_event_damage(building: &Building, event: &SeismicEvent, now: f64) -> f64 {
    if now < event.time {
        return 0.0;
    }
    let elapsed = now - event.time;
    let distance_m = haversine_distance(building.location, event.location);
    let max_radius = max_shockwave_radius(event.magnitude);

    if max_radius <= 0.0 || distance_m > shockwave_radius(event.magnitude, elapsed) {
        return 0.0;
    }

    // Ramp in over a few seconds after the front passes.
    let front_arrival = distance_m / max_radius * SHOCKWAVE_DURATION_SECS;
    let ramp = ((elapsed - front_arrival) / DAMAGE_RAMP_SECS).min(1.0);

    let magnitude_effect = 10f64.powf((event.magnitude - 5.0) * 0.5);
    let distance_effect = 1.0 / (1.0 + distance_m / 1000.0 / ATTENUATION_SOFTENING_KM).powi(2);
    let base = magnitude_effect * distance_effect * BASE_DAMAGE_SCALE;

    let vulnerability = building.base_risk_or_default() / 100.0;
    let material = get_profile(building.material).seismic_factor;
    let age = age_multiplier(building.year_built);
    let retrofit = if building.retrofitted { 0.6 } else { 1.0 };
    let soft_story = if building.soft_story { 1.4 } else { 1.0 };

    let damage = base
        * vulnerability
        * material
        * age
        * retrofit
        * soft_story
        * LIQUEFACTION_ZONE_MULTIPLIER
        * ramp;
    damage.max(0.0)
}

/// Aggregate damage at `now`: every earthquake and aftershock plus any
/// recorded flood damage, capped at 100.
pub fn total_damage<'a>(
    building: &Building,
    events: impl IntoIterator<Item = &'a SeismicEvent>,
    now: f64,
    flood_damage: Option<f64>,
) -> f64 {
    let seismic: f64 = events
        .into_iter()
        .map(|e| calculate_event_damage(building, e, now))
        .sum();
    (seismic + flood_damage.unwrap_or(0.0)).clamp(0.0, MAX_DAMAGE)
}

pub fn damage_category(damage: f64) -> DamageCategory {
    DamageCategory::from_damage(damage)
}
