//! Tsunami phase model.
//!
//! A pure state machine over scenario time: idle, warning, arrived,
//! receding, clear. Wave-front latitude and flood polygon are derived per
//! sub-phase. Flood damage is applied by the driver only while the water is
//! advancing, and each building is flooded at most once per run.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tremor_core::building::Building;
use tremor_core::constants::*;
use tremor_core::enums::{Material, TsunamiPhase};
use tremor_core::scenario::ScenarioEvent;
use tremor_core::state::{DamageMap, TsunamiBanner, TsunamiVisualState};
use tremor_core::types::{BuildingId, LatLng, TsunamiConfig};

/// Tsunami state at a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TsunamiFrame {
    pub banner: TsunamiBanner,
    /// `None` while the front is at or beyond the ocean start, and once clear.
    pub wave_front_latitude: Option<f64>,
    pub flood_polygon: Option<[LatLng; 4]>,
    /// Current front while the water is advancing inland. Flood damage is
    /// applied only when this is set.
    pub flooding_front: Option<f64>,
}

impl TsunamiFrame {
    /// The part of the frame the rendering layer sees.
    pub fn visual(&self) -> TsunamiVisualState {
        TsunamiVisualState {
            banner: self.banner,
            wave_front_latitude: self.wave_front_latitude,
            flood_polygon: self.flood_polygon,
        }
    }

    /// `None` while the banner is hidden.
    pub fn phase(&self) -> Option<TsunamiPhase> {
        self.banner.visible.then_some(self.banner.phase)
    }
}

/// Warning time and coastal arrival time for a scenario's tsunami, if it has one.
///
/// Arrival comes from the arrival event when present, else the warning's own
/// arrival time, else the warning time plus the configured approach.
pub fn tsunami_timing(events: &[ScenarioEvent], cfg: &TsunamiConfig) -> Option<(f64, f64)> {
    let (warning_time, declared_arrival) = events.iter().find_map(|e| match e {
        ScenarioEvent::Tsunami {
            time, arrival_time, ..
        } => Some((*time, *arrival_time)),
        _ => None,
    })?;

    let arrival = events
        .iter()
        .find_map(|e| match e {
            ScenarioEvent::TsunamiArrival { time, .. } => Some(*time),
            _ => None,
        })
        .unwrap_or(if declared_arrival > warning_time {
            declared_arrival
        } else {
            warning_time + cfg.approach_duration
        });

    Some((warning_time, arrival))
}

/// Quad spanning from just past the coastline down to `front`, NW, NE, SE, SW.
fn flood_polygon(cfg: &TsunamiConfig, front: f64) -> [LatLng; 4] {
    let sea_edge = cfg.coastline + FLOOD_POLYGON_COAST_OFFSET;
    [
        LatLng::new(sea_edge, cfg.west_edge),
        LatLng::new(sea_edge, cfg.east_edge),
        LatLng::new(front, cfg.east_edge),
        LatLng::new(front, cfg.west_edge),
    ]
}

/// Evaluate the tsunami model at scenario time `now`.
pub fn evaluate_tsunami(events: &[ScenarioEvent], cfg: &TsunamiConfig, now: f64) -> TsunamiFrame {
    let Some((warning_time, arrival)) = tsunami_timing(events, cfg) else {
        return TsunamiFrame::default();
    };

    let since_warning = now - warning_time;
    if since_warning < 0.0 {
        return TsunamiFrame::default();
    }

    let eta = arrival - now;
    let since_arrival = now - arrival;
    let flooded_until = cfg.advance_duration + cfg.peak_duration;
    let clear_at = flooded_until + cfg.recede_duration;

    let phase = if eta > 0.0 {
        TsunamiPhase::Warning
    } else if since_arrival < flooded_until {
        TsunamiPhase::Arrived
    } else if since_arrival < clear_at {
        TsunamiPhase::Receding
    } else {
        TsunamiPhase::Clear
    };
    let banner = TsunamiBanner {
        visible: true,
        phase,
        eta: eta.max(0.0),
    };

    let max_penetration = cfg.max_penetration();
    let mut front = cfg.ocean_start;
    let mut polygon = None;
    let mut flooding_front = None;

    if since_arrival < 0.0 {
        // Approaching
        let window = arrival - warning_time;
        let progress = if window > 0.0 {
            (since_warning / window).max(0.0)
        } else {
            1.0
        };
        front = cfg.ocean_start - (cfg.ocean_start - cfg.coastline) * progress;
    } else if since_arrival < cfg.advance_duration {
        // Advancing, eased out
        let t = since_arrival / cfg.advance_duration;
        front = cfg.coastline - max_penetration * t * (2.0 - t);
        polygon = Some(flood_polygon(cfg, front));
        flooding_front = Some(front);
    } else if since_arrival < flooded_until {
        // Peak
        front = cfg.max_inland;
        polygon = Some(flood_polygon(cfg, front));
    } else if since_arrival < clear_at {
        // Receding, eased in
        let t = (since_arrival - flooded_until) / cfg.recede_duration;
        front = cfg.max_inland + max_penetration * t * t * t;
        polygon = Some(flood_polygon(cfg, front));
    }

    TsunamiFrame {
        banner,
        wave_front_latitude: (front < cfg.ocean_start).then_some(front),
        flood_polygon: polygon,
        flooding_front,
    }
}

fn flood_age_factor(year_built: i32) -> f64 {
    if year_built < 1970 {
        1.3
    } else if year_built < 1990 {
        1.15
    } else {
        1.0
    }
}

fn flood_material_factor(material: Material) -> f64 {
    crate::profiles::get_profile(material).flood_factor
}

/// Fixed-seed jitter in [-7.5, 7.5) for a building's position in the
/// district list.
fn flood_jitter(index: usize) -> f64 {
    let seed = (index as u64).wrapping_mul(7919).wrapping_add(54321);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_range(-FLOOD_JITTER..FLOOD_JITTER)
}

/// Flood damage for every building newly under water with the front at
/// `front`. Buildings already in `recorded` are skipped; the caller records
/// the returned values and never changes them afterwards. Jitter is keyed by
/// position in `buildings`, not by id, since ids keep gaps left by skipped
/// footprints.
pub fn apply_flood_damage(
    buildings: &[Building],
    front: f64,
    cfg: &TsunamiConfig,
    recorded: &DamageMap,
) -> Vec<(BuildingId, f64)> {
    let max_depth = cfg.max_penetration();
    buildings
        .iter()
        .enumerate()
        .filter(|(_, b)| {
            cfg.contains_longitude(b.location.lng)
                && b.location.lat >= front
                && b.location.lat <= cfg.coastline
                && !recorded.contains_key(&b.id)
        })
        .map(|(position, b)| {
            let normalized_depth = if max_depth > 0.0 {
                ((cfg.coastline - b.location.lat) / max_depth).min(1.0)
            } else {
                1.0
            };
            let retrofit = if b.retrofitted { 0.75 } else { 1.0 };
            let base = FLOOD_BASE_DAMAGE + (1.0 - normalized_depth) * FLOOD_DEPTH_DAMAGE;
            let damage = (base
                * flood_age_factor(b.year_built)
                * flood_material_factor(b.material)
                * retrofit
                + flood_jitter(position))
            .max(FLOOD_MIN_DAMAGE);
            debug!("{} flooded: damage {:.1}", b.id, damage);
            (b.id, damage)
        })
        .collect()
}
