//! Seeded attribute assignment.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tremor_core::building::{Building, NeighborhoodRisk};
use tremor_core::constants::*;
use tremor_core::enums::Material;
use tremor_core::types::{BuildingId, LatLng};
use tremor_geo::footprint_centroid;
use tremor_risk::compute_base_risk;

use crate::footprint::Footprint;

const STREETS: [&str; 5] = [
    "Marina Blvd",
    "Beach St",
    "Bay St",
    "Chestnut St",
    "Lombard St",
];

/// Stable uniform sample in [0, 1) for a footprint index and location.
fn sample(index: usize, at: LatLng) -> f64 {
    let lat_band = ((at.lat - 37.795) * 1000.0).floor() as i64;
    let lng_band = ((at.lng + 122.45) * 1000.0).floor() as i64;
    let seed = index as i64 * 17 + lat_band * 31 + lng_band * 47;
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    rng.gen::<f64>()
}

/// Year, material, and retrofit status for a location and sample.
///
/// The northern waterfront is mostly pre-war wood and brick; the old core
/// around Chestnut St mixes in some later stock; everything else is newer.
fn zone_attributes(at: LatLng, r: f64) -> (i32, Material, bool) {
    let northern_coastal = at.lat > 37.803;
    let old_core = at.lat > 37.800 && at.lat < 37.805 && at.lng > -122.44 && at.lng < -122.43;

    if northern_coastal {
        let material = if r < 0.6 { Material::Wood } else { Material::Brick };
        (1920 + (r * 35.0).floor() as i32, material, r > 0.8)
    } else if old_core {
        let material = if r < 0.4 {
            Material::Brick
        } else if r < 0.7 {
            Material::Wood
        } else {
            Material::Mixed
        };
        (1935 + (r * 30.0).floor() as i32, material, r > 0.6)
    } else {
        let material = if r < 0.3 {
            Material::Concrete
        } else if r < 0.6 {
            Material::Wood
        } else {
            Material::Mixed
        };
        (1960 + (r * 50.0).floor() as i32, material, r > 0.4)
    }
}

fn floors_from_height(height_m: Option<f64>) -> u32 {
    let h = height_m
        .filter(|h| *h != 0.0 && !h.is_nan())
        .unwrap_or(DEFAULT_FOOTPRINT_HEIGHT_M);
    (h / STORY_HEIGHT_M).round().clamp(1.0, MAX_SYNTH_FLOORS as f64) as u32
}

/// Synthesize and score one building per footprint. Footprints with an
/// empty ring are skipped; ids always follow the footprint index.
pub fn synthesize_buildings(footprints: &[Footprint], district: &NeighborhoodRisk) -> Vec<Building> {
    footprints
        .iter()
        .enumerate()
        .filter_map(|(i, fp)| {
            let Some(location) = footprint_centroid(&fp.ring) else {
                debug!("footprint {i} has an empty ring, skipping");
                return None;
            };
            let r = sample(i, location);
            let (year_built, material, retrofitted) = zone_attributes(location, r);
            let floors = floors_from_height(fp.height_m);
            let street = STREETS[((r * 5.0).floor() as usize).min(STREETS.len() - 1)];

            let mut building = Building {
                id: BuildingId(i as u32),
                location,
                address: format!("{} {}", (1000.0 + r * 3000.0).floor() as u32, street),
                year_built,
                material,
                floors,
                retrofitted,
                soft_story: floors >= 2 && r < 0.3 && !retrofitted,
                near_coast: location.lat > NEAR_COAST_LAT,
                assessment: None,
            };
            building.assessment = Some(compute_base_risk(&building, district));
            Some(building)
        })
        .collect()
}
