//! District setup: neighborhood records, evacuation shelters, and the
//! first-responder roster.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use tremor_core::building::{CategoryScores, NeighborhoodRisk};
use tremor_core::enums::ResponderKind;
use tremor_core::types::LatLng;
use tremor_geo::point_in_polygon;

/// Neighborhood whose profile scores synthesized buildings.
pub const DISTRICT_NAME: &str = "Marina";

/// An evacuation shelter on high ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyPoint {
    pub id: String,
    pub name: String,
    pub location: LatLng,
    pub capacity: u32,
    pub elevation_ft: u32,
    pub facilities: Vec<String>,
}

/// A timed position along a responder's deployment path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Scenario time (seconds).
    pub time: f64,
    pub location: LatLng,
}

/// A first-responder unit and its scripted movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderUnit {
    pub id: String,
    pub kind: ResponderKind,
    pub name: String,
    pub personnel: u32,
    pub equipment: Vec<String>,
    pub base_location: LatLng,
    /// Ordered by time.
    pub deployment_path: Vec<Waypoint>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn shelter(
    id: &str,
    name: &str,
    location: LatLng,
    capacity: u32,
    elevation_ft: u32,
    facilities: &[&str],
) -> AssemblyPoint {
    AssemblyPoint {
        id: id.to_string(),
        name: name.to_string(),
        location,
        capacity,
        elevation_ft,
        facilities: strings(facilities),
    }
}

/// Shelters just south of the district, along Union Street.
pub fn builtin_shelters() -> Vec<AssemblyPoint> {
    vec![
        shelter(
            "ap1",
            "Cow Hollow Recreation",
            LatLng::new(37.7945, -122.4380),
            1800,
            120,
            &["Water", "First Aid", "Restrooms"],
        ),
        shelter(
            "ap2",
            "Union Street Shelter",
            LatLng::new(37.7945, -122.4280),
            2200,
            95,
            &["Water", "First Aid", "Shelter", "Food"],
        ),
        shelter(
            "ap3",
            "Fillmore Community Center",
            LatLng::new(37.7945, -122.4358),
            1500,
            110,
            &["Water", "First Aid", "Medical"],
        ),
    ]
}

fn responder(
    id: &str,
    kind: ResponderKind,
    name: &str,
    personnel: u32,
    equipment: &[&str],
    path: &[(f64, f64, f64)],
) -> ResponderUnit {
    let deployment_path: Vec<Waypoint> = path
        .iter()
        .map(|&(time, lat, lng)| Waypoint {
            time,
            location: LatLng::new(lat, lng),
        })
        .collect();
    ResponderUnit {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        personnel,
        equipment: strings(equipment),
        base_location: deployment_path
            .first()
            .map(|w| w.location)
            .unwrap_or_default(),
        deployment_path,
    }
}

/// The seven units dispatched into the district. Every path starts at the
/// unit's station at t=0.
pub fn builtin_responders() -> Vec<ResponderUnit> {
    use ResponderKind::*;

    vec![
        // Fire
        responder(
            "ft1",
            Fire,
            "Engine 16",
            4,
            &["Hose", "Ladder", "Rescue Tools"],
            &[
                (0.0, 37.7920, -122.4400),
                (60.0, 37.7960, -122.4400),
                (180.0, 37.8000, -122.4380),
                (400.0, 37.8020, -122.4350),
                (600.0, 37.8010, -122.4320),
                (900.0, 37.7980, -122.4350),
            ],
        ),
        responder(
            "ft2",
            Fire,
            "Engine 41",
            4,
            &["Hose", "Ladder", "Jaws of Life"],
            &[
                (0.0, 37.7930, -122.4250),
                (90.0, 37.7970, -122.4260),
                (200.0, 37.8010, -122.4280),
                (450.0, 37.8030, -122.4300),
                (700.0, 37.8000, -122.4260),
                (1000.0, 37.7970, -122.4280),
            ],
        ),
        // Medical
        responder(
            "amb1",
            Ambulance,
            "Medic 7",
            2,
            &["AED", "Stretcher", "Trauma Kit"],
            &[
                (0.0, 37.7905, -122.4380),
                (45.0, 37.7950, -122.4360),
                (150.0, 37.8000, -122.4340),
                (300.0, 37.7960, -122.4380),
                (500.0, 37.8020, -122.4360),
                (800.0, 37.7945, -122.4380),
            ],
        ),
        responder(
            "amb2",
            Ambulance,
            "Medic 12",
            2,
            &["AED", "Stretcher", "Oxygen"],
            &[
                (0.0, 37.7920, -122.4280),
                (60.0, 37.7960, -122.4290),
                (200.0, 37.8010, -122.4270),
                (400.0, 37.7980, -122.4300),
                (650.0, 37.7945, -122.4280),
                (900.0, 37.8000, -122.4320),
            ],
        ),
        // Search and rescue
        responder(
            "sar1",
            SearchRescue,
            "SAR Team Alpha",
            6,
            &["K-9 Unit", "Life Detector", "Rescue Tools"],
            &[
                (0.0, 37.7940, -122.4330),
                (120.0, 37.7990, -122.4350),
                (300.0, 37.8020, -122.4380),
                (500.0, 37.8010, -122.4340),
                (750.0, 37.7990, -122.4300),
                (1000.0, 37.8020, -122.4320),
            ],
        ),
        responder(
            "sar2",
            SearchRescue,
            "SAR Team Bravo",
            5,
            &["Thermal Camera", "Listening Device", "Medical Kit"],
            &[
                (0.0, 37.7940, -122.4270),
                (100.0, 37.7980, -122.4260),
                (250.0, 37.8010, -122.4250),
                (450.0, 37.8030, -122.4280),
                (700.0, 37.8000, -122.4310),
                (950.0, 37.7970, -122.4290),
            ],
        ),
        // Command
        responder(
            "cmd1",
            Command,
            "Incident Command",
            8,
            &["Communications", "Drone", "Planning Maps"],
            &[
                (0.0, 37.7945, -122.4320),
                (300.0, 37.7960, -122.4340),
                (600.0, 37.7970, -122.4320),
                (900.0, 37.7955, -122.4300),
                (1200.0, 37.7945, -122.4320),
            ],
        ),
    ]
}

/// Curated neighborhood hazard records, with optional boundary polygons
/// for point lookup.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodRegistry {
    records: BTreeMap<String, NeighborhoodRisk>,
    boundaries: Vec<(String, Vec<LatLng>)>,
}

impl NeighborhoodRegistry {
    /// The thirteen curated San Francisco neighborhoods. No boundaries.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for record in builtin_neighborhoods() {
            registry.insert(record);
        }
        registry
    }

    pub fn insert(&mut self, record: NeighborhoodRisk) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&NeighborhoodRisk> {
        self.records.get(name)
    }

    /// Record for `name`, or the generic profile when none is curated.
    pub fn lookup(&self, name: &str) -> NeighborhoodRisk {
        match self.records.get(name) {
            Some(record) => record.clone(),
            None => {
                debug!("No risk data for neighborhood '{name}', using default profile");
                NeighborhoodRisk::fallback(name)
            }
        }
    }

    /// The profile that scores the district's buildings.
    pub fn district(&self) -> NeighborhoodRisk {
        self.lookup(DISTRICT_NAME)
    }

    pub fn add_boundary(&mut self, name: impl Into<String>, ring: Vec<LatLng>) {
        self.boundaries.push((name.into(), ring));
    }

    /// Name of the first registered boundary containing `point`.
    pub fn locate(&self, point: LatLng) -> Option<&str> {
        self.boundaries
            .iter()
            .find(|(_, ring)| point_in_polygon(point, ring))
            .map(|(name, _)| name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn neighborhood(name: &str, scores: [f64; 6], overall_risk: f64, summary: &str) -> NeighborhoodRisk {
    let [seismic, liquefaction, tsunami, infrastructure, displacement, property] = scores;
    NeighborhoodRisk {
        name: name.to_string(),
        risks: CategoryScores {
            seismic,
            liquefaction,
            tsunami,
            infrastructure,
            displacement,
            property,
        },
        overall_risk,
        summary: summary.to_string(),
    }
}

// Scores: seismic, liquefaction, tsunami, infrastructure, displacement, property.
fn builtin_neighborhoods() -> Vec<NeighborhoodRisk> {
    vec![
        neighborhood(
            "Marina",
            [78.0, 95.0, 72.0, 58.0, 52.0, 88.0],
            74.0,
            "Built on 1906 earthquake rubble fill. Severe liquefaction damage occurred during 1989 Loma Prieta earthquake.",
        ),
        neighborhood(
            "Rincon Hill",
            [65.0, 70.0, 50.0, 55.0, 40.0, 75.0],
            59.0,
            "High-rise residential area on filled land near the bay. Modern construction but high liquefaction potential.",
        ),
        neighborhood(
            "South Beach",
            [68.0, 78.0, 65.0, 50.0, 42.0, 78.0],
            64.0,
            "Waterfront development on filled land. High liquefaction and tsunami exposure due to proximity to bay.",
        ),
        neighborhood(
            "Chinatown",
            [70.0, 32.0, 15.0, 78.0, 85.0, 72.0],
            59.0,
            "Historic dense neighborhood with many older buildings. High displacement vulnerability.",
        ),
        neighborhood(
            "Nob Hill",
            [38.0, 15.0, 10.0, 42.0, 32.0, 65.0],
            34.0,
            "Hilltop on solid rock. Historic buildings generally well-maintained.",
        ),
        neighborhood(
            "Ingleside",
            [40.0, 28.0, 8.0, 45.0, 50.0, 42.0],
            36.0,
            "Residential neighborhood with moderate risk. Generally stable ground conditions.",
        ),
        neighborhood(
            "Castro",
            [45.0, 22.0, 8.0, 48.0, 42.0, 55.0],
            37.0,
            "Hillside neighborhood with good bedrock. Well-maintained Victorians.",
        ),
        neighborhood(
            "Treasure Island",
            [82.0, 98.0, 88.0, 75.0, 70.0, 85.0],
            83.0,
            "Artificial island with extreme liquefaction risk. Limited evacuation routes.",
        ),
        neighborhood(
            "Mission Bay",
            [65.0, 75.0, 55.0, 35.0, 38.0, 70.0],
            56.0,
            "Modern development on filled land. New construction codes but high liquefaction potential.",
        ),
        neighborhood(
            "Financial District",
            [62.0, 65.0, 35.0, 55.0, 30.0, 90.0],
            56.0,
            "Dense commercial area with mix of old and new high-rises. Some buildings on filled land.",
        ),
        neighborhood(
            "Pacific Heights",
            [35.0, 12.0, 15.0, 38.0, 25.0, 55.0],
            30.0,
            "Affluent hillside neighborhood with solid bedrock foundation.",
        ),
        neighborhood(
            "Sunset",
            [48.0, 35.0, 25.0, 45.0, 55.0, 48.0],
            43.0,
            "Large residential area with varied soil conditions. Some soft-story buildings.",
        ),
        neighborhood(
            "Richmond",
            [45.0, 32.0, 22.0, 42.0, 52.0, 45.0],
            40.0,
            "Residential neighborhood with moderate seismic risk. Near Golden Gate Park.",
        ),
    ]
}
