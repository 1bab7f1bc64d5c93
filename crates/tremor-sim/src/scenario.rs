//! Scenario catalog: the built-in disaster timelines plus any loaded from JSON.
//!
//! Each scenario defines its seismic and tsunami events, authored alerts,
//! and total duration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tremor_core::enums::AlertKind;
use tremor_core::scenario::{AlertTemplate, Scenario, ScenarioEvent, SeismicEvent};
use tremor_core::types::LatLng;

use crate::error::ScenarioError;

/// Ordered set of scenarios, unique by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// The three built-in Bay Area scenarios.
    pub fn builtin() -> Self {
        Self {
            scenarios: vec![hayward(), offshore_tsunami(), marina_local()],
        }
    }

    /// Build a catalog from a list of scenarios, rejecting empty lists,
    /// duplicate ids, and non-positive durations.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, ScenarioError> {
        if scenarios.is_empty() {
            return Err(ScenarioError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for s in &scenarios {
            if !(s.duration > 0.0) {
                return Err(ScenarioError::NonPositiveDuration(s.id.clone()));
            }
            if !seen.insert(s.id.as_str()) {
                return Err(ScenarioError::DuplicateScenario(s.id.clone()));
            }
        }
        Ok(Self { scenarios })
    }

    /// Parse a JSON array of scenarios.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
        Self::new(scenarios)
    }

    /// Load a JSON scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Overlay `other` onto this catalog. Scenarios with a matching id are
    /// replaced in place; new ids are appended.
    pub fn merge(&mut self, other: ScenarioCatalog) {
        for scenario in other.scenarios {
            match self.scenarios.iter_mut().find(|s| s.id == scenario.id) {
                Some(existing) => *existing = scenario,
                None => self.scenarios.push(scenario),
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn earthquake(time: f64, lat: f64, lng: f64, magnitude: f64, depth: f64, name: &str) -> ScenarioEvent {
    ScenarioEvent::Earthquake(seismic(time, lat, lng, magnitude, depth, name))
}

fn aftershock(time: f64, lat: f64, lng: f64, magnitude: f64, depth: f64, name: &str) -> ScenarioEvent {
    ScenarioEvent::Aftershock(seismic(time, lat, lng, magnitude, depth, name))
}

fn seismic(time: f64, lat: f64, lng: f64, magnitude: f64, depth: f64, name: &str) -> SeismicEvent {
    SeismicEvent {
        time,
        location: LatLng::new(lat, lng),
        magnitude,
        depth,
        name: name.to_string(),
    }
}

fn alert(time: f64, kind: AlertKind, title: &str, body: &str, duration: f64) -> AlertTemplate {
    AlertTemplate {
        time,
        kind,
        title: title.to_string(),
        body: body.to_string(),
        duration,
    }
}

/// "Hayward Fault Rupture"
/// M7.2 on the East Bay fault, four aftershocks over ten minutes. No tsunami.
fn hayward() -> Scenario {
    Scenario {
        id: "hayward".to_string(),
        name: "Hayward Fault Rupture".to_string(),
        description: "Hypothetical M7.2 earthquake on Hayward Fault".to_string(),
        duration: 1200.0,
        events: vec![
            earthquake(0.0, 37.6688, -122.0808, 7.2, 8.0, "Main Rupture"),
            aftershock(60.0, 37.70, -122.10, 5.8, 10.0, "Aftershock 1"),
            aftershock(180.0, 37.65, -122.05, 5.4, 12.0, "Aftershock 2"),
            aftershock(400.0, 37.68, -122.08, 4.9, 15.0, "Aftershock 3"),
            aftershock(600.0, 37.72, -122.12, 5.1, 8.0, "Aftershock 4"),
        ],
        alerts: vec![
            alert(
                5.0,
                AlertKind::Critical,
                "MAJOR EARTHQUAKE",
                "M7.2 earthquake on Hayward Fault. Major damage expected.",
                120.0,
            ),
            alert(
                60.0,
                AlertKind::Warning,
                "AFTERSHOCK DETECTED",
                "M5.8 aftershock. More expected.",
                60.0,
            ),
            alert(
                120.0,
                AlertKind::Advisory,
                "STRUCTURAL DAMAGE",
                "Reports of collapses in Marina, Mission Bay, SOMA.",
                180.0,
            ),
        ],
    }
}

/// "Offshore M8.0 + Tsunami"
/// Worst case: offshore megathrust, warning at 8 minutes, wave at 15.
fn offshore_tsunami() -> Scenario {
    let origin = LatLng::new(37.50, -123.20);
    Scenario {
        id: "offshore_tsunami".to_string(),
        name: "Offshore M8.0 + Tsunami".to_string(),
        description: "Worst case scenario with major offshore earthquake and tsunami".to_string(),
        duration: 1500.0,
        events: vec![
            earthquake(0.0, origin.lat, origin.lng, 8.0, 25.0, "Offshore Quake"),
            aftershock(90.0, 37.55, -123.15, 6.2, 20.0, "Aftershock 1"),
            ScenarioEvent::Tsunami {
                time: 480.0,
                origin,
                wave_height: 4.5,
                arrival_time: 900.0,
                name: "Tsunami Warning".to_string(),
            },
            ScenarioEvent::TsunamiArrival {
                time: 900.0,
                location: LatLng::new(37.803, -122.435),
                wave_height: 3.2,
                name: "Tsunami Impact".to_string(),
            },
        ],
        alerts: vec![
            alert(
                5.0,
                AlertKind::Critical,
                "MASSIVE EARTHQUAKE",
                "M8.0 earthquake detected offshore. Tsunami possible.",
                120.0,
            ),
            alert(
                60.0,
                AlertKind::Critical,
                "TSUNAMI WARNING",
                "Tsunami warning issued. ETA: 14 minutes to Marina.",
                600.0,
            ),
            alert(
                300.0,
                AlertKind::Critical,
                "EVACUATE NOW",
                "Immediate evacuation required for coastal areas.",
                600.0,
            ),
            alert(
                900.0,
                AlertKind::Critical,
                "TSUNAMI ARRIVAL",
                "Tsunami waves arriving at coastline.",
                300.0,
            ),
        ],
    }
}

/// "Marina Local Event"
/// Moderate M5.8 directly under the district, two small aftershocks.
fn marina_local() -> Scenario {
    Scenario {
        id: "marina_local".to_string(),
        name: "Marina Local Event".to_string(),
        description: "Moderate M5.8 earthquake centered near Marina".to_string(),
        duration: 600.0,
        events: vec![
            earthquake(0.0, 37.803, -122.435, 5.8, 10.0, "Local Quake"),
            aftershock(45.0, 37.805, -122.430, 4.2, 8.0, "Aftershock 1"),
            aftershock(120.0, 37.800, -122.440, 3.8, 12.0, "Aftershock 2"),
        ],
        alerts: vec![
            alert(
                5.0,
                AlertKind::Warning,
                "EARTHQUAKE DETECTED",
                "M5.8 earthquake in Marina District.",
                60.0,
            ),
            alert(
                30.0,
                AlertKind::Advisory,
                "DAMAGE REPORTS",
                "Reports of structural damage in Marina.",
                120.0,
            ),
        ],
    }
}
