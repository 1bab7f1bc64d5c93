//! Scenario definitions: a timeline of seismic and tsunami events plus alerts.

use serde::{Deserialize, Serialize};

use crate::enums::AlertKind;
use crate::types::LatLng;

/// An earthquake or aftershock rupture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    /// Scenario time of rupture (seconds).
    pub time: f64,
    pub location: LatLng,
    pub magnitude: f64,
    /// Hypocenter depth (km). Carried for display only.
    pub depth: f64,
    pub name: String,
}

/// One entry on a scenario timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Earthquake(SeismicEvent),
    Aftershock(SeismicEvent),
    /// Tsunami warning issued for a distant source.
    Tsunami {
        time: f64,
        origin: LatLng,
        wave_height: f64,
        arrival_time: f64,
        name: String,
    },
    /// Wave reaches the district coastline.
    TsunamiArrival {
        time: f64,
        location: LatLng,
        wave_height: f64,
        name: String,
    },
}

impl ScenarioEvent {
    pub fn time(&self) -> f64 {
        match self {
            ScenarioEvent::Earthquake(e) | ScenarioEvent::Aftershock(e) => e.time,
            ScenarioEvent::Tsunami { time, .. } | ScenarioEvent::TsunamiArrival { time, .. } => {
                *time
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScenarioEvent::Earthquake(e) | ScenarioEvent::Aftershock(e) => &e.name,
            ScenarioEvent::Tsunami { name, .. } | ScenarioEvent::TsunamiArrival { name, .. } => {
                name
            }
        }
    }

    /// The rupture, if this event shakes the ground.
    pub fn as_seismic(&self) -> Option<&SeismicEvent> {
        match self {
            ScenarioEvent::Earthquake(e) | ScenarioEvent::Aftershock(e) => Some(e),
            ScenarioEvent::Tsunami { .. } | ScenarioEvent::TsunamiArrival { .. } => None,
        }
    }

    pub fn is_aftershock(&self) -> bool {
        matches!(self, ScenarioEvent::Aftershock(_))
    }
}

/// An alert authored into a scenario, raised once when its time is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertTemplate {
    /// Trigger time (scenario seconds).
    pub time: f64,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
    /// How long the alert stays active (scenario seconds).
    pub duration: f64,
}

/// A complete, immutable disaster scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Total length (seconds).
    pub duration: f64,
    pub events: Vec<ScenarioEvent>,
    #[serde(default)]
    pub alerts: Vec<AlertTemplate>,
}

impl Scenario {
    /// All earthquakes and aftershocks, in timeline order.
    pub fn seismic_events(&self) -> impl Iterator<Item = &SeismicEvent> {
        self.events.iter().filter_map(ScenarioEvent::as_seismic)
    }

    /// The first tsunami warning event, if any.
    pub fn tsunami_event(&self) -> Option<&ScenarioEvent> {
        self.events
            .iter()
            .find(|e| matches!(e, ScenarioEvent::Tsunami { .. }))
    }

    /// Time of the first tsunami arrival event, if any.
    pub fn tsunami_arrival_time(&self) -> Option<f64> {
        self.events.iter().find_map(|e| match e {
            ScenarioEvent::TsunamiArrival { time, .. } => Some(*time),
            _ => None,
        })
    }

    /// Identifier given to an alert raised from `template` in this scenario.
    pub fn alert_id(&self, template: &AlertTemplate) -> String {
        format!("{}-{}-{}", self.id, template.title, template.time)
    }
}
