//! Simulation snapshot: the complete derived state published after each frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{BuildingId, LatLng, SimulationClock};

/// Cumulative 0-100 damage per building.
pub type DamageMap = BTreeMap<BuildingId, f64>;

/// Complete state handed to the rendering layer after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub scenario_id: String,
    pub clock: SimulationClock,
    pub shockwaves: Vec<ShockwaveView>,
    pub epicenters: Vec<EpicenterView>,
    pub damage: DamageMap,
    pub stats: DamageStats,
    pub tsunami: TsunamiVisualState,
    pub alerts: Vec<AlertView>,
    pub shelters: Vec<ShelterView>,
    pub responders: Vec<ResponderView>,
    /// True once the end-of-run summary has been raised.
    pub run_complete: bool,
    pub events: Vec<SimEvent>,
}

/// An expanding shock front ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockwaveView {
    pub id: String,
    pub center: LatLng,
    /// Current front radius (meters).
    pub radius: f64,
    pub opacity: f64,
    pub color: String,
}

/// Epicenter marker for a recent rupture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicenterView {
    pub id: String,
    pub position: LatLng,
    pub magnitude: f64,
    pub name: String,
}

/// Tsunami warning banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TsunamiBanner {
    pub visible: bool,
    pub phase: TsunamiPhase,
    /// Seconds until arrival; zero once the wave has arrived.
    pub eta: f64,
}

/// Wave and inundation geometry at the current time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TsunamiVisualState {
    pub banner: TsunamiBanner,
    /// `None` while the wave is off-screen or gone.
    pub wave_front_latitude: Option<f64>,
    /// Quad spanning the flooded band, ordered NW, NE, SE, SW.
    pub flood_polygon: Option<[LatLng; 4]>,
}

/// An active alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertView {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub body: String,
}

/// Evacuation shelter occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterView {
    pub id: String,
    pub name: String,
    pub location: LatLng,
    pub capacity: u32,
    pub occupancy: u32,
    pub fill_percent: f64,
    pub spots_remaining: u32,
    pub status: ShelterStatus,
}

/// First-responder position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderView {
    pub id: String,
    pub kind: ResponderKind,
    pub name: String,
    pub position: LatLng,
}

/// Building counts per damage band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageStats {
    pub intact: u32,
    pub minor: u32,
    pub moderate: u32,
    pub severe: u32,
    pub collapsed: u32,
}

impl DamageStats {
    pub fn from_damage<'a>(damage: impl IntoIterator<Item = &'a f64>) -> Self {
        let mut stats = DamageStats::default();
        for &d in damage {
            match DamageCategory::from_damage(d) {
                DamageCategory::Intact => stats.intact += 1,
                DamageCategory::Minor => stats.minor += 1,
                DamageCategory::Moderate => stats.moderate += 1,
                DamageCategory::Severe => stats.severe += 1,
                DamageCategory::Collapsed => stats.collapsed += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> u32 {
        self.intact + self.minor + self.moderate + self.severe + self.collapsed
    }
}

/// End-of-run report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub scenario_id: String,
    /// Scenario time at which the run ended.
    pub time: f64,
    pub buildings: u32,
    pub stats: DamageStats,
    pub flooded_buildings: u32,
    pub alerts_triggered: u32,
}
