//! Buildings, their risk breakdown, and neighborhood risk records.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UNSCORED_RISK;
use crate::enums::{Material, RecommendationCategory, RecommendationPriority};
use crate::types::{BuildingId, LatLng};

/// Point breakdown behind a base risk score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub age: i32,
    pub material: i32,
    pub floors: i32,
    /// Zero or negative.
    pub retrofit: i32,
    pub soft_story: i32,
    pub liquefaction: i32,
}

/// Static 0-100 risk score with its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub factors: RiskFactors,
}

/// One structure in the district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub location: LatLng,
    pub address: String,
    pub year_built: i32,
    pub material: Material,
    pub floors: u32,
    pub retrofitted: bool,
    pub soft_story: bool,
    pub near_coast: bool,
    /// `None` until the building has been scored.
    pub assessment: Option<RiskAssessment>,
}

impl Building {
    /// Base risk score, if scored.
    pub fn base_risk(&self) -> Option<u8> {
        self.assessment.map(|a| a.score)
    }

    /// Base risk with the unscored default applied. A zero score is treated
    /// as unscored.
    pub fn base_risk_or_default(&self) -> f64 {
        match self.base_risk() {
            Some(score) if score > 0 => score as f64,
            _ => DEFAULT_UNSCORED_RISK,
        }
    }

    /// Apply a what-if edit. The caller is responsible for rescoring.
    pub fn apply_edit(&mut self, edit: BuildingEdit) {
        match edit {
            BuildingEdit::YearBuilt(year) => self.year_built = year,
            BuildingEdit::Material(material) => self.material = material,
            BuildingEdit::Floors(floors) => self.floors = floors.max(1),
            BuildingEdit::Retrofitted(value) => self.retrofitted = value,
            BuildingEdit::SoftStory(value) => self.soft_story = value,
        }
    }
}

/// A single attribute change made in what-if mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum BuildingEdit {
    YearBuilt(i32),
    Material(Material),
    Floors(u32),
    Retrofitted(bool),
    SoftStory(bool),
}

/// Per-category 0-100 hazard scores for a neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub seismic: f64,
    pub liquefaction: f64,
    pub tsunami: f64,
    pub infrastructure: f64,
    pub displacement: f64,
    pub property: f64,
}

/// Curated hazard record for one neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodRisk {
    pub name: String,
    pub risks: CategoryScores,
    pub overall_risk: f64,
    pub summary: String,
}

impl NeighborhoodRisk {
    /// Profile used for neighborhoods without curated data.
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            risks: CategoryScores {
                seismic: 50.0,
                liquefaction: 30.0,
                tsunami: 20.0,
                infrastructure: 40.0,
                displacement: 45.0,
                property: 55.0,
            },
            overall_risk: 50.0,
            summary: format!("{name} neighborhood in San Francisco."),
        }
    }
}

/// Preparedness advice for a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: RecommendationPriority,
    pub category: RecommendationCategory,
}
