//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Primary structural material of a building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Wood,
    Brick,
    Concrete,
    Mixed,
    /// Anything unrecognized. Scored with the generic weight.
    #[default]
    #[serde(other)]
    Other,
}

/// Alert severity, as authored in scenario alert templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Advisory,
    Warning,
    Critical,
}

/// Phase shown on the tsunami banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TsunamiPhase {
    /// Wave inbound; banner counts down to arrival.
    #[default]
    Warning,
    /// Water advancing inland or at peak.
    Arrived,
    Receding,
    /// Terminal: water has fully receded.
    Clear,
}

/// Structural damage band for a 0-100 damage value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCategory {
    Intact,
    Minor,
    Moderate,
    Severe,
    Collapsed,
}

impl DamageCategory {
    pub fn from_damage(damage: f64) -> Self {
        if damage < 10.0 {
            DamageCategory::Intact
        } else if damage < 30.0 {
            DamageCategory::Minor
        } else if damage < 60.0 {
            DamageCategory::Moderate
        } else if damage < 90.0 {
            DamageCategory::Severe
        } else {
            DamageCategory::Collapsed
        }
    }

    /// Display color used by the rendering layer.
    pub fn color(self) -> &'static str {
        match self {
            DamageCategory::Intact => "#10b981",
            DamageCategory::Minor => "#f59e0b",
            DamageCategory::Moderate => "#f97316",
            DamageCategory::Severe => "#ef4444",
            DamageCategory::Collapsed => "#1f2937",
        }
    }
}

/// Qualitative band for a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            RiskLevel::Extreme
        } else if score >= 55.0 {
            RiskLevel::High
        } else if score >= 35.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#f97316",
            RiskLevel::Extreme => "#ef4444",
        }
    }
}

/// First-responder unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponderKind {
    Fire,
    Ambulance,
    SearchRescue,
    Command,
}

/// Evacuation shelter fill status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelterStatus {
    #[default]
    Open,
    Filling,
    Critical,
}

/// Urgency of a preparedness recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

/// Area a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Structural,
    Preparedness,
    Evacuation,
    Community,
}
