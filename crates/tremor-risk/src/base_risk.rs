//! Static building risk score.

use tremor_core::building::{Building, NeighborhoodRisk, RiskAssessment, RiskFactors};
use tremor_core::constants::{LIQUEFACTION_MAX_POINTS, RETROFIT_BONUS, SOFT_STORY_PENALTY};
use tremor_core::enums::RiskLevel;

use crate::profiles::get_profile;

/// Score a building against its enclosing neighborhood.
///
/// Sum of independent terms (age, material, floors, retrofit, soft story,
/// liquefaction), clamped to [0, 100]. Total over every attribute value.
pub fn compute_base_risk(building: &Building, neighborhood: &NeighborhoodRisk) -> RiskAssessment {
    let age = match building.year_built {
        y if y < 1940 => 25,
        y if y < 1970 => 20,
        y if y < 1990 => 12,
        y if y < 2000 => 6,
        _ => 2,
    };

    let floors = match building.floors {
        f if f >= 4 => 15,
        3 => 10,
        2 => 5,
        _ => 3,
    };

    let retrofit = if building.retrofitted { RETROFIT_BONUS } else { 0 };
    let soft_story = if building.soft_story { SOFT_STORY_PENALTY } else { 0 };

    let liquefaction_raw = neighborhood.risks.liquefaction / 100.0 * LIQUEFACTION_MAX_POINTS;

    let factors = RiskFactors {
        age,
        material: get_profile(building.material).risk_points,
        floors,
        retrofit,
        soft_story,
        liquefaction: liquefaction_raw.round() as i32,
    };

    // The score uses the unrounded liquefaction term; only the breakdown is rounded.
    let sum = (factors.age + factors.material + factors.floors + factors.retrofit + factors.soft_story)
        as f64
        + liquefaction_raw;
    let score = sum.clamp(0.0, 100.0).round() as u8;

    RiskAssessment { score, factors }
}

/// Qualitative band for a final risk score.
pub fn risk_level(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}
