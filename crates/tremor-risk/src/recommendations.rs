//! Preparedness recommendations for a single building.

use tremor_core::building::{Building, NeighborhoodRisk, Recommendation};
use tremor_core::enums::{RecommendationCategory, RecommendationPriority};

use crate::neighbor::NeighborBoost;

fn recommendation(
    title: &str,
    description: &str,
    priority: RecommendationPriority,
    category: RecommendationCategory,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority,
        category,
    }
}

/// Advice in priority order of discovery. The emergency kit entry is always last.
pub fn generate_recommendations(
    building: &Building,
    neighborhood: &NeighborhoodRisk,
    neighbors: &NeighborBoost,
) -> Vec<Recommendation> {
    use RecommendationCategory::*;
    use RecommendationPriority::*;

    let mut out = Vec::new();

    if !building.retrofitted && building.year_built < 1980 {
        out.push(recommendation(
            "Seismic Retrofit",
            "Your building was constructed before modern seismic codes. A retrofit could reduce your risk score by up to 15 points.",
            High,
            Structural,
        ));
    }

    if building.soft_story {
        out.push(recommendation(
            "Soft Story Reinforcement",
            "Buildings with soft stories (like parking on ground floor) are vulnerable to collapse. Consider reinforcement.",
            High,
            Structural,
        ));
    }

    if neighborhood.risks.liquefaction > 70.0 {
        out.push(recommendation(
            "Liquefaction Preparedness",
            "Your area has high liquefaction risk. Secure heavy furniture and have an evacuation plan.",
            Medium,
            Preparedness,
        ));
    }

    if neighborhood.risks.tsunami > 50.0 {
        out.push(recommendation(
            "Know Evacuation Routes",
            "You are in a potential tsunami zone. Learn routes to higher ground.",
            Medium,
            Evacuation,
        ));
    }

    if neighbors.stats.is_some_and(|s| s.vulnerable_count > 2) {
        out.push(recommendation(
            "Community Preparedness",
            "Several nearby buildings are vulnerable. Consider organizing neighborhood emergency planning.",
            Medium,
            Community,
        ));
    }

    out.push(recommendation(
        "Emergency Kit",
        "Maintain a 72-hour emergency kit with water, food, flashlight, and first aid supplies.",
        Low,
        Preparedness,
    ));

    out
}
