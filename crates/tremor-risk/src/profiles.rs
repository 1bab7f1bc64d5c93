//! Material-specific vulnerability profiles.
//!
//! Consolidates the per-material weights used by the base risk,
//! seismic damage, and flood damage models.

use tremor_core::enums::Material;

/// Vulnerability profile for a structural material.
pub struct MaterialProfile {
    /// Points contributed to the static base risk score.
    pub risk_points: i32,
    /// Multiplier on seismic event damage.
    pub seismic_factor: f64,
    /// Multiplier on tsunami flood damage.
    pub flood_factor: f64,
}

/// Get the vulnerability profile for a given material.
pub fn get_profile(material: Material) -> MaterialProfile {
    match material {
        Material::Brick => MaterialProfile {
            risk_points: 20,
            seismic_factor: 1.5,
            flood_factor: 1.1,
        },
        Material::Wood => MaterialProfile {
            risk_points: 14,
            seismic_factor: 1.2,
            flood_factor: 1.25,
        },
        Material::Mixed => MaterialProfile {
            risk_points: 10,
            seismic_factor: 1.0,
            flood_factor: 1.0,
        },
        Material::Concrete => MaterialProfile {
            risk_points: 5,
            seismic_factor: 0.8,
            flood_factor: 1.0,
        },
        Material::Other => MaterialProfile {
            risk_points: 8,
            seismic_factor: 1.0,
            flood_factor: 1.0,
        },
    }
}
