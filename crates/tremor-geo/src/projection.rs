//! Local metric projection: converts between lat/lng and east/north meters.
//!
//! Equirectangular projection around a district reference point. Good to a
//! fraction of a percent across a few kilometers, which is all the synthetic
//! district layout needs.

use tremor_core::types::LatLng;

/// Meters per degree of latitude (nearly constant across the globe).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Projection anchored at a district reference point.
///
/// The reference point maps to local origin (0, 0). x = East, y = North.
#[derive(Debug, Clone)]
pub struct GeoProjection {
    pub origin: LatLng,
    /// Cached cos(origin.lat) for longitude scaling.
    cos_ref_lat: f64,
}

impl GeoProjection {
    pub fn new(origin: LatLng) -> Self {
        Self {
            origin,
            cos_ref_lat: origin.lat.to_radians().cos(),
        }
    }

    /// Convert a coordinate to local [east, north] meters.
    pub fn to_local(&self, p: LatLng) -> [f64; 2] {
        let x = (p.lng - self.origin.lng) * self.lng_scale();
        let y = (p.lat - self.origin.lat) * METERS_PER_DEGREE;
        [x, y]
    }

    /// Convert local east/north meters back to a coordinate.
    pub fn to_geo(&self, east: f64, north: f64) -> LatLng {
        LatLng::new(
            self.origin.lat + north / METERS_PER_DEGREE,
            self.origin.lng + east / self.lng_scale(),
        )
    }

    /// Meters per degree of longitude at the reference latitude.
    pub fn lng_scale(&self) -> f64 {
        METERS_PER_DEGREE * self.cos_ref_lat
    }
}
