//! Footprint input and a synthetic district layout.

use serde::{Deserialize, Serialize};

use tremor_core::constants::STORY_HEIGHT_M;
use tremor_core::types::LatLng;
use tremor_geo::GeoProjection;

/// Outline of one building as supplied by the data loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Outer ring, in order. May be open or closed.
    pub ring: Vec<LatLng>,
    /// Median roof height (meters), if surveyed.
    #[serde(default)]
    pub height_m: Option<f64>,
}

impl Footprint {
    /// Axis-aligned square of side `size_m` centered at local (east, north).
    fn square(proj: &GeoProjection, east: f64, north: f64, size_m: f64, height_m: f64) -> Self {
        let h = size_m / 2.0;
        Self {
            ring: vec![
                proj.to_geo(east - h, north + h),
                proj.to_geo(east + h, north + h),
                proj.to_geo(east + h, north - h),
                proj.to_geo(east - h, north - h),
            ],
            height_m: Some(height_m),
        }
    }
}

/// Regular grid of square footprints, `rows × cols`, starting at `origin`
/// (north-west corner) and stepping `spacing_m` east and south.
///
/// Heights cycle through one to four stories.
pub fn grid_footprints(rows: u32, cols: u32, origin: LatLng, spacing_m: f64) -> Vec<Footprint> {
    let proj = GeoProjection::new(origin);
    let size = spacing_m * 0.6;
    let mut out = Vec::with_capacity((rows * cols) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let stories = 1 + (r * cols + c) % 4;
            out.push(Footprint::square(
                &proj,
                c as f64 * spacing_m,
                -(r as f64) * spacing_m,
                size,
                stories as f64 * STORY_HEIGHT_M,
            ));
        }
    }
    out
}
