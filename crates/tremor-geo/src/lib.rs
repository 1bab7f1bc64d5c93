//! Geometry for TREMOR.
//!
//! Great-circle distance, footprint centroids, polygon containment,
//! and a local metric projection for laying out synthetic districts.

pub use tremor_core as core;

pub mod distance;
pub mod footprint;
pub mod projection;

// Re-export key functions for convenience.
pub use distance::haversine_distance;
pub use footprint::{footprint_centroid, point_in_polygon};
pub use projection::GeoProjection;
