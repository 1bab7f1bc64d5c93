//! Building footprint geometry.
//!
//! Rings are open or closed sequences of vertices; a closing vertex equal to
//! the first is tolerated by both functions.

use tremor_core::types::LatLng;

/// Vertex-average centroid of a footprint ring. `None` for an empty ring.
pub fn footprint_centroid(ring: &[LatLng]) -> Option<LatLng> {
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (lat, lng) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(LatLng::new(lat / n, lng / n))
}

/// Ray-casting containment test. Points exactly on an edge may go either way.
pub fn point_in_polygon(point: LatLng, ring: &[LatLng]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let x = point.lng;
    let y = point.lat;
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lng, ring[i].lat);
        let (xj, yj) = (ring[j].lng, ring[j].lat);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
