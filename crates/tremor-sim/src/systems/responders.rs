//! Responder positions along their deployment paths.

use glam::DVec2;

use tremor_core::state::ResponderView;
use tremor_core::types::LatLng;

use crate::district::{ResponderUnit, Waypoint};

fn to_vec(p: LatLng) -> DVec2 {
    DVec2::new(p.lat, p.lng)
}

/// Position at `now`: the first waypoint before the path starts, linear
/// interpolation inside a segment, and the last waypoint from its time on.
pub fn position_at(path: &[Waypoint], fallback: LatLng, now: f64) -> LatLng {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return fallback;
    };
    if now >= last.time {
        return last.location;
    }

    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if now >= a.time && now < b.time {
            let span = b.time - a.time;
            let t = if span > 0.0 { (now - a.time) / span } else { 0.0 };
            let p = to_vec(a.location).lerp(to_vec(b.location), t);
            return LatLng::new(p.x, p.y);
        }
    }

    first.location
}

pub fn build_views(units: &[ResponderUnit], now: f64) -> Vec<ResponderView> {
    units
        .iter()
        .map(|u| ResponderView {
            id: u.id.clone(),
            kind: u.kind,
            name: u.name.clone(),
            position: position_at(&u.deployment_path, u.base_location, now),
        })
        .collect()
}
