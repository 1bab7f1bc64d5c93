//! Shock front rings and epicenter markers.

use tremor_core::constants::*;
use tremor_core::scenario::{Scenario, SeismicEvent};
use tremor_core::state::{EpicenterView, ShockwaveView};
use tremor_risk::damage::shockwave_radius;

fn elapsed(event: &SeismicEvent, now: f64) -> f64 {
    now - event.time
}

/// Rings for every rupture whose front is still expanding.
pub fn shockwaves(scenario: &Scenario, now: f64) -> Vec<ShockwaveView> {
    scenario
        .events
        .iter()
        .filter_map(|e| e.as_seismic().map(|s| (s, e.is_aftershock())))
        .filter(|(s, _)| (0.0..SHOCKWAVE_DURATION_SECS).contains(&elapsed(s, now)))
        .map(|(s, aftershock)| {
            let dt = elapsed(s, now);
            let progress = dt / SHOCKWAVE_DURATION_SECS;
            ShockwaveView {
                id: format!("shockwave-{}", s.time),
                center: s.location,
                radius: shockwave_radius(s.magnitude, dt),
                opacity: (SHOCKWAVE_START_OPACITY - progress * 0.7).max(SHOCKWAVE_MIN_OPACITY),
                color: if aftershock {
                    AFTERSHOCK_COLOR
                } else {
                    EARTHQUAKE_COLOR
                }
                .to_string(),
            }
        })
        .collect()
}

/// Markers for ruptures within the last five minutes.
pub fn epicenters(scenario: &Scenario, now: f64) -> Vec<EpicenterView> {
    scenario
        .seismic_events()
        .filter(|s| (0.0..EPICENTER_VISIBLE_SECS).contains(&elapsed(s, now)))
        .map(|s| EpicenterView {
            id: format!("epicenter-{}", s.time),
            position: s.location,
            magnitude: s.magnitude,
            name: s.name.clone(),
        })
        .collect()
}
