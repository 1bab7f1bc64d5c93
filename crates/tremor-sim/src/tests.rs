//! Tests for the scenario driver, run-state systems, and scenario catalog.

use std::io::Write;

use tempfile::NamedTempFile;

use tremor_core::building::{Building, BuildingEdit};
use tremor_core::commands::ControlCommand;
use tremor_core::enums::*;
use tremor_core::events::SimEvent;
use tremor_core::state::{DamageMap, SimulationSnapshot};
use tremor_core::types::{BuildingId, LatLng, PlaybackSpeed};
use tremor_procgen::{grid_footprints, Footprint};
use tremor_risk::calculate_event_damage;

use crate::config::SimConfig;
use crate::district::{builtin_responders, builtin_shelters, NeighborhoodRegistry, Waypoint};
use crate::engine::SimulationEngine;
use crate::error::{ScenarioError, SimError};
use crate::scenario::ScenarioCatalog;
use crate::systems::{responders, shelters};

/// 4×4 block of small buildings just south of the Marina Green.
fn district_footprints() -> Vec<Footprint> {
    grid_footprints(4, 4, LatLng::new(37.8040, -122.4370), 60.0)
}

fn config_for(scenario: &str) -> SimConfig {
    SimConfig {
        initial_scenario: scenario.to_string(),
        ..Default::default()
    }
}

fn engine_for(scenario: &str) -> SimulationEngine {
    SimulationEngine::from_footprints(
        config_for(scenario),
        ScenarioCatalog::builtin(),
        &district_footprints(),
    )
    .unwrap()
}

fn building(id: u32, lat: f64, lng: f64, address: &str) -> Building {
    Building {
        id: BuildingId(id),
        location: LatLng::new(lat, lng),
        address: address.to_string(),
        year_built: 1925,
        material: Material::Brick,
        floors: 2,
        retrofitted: false,
        soft_story: false,
        near_coast: false,
        assessment: None,
    }
}

fn street_engine() -> SimulationEngine {
    street_engine_for("marina_local")
}

/// Seven unretrofitted 1925 brick flats near Beach and Chestnut.
fn street_engine_for(scenario: &str) -> SimulationEngine {
    let buildings = vec![
        building(0, 37.8035, -122.4360, "1200 Beach St"),
        building(1, 37.8036, -122.4362, "1210 Beach St"),
        building(2, 37.8034, -122.4358, "3300 Chestnut St"),
        building(3, 37.8020, -122.4330, "1300 Beach St"),
        building(4, 37.8021, -122.4331, "1400 Beach St"),
        building(5, 37.8022, -122.4332, "1500 Beach St"),
        building(6, 37.8023, -122.4333, "1600 Beach St"),
    ];
    SimulationEngine::new(config_for(scenario), ScenarioCatalog::builtin(), buildings).unwrap()
}

fn at(engine: &mut SimulationEngine, time: f64) -> SimulationSnapshot {
    engine.seek(time);
    engine.tick(0.0)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_inputs() {
    let mut engine_a = engine_for("offshore_tsunami");
    let mut engine_b = engine_for("offshore_tsunami");

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_commands([
            ControlCommand::SetSpeed {
                speed: PlaybackSpeed::X30,
            },
            ControlCommand::Play,
        ]);
    }

    for _ in 0..60 {
        let snap_a = engine_a.tick(1.0);
        let snap_b = engine_b.tick(1.0);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with identical inputs");
    }
}

#[test]
fn test_buildings_scored_on_load() {
    let engine = engine_for("hayward");
    assert_eq!(engine.buildings().len(), 16);
    assert!(engine.buildings().iter().all(|b| b.assessment.is_some()));
}

// ---- Clock ----

#[test]
fn test_paused_engine_does_not_advance() {
    let mut engine = engine_for("hayward");
    let snap = engine.tick(5.0);
    assert_eq!(snap.clock.time, 0.0);
    assert!(!snap.clock.is_playing);
}

#[test]
fn test_play_scales_by_speed() {
    let mut engine = engine_for("hayward");
    engine.queue_commands([
        ControlCommand::SetSpeed {
            speed: PlaybackSpeed::X30,
        },
        ControlCommand::Play,
    ]);
    let snap = engine.tick(1.0);
    assert_eq!(snap.clock.time, 30.0);

    engine.set_speed(PlaybackSpeed::X1);
    let snap = engine.tick(2.0);
    assert_eq!(snap.clock.time, 32.0);
}

#[test]
fn test_playback_stops_at_duration() {
    let mut engine = engine_for("marina_local");
    at(&mut engine, 590.0);
    engine.play();
    let snap = engine.tick(10.0);
    assert_eq!(snap.clock.time, 600.0);
    assert!(!snap.clock.is_playing);
}

#[test]
fn test_seek_clamps_to_scenario() {
    let mut engine = engine_for("marina_local");
    assert_eq!(at(&mut engine, -50.0).clock.time, 0.0);
    assert_eq!(at(&mut engine, 9_000.0).clock.time, 600.0);
}

// ---- Seismic damage ----

#[test]
fn test_marina_local_no_damage_at_rupture() {
    let mut engine = engine_for("marina_local");
    let snap = engine.tick(0.0);
    assert_eq!(snap.damage.len(), 16);
    assert!(snap.damage.values().all(|&d| d == 0.0));
    assert_eq!(snap.stats.intact, 16);
}

#[test]
fn test_marina_local_damage_after_thirty_seconds() {
    let mut engine = engine_for("marina_local");
    let snap = at(&mut engine, 30.0);

    for b in engine.buildings() {
        let expected: f64 = engine
            .scenario()
            .seismic_events()
            .map(|e| calculate_event_damage(b, e, 30.0))
            .sum::<f64>()
            .min(100.0);
        let actual = snap.damage[&b.id];
        assert!(actual > 0.0, "{} undamaged at t=30", b.id);
        assert!((actual - expected).abs() < 1e-9);
    }
}

#[test]
fn test_damage_is_pure_function_of_time() {
    let mut engine = engine_for("hayward");
    let forward = at(&mut engine, 400.0).damage;
    at(&mut engine, 1000.0);
    let back = at(&mut engine, 400.0).damage;
    assert_eq!(forward, back);
}

#[test]
fn test_damage_bounded() {
    let mut engine = engine_for("offshore_tsunami");
    engine.set_speed(PlaybackSpeed::X30);
    engine.play();
    for _ in 0..50 {
        let snap = engine.tick(1.0);
        assert!(snap.damage.values().all(|&d| (0.0..=100.0).contains(&d)));
    }
}

#[test]
fn test_shockwaves_and_epicenters() {
    let mut engine = engine_for("marina_local");

    let snap = at(&mut engine, 30.0);
    assert_eq!(snap.shockwaves.len(), 1);
    let ring = &snap.shockwaves[0];
    assert_eq!(ring.id, "shockwave-0");
    assert_eq!(ring.color, "#ef4444");
    assert!((ring.radius - 43_500.0).abs() < 1e-6);
    assert!((ring.opacity - 0.45).abs() < 1e-9);

    // Main shock ring gone, first aftershock ring just starting.
    let snap = at(&mut engine, 60.0);
    assert_eq!(snap.shockwaves.len(), 1);
    assert_eq!(snap.shockwaves[0].id, "shockwave-45");
    assert_eq!(snap.shockwaves[0].color, "#f97316");
    assert_eq!(snap.epicenters.len(), 2);

    let snap = at(&mut engine, 310.0);
    assert!(snap.shockwaves.is_empty());
    // Main shock marker expired at 300 s; both aftershocks still shown.
    let ids: Vec<&str> = snap.epicenters.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["epicenter-45", "epicenter-120"]);
}

// ---- Tsunami ----

#[test]
fn test_offshore_warning_banner() {
    let mut engine = engine_for("offshore_tsunami");

    let snap = at(&mut engine, 400.0);
    assert!(!snap.tsunami.banner.visible);
    assert!(snap.tsunami.wave_front_latitude.is_none());

    let snap = at(&mut engine, 500.0);
    assert!(snap.tsunami.banner.visible);
    assert_eq!(snap.tsunami.banner.phase, TsunamiPhase::Warning);
    assert!((snap.tsunami.banner.eta - 400.0).abs() < 1e-9);
    assert!(snap.events.contains(&SimEvent::TsunamiPhaseChanged {
        phase: TsunamiPhase::Warning
    }));
}

#[test]
fn test_offshore_arrival() {
    let mut engine = engine_for("offshore_tsunami");
    at(&mut engine, 500.0);
    let snap = at(&mut engine, 901.0);
    assert_eq!(snap.tsunami.banner.phase, TsunamiPhase::Arrived);
    assert_eq!(snap.tsunami.banner.eta, 0.0);
    assert!(snap.tsunami.wave_front_latitude.is_some());
    assert!(snap.tsunami.flood_polygon.is_some());
    assert!(snap.events.contains(&SimEvent::TsunamiPhaseChanged {
        phase: TsunamiPhase::Arrived
    }));
}

#[test]
fn test_no_tsunami_in_hayward() {
    let mut engine = engine_for("hayward");
    for t in [0.0, 500.0, 900.0, 1200.0] {
        let snap = at(&mut engine, t);
        assert!(!snap.tsunami.banner.visible);
        assert!(snap.tsunami.flood_polygon.is_none());
    }
    assert!(engine.state().tsunami_damage.is_empty());
}

#[test]
fn test_flood_damage_recorded_once() {
    let mut engine = engine_for("offshore_tsunami");
    at(&mut engine, 900.0);
    engine.set_speed(PlaybackSpeed::X1);
    engine.play();

    let mut recorded = DamageMap::new();
    let mut flood_events = 0;
    for _ in 0..40 {
        let snap = engine.tick(10.0);
        flood_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::BuildingFlooded { .. }))
            .count();
        for (id, damage) in &recorded {
            assert_eq!(engine.state().tsunami_damage.get(id), Some(damage));
        }
        recorded = engine.state().tsunami_damage.clone();
    }

    // Every building sits between the coast and the maximum inland reach.
    assert_eq!(recorded.len(), 16);
    assert_eq!(flood_events, 16);
    assert!(recorded.values().all(|&d| d >= 30.0));

    // Scrubbing back neither removes nor re-rolls the records.
    let snap = at(&mut engine, 950.0);
    assert_eq!(engine.state().tsunami_damage, recorded);
    for (id, flood) in &recorded {
        assert!(snap.damage[id] >= flood.min(100.0) - 1e-9);
    }
}

// ---- Alerts ----

#[test]
fn test_alert_raised_once() {
    let mut engine = engine_for("marina_local");
    let snap = at(&mut engine, 10.0);
    assert_eq!(snap.alerts.len(), 1);
    assert_eq!(snap.alerts[0].id, "marina_local-EARTHQUAKE DETECTED-5");
    assert_eq!(snap.alerts[0].kind, AlertKind::Warning);
    assert!(snap.events.contains(&SimEvent::AlertRaised {
        alert_id: "marina_local-EARTHQUAKE DETECTED-5".to_string(),
        kind: AlertKind::Warning,
    }));

    // Re-deriving the same time raises nothing new.
    let snap = at(&mut engine, 10.0);
    assert_eq!(snap.alerts.len(), 1);
    assert!(snap.events.is_empty());
}

#[test]
fn test_alert_expires() {
    let mut engine = engine_for("marina_local");
    at(&mut engine, 10.0);
    let snap = at(&mut engine, 80.0);
    let ids: Vec<&str> = snap.alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["marina_local-DAMAGE REPORTS-30"]);
    assert!(snap.events.contains(&SimEvent::AlertExpired {
        alert_id: "marina_local-EARTHQUAKE DETECTED-5".to_string(),
    }));
}

#[test]
fn test_dismissed_alert_never_returns() {
    let mut engine = engine_for("marina_local");
    at(&mut engine, 10.0);
    engine.queue_command(ControlCommand::DismissAlert {
        alert_id: "marina_local-EARTHQUAKE DETECTED-5".to_string(),
    });
    let snap = engine.tick(0.0);
    assert!(snap.alerts.is_empty());

    at(&mut engine, 0.0);
    let snap = at(&mut engine, 12.0);
    assert!(snap.alerts.is_empty());
    assert_eq!(engine.state().triggered_alerts.len(), 1);
}

#[test]
fn test_late_alerts_expire_by_scenario_end() {
    let mut engine = engine_for("hayward");
    let snap = at(&mut engine, 1150.0);
    assert_eq!(snap.alerts.len(), 3);
    assert!(engine
        .state()
        .active_alerts
        .iter()
        .all(|a| a.expires_at <= engine.scenario().duration));

    let snap = at(&mut engine, 1200.0);
    assert!(snap.alerts.is_empty(), "alerts outlived the run: {:?}", snap.alerts);
    assert_eq!(
        snap.events
            .iter()
            .filter(|e| matches!(e, SimEvent::AlertExpired { .. }))
            .count(),
        3
    );

    engine.play();
    let snap = engine.tick(1000.0);
    assert!(snap.alerts.is_empty());
    assert_eq!(engine.state().triggered_alerts.len(), 3);
}

#[test]
fn test_alerts_cleared_by_seeking_before_trigger() {
    let mut engine = engine_for("marina_local");
    assert_eq!(at(&mut engine, 590.0).alerts.len(), 2);

    let snap = at(&mut engine, 0.0);
    assert!(snap.alerts.is_empty());

    // Already raised this run, so moving forward again does not repeat them.
    let snap = at(&mut engine, 40.0);
    assert!(snap.alerts.is_empty());
    assert_eq!(engine.state().triggered_alerts.len(), 2);
}

// ---- End of run ----

#[test]
fn test_run_summary_exactly_once() {
    let mut engine = engine_for("marina_local");
    engine.set_speed(PlaybackSpeed::X30);
    engine.play();

    let mut completions = 0;
    for _ in 0..40 {
        let snap = engine.tick(1.0);
        completions += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::RunComplete { .. }))
            .count();
        if completions == 1 && snap.clock.time >= 540.0 {
            assert!(snap.run_complete);
        }
    }
    assert_eq!(completions, 1);
    assert!(!engine.clock().is_playing, "Run end stops playback");

    // Scrubbing back and forth does not raise it again.
    at(&mut engine, 100.0);
    let snap = at(&mut engine, 590.0);
    assert!(snap.events.is_empty());

    let summary = engine.run_summary().unwrap();
    assert_eq!(summary.scenario_id, "marina_local");
    assert_eq!(summary.buildings, 16);
    assert_eq!(summary.stats.total(), 16);
    assert_eq!(summary.alerts_triggered, 2);
}

#[test]
fn test_tsunami_run_ends_after_water_clears() {
    let mut engine = engine_for("offshore_tsunami");
    // 900 + 300 + 60 + 180 + 30
    assert!(!at(&mut engine, 1469.0).run_complete);
    let snap = at(&mut engine, 1470.0);
    assert!(snap.run_complete);
    assert_eq!(snap.tsunami.banner.phase, TsunamiPhase::Clear);
}

// ---- Reset and scenario change ----

#[test]
fn test_reset_matches_fresh_engine() {
    let mut fresh = engine_for("offshore_tsunami");
    let fresh_snap = fresh.tick(0.0);

    let mut engine = engine_for("offshore_tsunami");
    engine.play();
    for _ in 0..10 {
        engine.tick(5.0);
    }
    at(&mut engine, 1000.0);
    engine.dismiss_alert("offshore_tsunami-TSUNAMI ARRIVAL-900");
    at(&mut engine, 1470.0);
    assert!(engine.run_summary().is_some());

    engine.queue_command(ControlCommand::Reset);
    let snap = engine.tick(0.0);

    assert_eq!(
        serde_json::to_string(&snap).unwrap(),
        serde_json::to_string(&fresh_snap).unwrap()
    );
    assert_eq!(
        serde_json::to_string(engine.state()).unwrap(),
        serde_json::to_string(fresh.state()).unwrap()
    );
}

#[test]
fn test_select_scenario_resets_run() {
    let mut engine = engine_for("offshore_tsunami");
    at(&mut engine, 1000.0);
    engine.set_speed(PlaybackSpeed::X5);

    engine.queue_command(ControlCommand::SelectScenario {
        scenario_id: "hayward".to_string(),
    });
    let snap = engine.tick(0.0);
    assert_eq!(snap.scenario_id, "hayward");
    assert_eq!(snap.clock.time, 0.0);
    assert_eq!(snap.clock.speed, PlaybackSpeed::X5);
    assert!(engine.state().tsunami_damage.is_empty());
    assert!(engine.state().triggered_alerts.is_empty());
}

#[test]
fn test_bad_commands_ignored() {
    let mut engine = engine_for("hayward");
    engine.queue_commands([
        ControlCommand::SelectScenario {
            scenario_id: "atlantis".to_string(),
        },
        ControlCommand::EditBuilding {
            building_id: BuildingId(9_999),
            edit: BuildingEdit::Floors(3),
        },
        ControlCommand::DismissAlert {
            alert_id: "nope".to_string(),
        },
    ]);
    let snap = engine.tick(0.0);
    assert_eq!(snap.scenario_id, "hayward");

    assert!(matches!(
        engine.select_scenario("atlantis"),
        Err(SimError::UnknownScenario(_))
    ));
    assert!(matches!(
        engine.edit_building(BuildingId(9_999), BuildingEdit::Floors(3)),
        Err(SimError::UnknownBuilding(BuildingId(9_999)))
    ));
}

#[test]
fn test_unknown_initial_scenario() {
    let result = SimulationEngine::new(
        config_for("atlantis"),
        ScenarioCatalog::builtin(),
        Vec::new(),
    );
    assert!(matches!(result, Err(SimError::UnknownScenario(_))));
}

// ---- What-if edits ----

#[test]
fn test_edit_rescores_without_touching_flood_history() {
    let mut engine = street_engine_for("offshore_tsunami");
    at(&mut engine, 1150.0);
    let flooded = engine.state().tsunami_damage.clone();
    assert!(!flooded.is_empty());

    let id = BuildingId(0);
    let before = engine.assess_building(id).unwrap().building.base_risk_or_default();
    engine.queue_command(ControlCommand::EditBuilding {
        building_id: id,
        edit: BuildingEdit::Retrofitted(true),
    });
    engine.tick(0.0);
    let after = engine.assess_building(id).unwrap().building.base_risk_or_default();

    assert_eq!(before - after, 15.0);
    assert_eq!(engine.state().tsunami_damage, flooded);
}

// ---- Assessment and search ----

#[test]
fn test_assess_building() {
    let mut engine = street_engine();
    engine.tick(0.0);

    let assessment = engine.assess_building(BuildingId(0)).unwrap();
    assert_eq!(assessment.neighborhood.name, "Marina");
    let stats = assessment.neighbor.stats.unwrap();
    assert_eq!(stats.total, 2);
    assert!(assessment.neighbor.boost <= 20);
    let expected =
        (assessment.building.base_risk_or_default() + assessment.neighbor.boost as f64).min(100.0);
    assert_eq!(assessment.final_risk, expected);
    assert_eq!(assessment.level, RiskLevel::from_score(expected));
    assert!(!assessment.recommendations.is_empty());

    assert!(engine.assess_building(BuildingId(42)).is_none());
}

#[test]
fn test_assess_uses_registered_boundary() {
    let mut engine = street_engine();
    engine.register_neighborhood_boundary(
        "Pacific Heights",
        vec![
            LatLng::new(37.8040, -122.4370),
            LatLng::new(37.8040, -122.4350),
            LatLng::new(37.8030, -122.4350),
            LatLng::new(37.8030, -122.4370),
        ],
    );
    let inside = engine.assess_building(BuildingId(0)).unwrap();
    assert_eq!(inside.neighborhood.name, "Pacific Heights");
    let outside = engine.assess_building(BuildingId(3)).unwrap();
    assert_eq!(outside.neighborhood.name, "Marina");
}

#[test]
fn test_search_buildings() {
    let engine = street_engine();
    assert!(engine.search_buildings("be").is_empty());

    let hits = engine.search_buildings("BEACH");
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].address, "1200 Beach St");

    let hits = engine.search_buildings("chestnut");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, BuildingId(2));
}

// ---- Shelters and responders ----

#[test]
fn test_shelter_occupancy_monotone_and_capped() {
    let mut engine = engine_for("hayward");
    let mut last = vec![0u32; 3];
    for t in (0..=1200).step_by(60) {
        let snap = at(&mut engine, t as f64);
        for (i, s) in snap.shelters.iter().enumerate() {
            assert!(s.occupancy >= last[i]);
            assert!(s.occupancy <= s.capacity);
            assert_eq!(s.spots_remaining, s.capacity - s.occupancy);
            last[i] = s.occupancy;
        }
    }
    // 85% of each capacity at the end.
    assert_eq!(last, vec![1530, 1870, 1275]);
}

#[test]
fn test_shelter_status_bands() {
    assert_eq!(shelters::status(10.0), ShelterStatus::Open);
    assert_eq!(shelters::status(50.0), ShelterStatus::Filling);
    assert_eq!(shelters::status(75.0), ShelterStatus::Critical);
    assert_eq!(shelters::occupancy(1000, 600.0, 600.0), 850);
    assert_eq!(shelters::occupancy(1000, 0.0, 600.0), 0);
}

#[test]
fn test_builtin_district_data() {
    let shelters = builtin_shelters();
    assert_eq!(shelters.len(), 3);
    assert_eq!(shelters[1].capacity, 2200);

    let units = builtin_responders();
    assert_eq!(units.len(), 7);
    for unit in &units {
        assert_eq!(unit.deployment_path[0].time, 0.0);
        assert_eq!(unit.base_location, unit.deployment_path[0].location);
    }

    let registry = NeighborhoodRegistry::builtin();
    assert_eq!(registry.len(), 13);
    assert_eq!(registry.district().overall_risk, 74.0);
    assert_eq!(registry.lookup("Presidio").overall_risk, 50.0);
}

#[test]
fn test_responder_path_endpoints() {
    let units = builtin_responders();
    let engine16 = &units[0];
    let path = &engine16.deployment_path;

    let start = responders::position_at(path, engine16.base_location, 0.0);
    assert_eq!(start, path[0].location);

    let end = responders::position_at(path, engine16.base_location, 900.0);
    assert_eq!(end, path[path.len() - 1].location);
    let later = responders::position_at(path, engine16.base_location, 5_000.0);
    assert_eq!(later, path[path.len() - 1].location);

    // Halfway between the station and the first waypoint.
    let mid = responders::position_at(path, engine16.base_location, 30.0);
    assert!((mid.lat - 37.7940).abs() < 1e-9);
    assert!((mid.lng - -122.4400).abs() < 1e-9);
}

#[test]
fn test_responder_before_path_starts() {
    let path = vec![
        Waypoint {
            time: 10.0,
            location: LatLng::new(1.0, 1.0),
        },
        Waypoint {
            time: 20.0,
            location: LatLng::new(2.0, 2.0),
        },
    ];
    let base = LatLng::new(0.0, 0.0);
    assert_eq!(responders::position_at(&path, base, 5.0), path[0].location);
    assert_eq!(responders::position_at(&[], base, 5.0), base);
}

// ---- Scenario catalog ----

const CUSTOM_SCENARIOS: &str = r#"[
    {"id": "drill", "name": "Drill", "description": "Tabletop exercise", "duration": 300,
     "events": [{"type": "earthquake", "time": 0, "location": {"lat": 37.80, "lng": -122.43},
                 "magnitude": 5.0, "depth": 10, "name": "Drill Quake"}],
     "alerts": [{"time": 2, "type": "advisory", "title": "DRILL", "body": "This is a drill.",
                 "duration": 30}]},
    {"id": "hayward", "name": "Hayward (revised)", "description": "", "duration": 900,
     "events": []}
]"#;

#[test]
fn test_builtin_catalog() {
    let catalog = ScenarioCatalog::builtin();
    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["hayward", "offshore_tsunami", "marina_local"]);

    let offshore = catalog.get("offshore_tsunami").unwrap();
    assert_eq!(offshore.duration, 1500.0);
    assert_eq!(offshore.tsunami_arrival_time(), Some(900.0));
    assert_eq!(offshore.alerts.len(), 4);
    assert_eq!(catalog.get("hayward").unwrap().seismic_events().count(), 5);
}

#[test]
fn test_catalog_from_json_and_merge() {
    let custom = ScenarioCatalog::from_json(CUSTOM_SCENARIOS).unwrap();
    assert_eq!(custom.len(), 2);

    let mut catalog = ScenarioCatalog::builtin();
    catalog.merge(custom);
    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["hayward", "offshore_tsunami", "marina_local", "drill"]);
    assert_eq!(catalog.get("hayward").unwrap().name, "Hayward (revised)");
}

#[test]
fn test_catalog_load_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CUSTOM_SCENARIOS.as_bytes()).unwrap();
    let path = file.into_temp_path();

    let catalog = ScenarioCatalog::load(&path).unwrap();
    assert!(catalog.get("drill").is_some());

    let err = ScenarioCatalog::load("/nonexistent/scenarios.json").unwrap_err();
    assert!(matches!(err, ScenarioError::Io { .. }));
}

#[test]
fn test_catalog_validation() {
    assert!(matches!(
        ScenarioCatalog::from_json("[]"),
        Err(ScenarioError::EmptyCatalog)
    ));
    assert!(matches!(
        ScenarioCatalog::from_json("{not json"),
        Err(ScenarioError::Parse(_))
    ));
    assert!(matches!(
        ScenarioCatalog::from_json(
            r#"[{"id": "x", "name": "X", "description": "", "duration": 0, "events": []}]"#
        ),
        Err(ScenarioError::NonPositiveDuration(id)) if id == "x"
    ));
    assert!(matches!(
        ScenarioCatalog::from_json(
            r#"[{"id": "x", "name": "X", "description": "", "duration": 10, "events": []},
                {"id": "x", "name": "X", "description": "", "duration": 10, "events": []}]"#
        ),
        Err(ScenarioError::DuplicateScenario(id)) if id == "x"
    ));
}

#[test]
fn test_custom_scenario_runs() {
    let mut catalog = ScenarioCatalog::builtin();
    catalog.merge(ScenarioCatalog::from_json(CUSTOM_SCENARIOS).unwrap());
    let mut engine =
        SimulationEngine::from_footprints(config_for("drill"), catalog, &district_footprints())
            .unwrap();
    let snap = at(&mut engine, 5.0);
    assert_eq!(snap.alerts.len(), 1);
    assert_eq!(snap.alerts[0].id, "drill-DRILL-2");
    // No tsunami events: run ends at 90% of the duration.
    assert!(at(&mut engine, 270.0).run_complete);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ticking forward in whole-second steps lands on the same derived
        /// state as seeking straight to the target time.
        #[test]
        fn prop_seek_matches_ticking(step in 1u32..10, steps in 1u32..50, marina in any::<bool>()) {
            let id = if marina { "marina_local" } else { "hayward" };
            let target = (step * steps) as f64;

            let mut ticked = engine_for(id);
            ticked.set_speed(PlaybackSpeed::X1);
            ticked.play();
            for _ in 0..steps {
                ticked.tick(step as f64);
            }

            let mut seeked = engine_for(id);
            at(&mut seeked, target);

            prop_assert_eq!(ticked.clock().time, target);
            prop_assert_eq!(&ticked.state().damage, &seeked.state().damage);
            prop_assert_eq!(&ticked.state().shockwaves, &seeked.state().shockwaves);
            prop_assert_eq!(&ticked.state().epicenters, &seeked.state().epicenters);
            prop_assert_eq!(ticked.state().tsunami, seeked.state().tsunami);
        }

        /// Re-deriving the same instant twice changes nothing.
        #[test]
        fn prop_seek_idempotent(t in 0.0f64..1500.0) {
            let mut engine = engine_for("offshore_tsunami");
            at(&mut engine, t);
            let first = engine.state().clone();
            let snap = at(&mut engine, t);
            prop_assert_eq!(engine.state(), &first);
            prop_assert!(snap.events.is_empty());
        }
    }
}
