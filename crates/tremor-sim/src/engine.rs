//! Simulation engine: the scenario clock and driver.
//!
//! `SimulationEngine` owns the clock, the active scenario, the district's
//! buildings, and the run state. It processes queued control commands,
//! re-derives run state from scenario time, and produces
//! `SimulationSnapshot`s. Completely headless, so runs are reproducible in
//! tests.

use std::collections::VecDeque;

use log::{debug, info, warn};
use serde::Serialize;

use tremor_core::building::{Building, BuildingEdit, NeighborhoodRisk, Recommendation};
use tremor_core::commands::ControlCommand;
use tremor_core::constants::{SEARCH_MAX_RESULTS, SEARCH_MIN_QUERY_LEN};
use tremor_core::enums::RiskLevel;
use tremor_core::events::SimEvent;
use tremor_core::scenario::Scenario;
use tremor_core::state::{RunSummary, SimulationSnapshot};
use tremor_core::types::{BuildingId, LatLng, PlaybackSpeed, SimulationClock};
use tremor_procgen::{synthesize_buildings, Footprint};
use tremor_risk::{
    compute_base_risk, compute_neighbor_boost, generate_recommendations, risk_level, NeighborBoost,
};

use crate::config::SimConfig;
use crate::district::{
    builtin_responders, builtin_shelters, AssemblyPoint, NeighborhoodRegistry, ResponderUnit,
};
use crate::error::SimError;
use crate::scenario::ScenarioCatalog;
use crate::state::SimulationState;
use crate::systems;

/// Full risk picture for one building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingAssessment {
    pub building: Building,
    pub neighborhood: NeighborhoodRisk,
    pub neighbor: NeighborBoost,
    /// Base risk plus neighbor boost, capped at 100.
    pub final_risk: f64,
    pub level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
}

/// The simulation engine. Owns the clock and all run state.
pub struct SimulationEngine {
    config: SimConfig,
    catalog: ScenarioCatalog,
    scenario: Scenario,
    buildings: Vec<Building>,
    neighborhoods: NeighborhoodRegistry,
    /// Profile every building is scored against.
    district: NeighborhoodRisk,
    shelters: Vec<AssemblyPoint>,
    responders: Vec<ResponderUnit>,
    clock: SimulationClock,
    state: SimulationState,
    command_queue: VecDeque<ControlCommand>,
    pending_events: Vec<SimEvent>,
    /// Run state must be re-derived on the next tick even if time is unchanged.
    dirty: bool,
}

impl SimulationEngine {
    /// Create an engine over `buildings`. Unscored buildings are scored
    /// against the district profile.
    pub fn new(
        config: SimConfig,
        catalog: ScenarioCatalog,
        mut buildings: Vec<Building>,
    ) -> Result<Self, SimError> {
        let scenario = catalog
            .get(&config.initial_scenario)
            .cloned()
            .ok_or_else(|| SimError::UnknownScenario(config.initial_scenario.clone()))?;

        let neighborhoods = NeighborhoodRegistry::builtin();
        let district = neighborhoods.district();
        for building in buildings.iter_mut().filter(|b| b.assessment.is_none()) {
            building.assessment = Some(compute_base_risk(building, &district));
        }

        info!(
            "Engine ready: scenario '{}', {} buildings",
            scenario.id,
            buildings.len()
        );

        Ok(Self {
            clock: SimulationClock::new(config.speed),
            config,
            catalog,
            scenario,
            buildings,
            neighborhoods,
            district,
            shelters: builtin_shelters(),
            responders: builtin_responders(),
            state: SimulationState::default(),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
            dirty: true,
        })
    }

    /// Synthesize buildings from footprints, then create the engine.
    pub fn from_footprints(
        config: SimConfig,
        catalog: ScenarioCatalog,
        footprints: &[Footprint],
    ) -> Result<Self, SimError> {
        let district = NeighborhoodRegistry::builtin().district();
        let buildings = synthesize_buildings(footprints, &district);
        Self::new(config, catalog, buildings)
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the clock by a wall-clock delta and return the resulting snapshot.
    pub fn tick(&mut self, real_elapsed_secs: f64) -> SimulationSnapshot {
        self.process_commands();

        let duration = self.scenario.duration;
        let advanced = self.clock.advance(real_elapsed_secs, duration);
        if self.clock.is_playing && self.clock.time >= duration {
            self.clock.is_playing = false;
        }

        if advanced || self.dirty {
            self.recompute();
        }

        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build_snapshot(
            &self.scenario,
            &self.clock,
            &self.state,
            &self.shelters,
            &self.responders,
            events,
        )
    }

    // --- Control surface ---

    pub fn play(&mut self) {
        self.clock.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.clock.is_playing = false;
    }

    /// Zero the clock and clear all run state. Scenario, buildings and
    /// playback speed are kept.
    pub fn reset(&mut self) {
        info!("Reset scenario '{}'", self.scenario.id);
        self.clock = SimulationClock::new(self.clock.speed);
        self.state = SimulationState::default();
        self.pending_events.clear();
        self.dirty = true;
    }

    /// Jump to `time`, clamped into the scenario.
    pub fn seek(&mut self, time: f64) {
        let clamped = self.clock.seek(time, self.scenario.duration);
        if clamped != time {
            debug!("Seek to {time} clamped to {clamped}");
        }
        self.dirty = true;
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.clock.speed = speed;
    }

    /// Switch scenarios. Implies a full reset.
    pub fn select_scenario(&mut self, id: &str) -> Result<(), SimError> {
        let scenario = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| SimError::UnknownScenario(id.to_string()))?;
        info!("Selected scenario '{}': {}", scenario.id, scenario.name);
        self.scenario = scenario;
        self.reset();
        Ok(())
    }

    /// Remove an alert from the active list. It stays in the triggered set,
    /// so it never comes back this run.
    pub fn dismiss_alert(&mut self, alert_id: &str) {
        self.state.active_alerts.retain(|a| a.id != alert_id);
    }

    /// Apply a what-if edit and rescore the building. Recorded flood damage
    /// is left alone.
    pub fn edit_building(&mut self, id: BuildingId, edit: BuildingEdit) -> Result<(), SimError> {
        let building = self
            .buildings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(SimError::UnknownBuilding(id))?;
        building.apply_edit(edit);
        building.assessment = Some(compute_base_risk(building, &self.district));
        debug!(
            "Edited {id}: base risk now {}",
            building.base_risk_or_default()
        );
        self.dirty = true;
        Ok(())
    }

    // --- Queries ---

    /// Base risk, neighbor contagion and advice for one building, against
    /// the current damage map.
    pub fn assess_building(&self, id: BuildingId) -> Option<BuildingAssessment> {
        let building = self.buildings.iter().find(|b| b.id == id)?;
        let neighborhood = match self.neighborhoods.locate(building.location) {
            Some(name) => self.neighborhoods.lookup(name),
            None => self.district.clone(),
        };
        let neighbor = compute_neighbor_boost(building, &self.buildings, &self.state.damage);
        let final_risk = (building.base_risk_or_default() + neighbor.boost as f64).min(100.0);
        let recommendations = generate_recommendations(building, &neighborhood, &neighbor);

        Some(BuildingAssessment {
            building: building.clone(),
            neighborhood,
            neighbor,
            final_risk,
            level: risk_level(final_risk),
            recommendations,
        })
    }

    /// Case-insensitive address search. Short queries match nothing.
    pub fn search_buildings(&self, query: &str) -> Vec<&Building> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < SEARCH_MIN_QUERY_LEN {
            return Vec::new();
        }
        self.buildings
            .iter()
            .filter(|b| b.address.to_lowercase().contains(&query))
            .take(SEARCH_MAX_RESULTS)
            .collect()
    }

    /// Register a neighborhood outline used to pick a building's profile.
    pub fn register_neighborhood_boundary(&mut self, name: impl Into<String>, ring: Vec<LatLng>) {
        self.neighborhoods.add_boundary(name, ring);
    }

    // --- Accessors ---

    pub fn clock(&self) -> SimulationClock {
        self.clock
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run_summary(&self) -> Option<&RunSummary> {
        self.state.summary.as_ref()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command. Failures are logged and dropped.
    fn handle_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Play => self.play(),
            ControlCommand::Pause => self.pause(),
            ControlCommand::Reset => self.reset(),
            ControlCommand::Seek { time } => self.seek(time),
            ControlCommand::SetSpeed { speed } => self.set_speed(speed),
            ControlCommand::SelectScenario { scenario_id } => {
                if let Err(e) = self.select_scenario(&scenario_id) {
                    warn!("Ignoring scenario change: {e}");
                }
            }
            ControlCommand::DismissAlert { alert_id } => self.dismiss_alert(&alert_id),
            ControlCommand::EditBuilding { building_id, edit } => {
                if let Err(e) = self.edit_building(building_id, edit) {
                    warn!("Ignoring building edit: {e}");
                }
            }
        }
    }

    /// Re-derive run state at the current clock time and swap it in.
    fn recompute(&mut self) {
        let now = self.clock.time;
        let previous = std::mem::take(&mut self.state);
        let mut next = SimulationState {
            time: now,
            tsunami_damage: previous.tsunami_damage,
            active_alerts: previous.active_alerts,
            triggered_alerts: previous.triggered_alerts,
            summary_shown: previous.summary_shown,
            tsunami_phase: previous.tsunami_phase,
            summary: previous.summary,
            ..SimulationState::default()
        };

        // 1. Shock fronts and epicenters
        next.shockwaves = systems::shockwave::shockwaves(&self.scenario, now);
        next.epicenters = systems::shockwave::epicenters(&self.scenario, now);
        // 2. Damage map (seismic + recorded flood)
        next.damage =
            systems::damage::run(&self.buildings, &self.scenario, &next.tsunami_damage, now);
        // 3. Alerts (expiry, then triggering)
        systems::alerts::run(
            &self.scenario,
            now,
            &mut next.active_alerts,
            &mut next.triggered_alerts,
            &mut self.pending_events,
        );
        // 4. Tsunami geometry and flood damage
        let (tsunami, phase) = systems::tsunami::run(
            &self.scenario,
            &self.buildings,
            &self.config.tsunami,
            now,
            next.tsunami_phase,
            &mut next.tsunami_damage,
            &mut next.damage,
            &mut self.pending_events,
        );
        next.tsunami = tsunami;
        next.tsunami_phase = phase;
        // 5. End of run
        if systems::end_of_run::run(
            &self.scenario,
            &self.config.tsunami,
            self.buildings.len(),
            &mut next,
            &mut self.pending_events,
        ) {
            self.clock.is_playing = false;
        }

        self.state = next;
        self.dirty = false;
    }
}
