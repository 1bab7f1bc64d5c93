//! Scenario driver for TREMOR.
//!
//! Owns the scenario clock and run state, applies control commands at frame
//! boundaries, and produces `SimulationSnapshot`s for the host.

pub mod config;
pub mod district;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod state;
pub mod systems;

pub use tremor_core as core;

pub use config::SimConfig;
pub use engine::{BuildingAssessment, SimulationEngine};
pub use error::{ConfigError, ScenarioError, SimError};
pub use scenario::ScenarioCatalog;

#[cfg(test)]
mod tests;
