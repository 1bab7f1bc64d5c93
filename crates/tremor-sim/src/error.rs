//! Error types for the simulation crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use tremor_core::types::BuildingId;

/// Failure loading or validating a scenario catalog.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("reading scenario catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing scenario catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scenario '{0}' must have a positive duration")]
    NonPositiveDuration(String),
    #[error("scenario '{0}' is defined more than once")]
    DuplicateScenario(String),
    #[error("scenario catalog is empty")]
    EmptyCatalog,
}

/// Failure loading a simulation config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine-level failures. Only raised by direct method calls; queued
/// commands log and drop these instead.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("unknown building {0}")]
    UnknownBuilding(BuildingId),
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
