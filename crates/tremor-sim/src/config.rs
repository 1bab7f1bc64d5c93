//! Engine configuration, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tremor_core::constants::FRAME_RATE;
use tremor_core::types::{PlaybackSpeed, TsunamiConfig};

use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Scenario selected at startup.
    pub initial_scenario: String,
    pub speed: PlaybackSpeed,
    pub tsunami: TsunamiConfig,
    /// Host frame rate (Hz) for realtime playback.
    pub frame_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_scenario: "offshore_tsunami".to_string(),
            speed: PlaybackSpeed::default(),
            tsunami: TsunamiConfig::default(),
            frame_rate: FRAME_RATE,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
