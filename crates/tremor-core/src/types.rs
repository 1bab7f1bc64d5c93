//! Fundamental geographic and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::CoreError;

/// Geographic coordinate in degrees (WGS84).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Stable building identifier, assigned from the footprint index at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "home-{}", self.0)
    }
}

/// Supported playback multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PlaybackSpeed {
    X1,
    X5,
    #[default]
    X10,
    X30,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::X1,
        PlaybackSpeed::X5,
        PlaybackSpeed::X10,
        PlaybackSpeed::X30,
    ];

    /// Simulation seconds per wall-clock second.
    pub fn multiplier(self) -> f64 {
        u32::from(self) as f64
    }
}

impl TryFrom<u32> for PlaybackSpeed {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlaybackSpeed::X1),
            5 => Ok(PlaybackSpeed::X5),
            10 => Ok(PlaybackSpeed::X10),
            30 => Ok(PlaybackSpeed::X30),
            other => Err(CoreError::UnsupportedSpeed(other)),
        }
    }
}

impl From<PlaybackSpeed> for u32 {
    fn from(speed: PlaybackSpeed) -> Self {
        match speed {
            PlaybackSpeed::X1 => 1,
            PlaybackSpeed::X5 => 5,
            PlaybackSpeed::X10 => 10,
            PlaybackSpeed::X30 => 30,
        }
    }
}

/// Scenario playback clock.
///
/// `time` is always kept within `[0, duration]` of the active scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Scenario time in seconds.
    pub time: f64,
    pub is_playing: bool,
    pub speed: PlaybackSpeed,
}

impl SimulationClock {
    pub fn new(speed: PlaybackSpeed) -> Self {
        Self {
            time: 0.0,
            is_playing: false,
            speed,
        }
    }

    /// Advance by a wall-clock delta scaled by the playback speed.
    /// Returns true if time moved.
    pub fn advance(&mut self, real_elapsed_secs: f64, duration: f64) -> bool {
        if !self.is_playing || real_elapsed_secs <= 0.0 {
            return false;
        }
        let previous = self.time;
        self.time = (self.time + real_elapsed_secs * self.speed.multiplier()).min(duration);
        self.time != previous
    }

    /// Jump to `time`, clamped into `[0, duration]`. Returns the clamped value.
    pub fn seek(&mut self, time: f64, duration: f64) -> f64 {
        self.time = if time.is_nan() {
            0.0
        } else {
            time.clamp(0.0, duration.max(0.0))
        };
        self.time
    }
}

/// Geometry and timing of the district's tsunami model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsunamiConfig {
    /// Latitude where the wave starts in the bay.
    pub ocean_start: f64,
    /// Northern edge of the district.
    pub coastline: f64,
    /// Southernmost latitude the water reaches.
    pub max_inland: f64,
    pub west_edge: f64,
    pub east_edge: f64,
    pub approach_duration: f64,
    pub advance_duration: f64,
    pub peak_duration: f64,
    pub recede_duration: f64,
}

impl Default for TsunamiConfig {
    fn default() -> Self {
        Self {
            ocean_start: TSUNAMI_OCEAN_START,
            coastline: TSUNAMI_COASTLINE,
            max_inland: TSUNAMI_MAX_INLAND,
            west_edge: TSUNAMI_WEST_EDGE,
            east_edge: TSUNAMI_EAST_EDGE,
            approach_duration: TSUNAMI_APPROACH_SECS,
            advance_duration: TSUNAMI_ADVANCE_SECS,
            peak_duration: TSUNAMI_PEAK_SECS,
            recede_duration: TSUNAMI_RECEDE_SECS,
        }
    }
}

impl TsunamiConfig {
    /// Maximum inland penetration of the flood, in degrees of latitude.
    pub fn max_penetration(&self) -> f64 {
        self.coastline - self.max_inland
    }

    /// Time from arrival until the water has fully receded.
    pub fn total_inundation(&self) -> f64 {
        self.advance_duration + self.peak_duration + self.recede_duration
    }

    pub fn contains_longitude(&self, lng: f64) -> bool {
        lng >= self.west_edge && lng <= self.east_edge
    }
}
