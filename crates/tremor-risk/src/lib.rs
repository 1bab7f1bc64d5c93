//! Risk models for TREMOR.
//!
//! Pure functions over plain data: static building risk, neighbor
//! contagion, seismic event damage, the tsunami phase model, and
//! preparedness recommendations. No clock or engine dependency.

pub mod base_risk;
pub mod damage;
pub mod neighbor;
pub mod profiles;
pub mod recommendations;
pub mod tsunami;

pub use tremor_core as core;

pub use base_risk::{compute_base_risk, risk_level};
pub use damage::{calculate_event_damage, damage_category, total_damage};
pub use neighbor::{compute_neighbor_boost, NeighborBoost, NeighborStats};
pub use recommendations::generate_recommendations;
pub use tsunami::{apply_flood_damage, evaluate_tsunami, TsunamiFrame};
