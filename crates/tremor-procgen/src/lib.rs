//! Building synthesis for TREMOR.
//!
//! Turns raw footprints into scored buildings. Attribute assignment is
//! seeded from each footprint's index and spatial cell, so the same
//! footprint list always yields the same district.

pub mod footprint;
pub mod synth;

pub use footprint::{grid_footprints, Footprint};
pub use synth::synthesize_buildings;
