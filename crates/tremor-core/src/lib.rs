//! Core types and definitions for the TREMOR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! buildings, scenarios, commands, snapshots, events, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod building;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod scenario;
pub mod state;
pub mod types;

pub use error::CoreError;
