//! TREMOR host application.
//!
//! Wires the simulation crates together: a loop thread that drives the
//! engine at the host frame rate, and the shared state the host polls.

pub mod game_loop;
pub mod state;

pub use tremor_core as core;
