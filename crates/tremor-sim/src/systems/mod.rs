//! Systems that derive run state from scenario time each frame.
//!
//! Systems are free functions over borrowed scenario data and the run state
//! being built. They do not own state; the engine does.

pub mod alerts;
pub mod damage;
pub mod end_of_run;
pub mod responders;
pub mod shelters;
pub mod shockwave;
pub mod snapshot;
pub mod tsunami;
