//! Hill climbing with random swap neighbours.
//!
//! Repeatedly mutates the current best tour and adopts the neighbour only if
//! it is strictly cheaper. The run ends once too many neighbours in a row
//! (or in total, see [`StallPolicy`]) have failed to improve.

mod config;
mod runner;

pub use config::{HillClimbConfig, StallPolicy};
pub use runner::{run_hill_climb, HillClimbResult, HillClimbRunner};
