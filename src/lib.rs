//! # u-tsp
//!
//! Travelling salesman search over a fixed distance matrix: random-restart
//! sampling, a genetic algorithm with ordered crossover, and hill climbing.
//! Every tour starts and ends at a designated home city.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Tour, Population)
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Closed-loop cost and route validation
//! - [`sampling`] — Random tours and random-restart search
//! - [`operators`] — Swap mutation and ordered crossover
//! - [`ga`] — Genetic search
//! - [`hill_climb`] — Hill climbing
//! - [`search`] — Caller-facing entry points
//! - [`display`] — Console rendering
//! - [`data`] — Built-in city tables

pub mod data;
pub mod display;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod hill_climb;
pub mod models;
pub mod operators;
pub mod random;
pub mod sampling;
pub mod search;

pub use error::{Result, TspError};
