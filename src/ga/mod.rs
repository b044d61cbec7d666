//! Genetic search over tour populations.
//!
//! - [`GaConfig`] — population size, elitism, mutation rate, generations, seed
//! - [`GaRunner`] — seeds a random population and evolves it
//! - [`run_genetic_search`] — evolves a caller-supplied population
//!
//! Children come from ordered crossover of cost-adjacent parents followed by
//! swap mutation; the `keep` cheapest parents survive each generation.

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{run_genetic_search, GaResult, GaRunner};
