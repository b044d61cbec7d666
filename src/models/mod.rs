//! Domain model types for the travelling salesman search.
//!
//! Provides city coordinates, closed tours anchored at a home city, and the
//! population type used by the genetic search.

mod coordinate;
mod population;
mod tour;

pub use coordinate::Coordinate;
pub use population::{best_of, sort_population, Population};
pub use tour::{compare_by_cost, routes_equal, Tour};
