//! Variation operators shared by the genetic and hill-climbing searches.
//!
//! - [`mutate`] — per-position random swaps at a configurable rate
//! - [`crossover`] — ordered crossover of two parent tours

mod crossover;
mod mutation;

pub use crossover::crossover;
pub use mutation::mutate;

use crate::error::{Result, TspError};

/// Rejects mutation rates outside `[0, 1]`, NaN included.
pub(crate) fn validate_mutation_rate(mutation_rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(TspError::config(format!(
            "mutation rate must be in [0, 1], got {mutation_rate}"
        )));
    }
    Ok(())
}
