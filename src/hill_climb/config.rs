//! Hill-climbing parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::operators::validate_mutation_rate;

/// How non-improving neighbours are counted towards termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StallPolicy {
    /// The stall counter resets on every improvement: the search stops after
    /// `max_iterations + 1` consecutive non-improving neighbours.
    #[default]
    ResetOnImprove,
    /// The stall counter is never reset: the search stops once
    /// `max_iterations + 1` non-improving neighbours have been seen in total.
    Cumulative,
}

/// Parameters of the hill-climbing search.
///
/// # Examples
///
/// ```
/// use u_tsp::hill_climb::{HillClimbConfig, StallPolicy};
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(1000)
///     .with_mutation_rate(0.5)
///     .with_stall_policy(StallPolicy::Cumulative);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbConfig {
    /// Non-improving neighbours tolerated before stopping. At most
    /// `usize::MAX - 1`.
    pub max_iterations: usize,
    /// Per-position swap probability used to generate neighbours.
    pub mutation_rate: f64,
    /// How the stall counter behaves on improvement.
    pub stall_policy: StallPolicy,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            mutation_rate: 0.1,
            stall_policy: StallPolicy::ResetOnImprove,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    /// Sets the stall limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the stall policy.
    pub fn with_stall_policy(mut self, stall_policy: StallPolicy) -> Self {
        self.stall_policy = stall_policy;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter range.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
    /// if the mutation rate is outside `[0, 1]` or `max_iterations` is
    /// `usize::MAX`.
    pub fn validate(&self) -> Result<()> {
        validate_max_iterations(self.max_iterations)?;
        validate_mutation_rate(self.mutation_rate)
    }
}

/// The run stops after `max_iterations + 1` stalls, which must fit in `usize`.
pub(crate) fn validate_max_iterations(max_iterations: usize) -> Result<()> {
    if max_iterations == usize::MAX {
        return Err(TspError::config(format!(
            "max iterations must be below {}",
            usize::MAX
        )));
    }
    Ok(())
}
