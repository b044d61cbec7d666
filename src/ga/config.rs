//! Genetic search parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::operators::validate_mutation_rate;

/// Parameters of the genetic search.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_keep(10)
///     .with_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of tours carried from one generation to the next.
    pub population_size: usize,
    /// Elite tours copied verbatim into the next generation.
    pub keep: usize,
    /// Per-position swap probability applied to every child.
    pub mutation_rate: f64,
    /// Number of generations to run.
    pub generations: usize,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            keep: 20,
            mutation_rate: 0.01,
            generations: 100,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of elite tours kept per generation.
    pub fn with_keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
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
    /// Returns [`TspError::InvalidConfiguration`] describing the first
    /// parameter out of range.
    pub fn validate(&self) -> Result<()> {
        validate_parameters(
            self.population_size,
            self.keep,
            self.mutation_rate,
            self.generations,
        )
    }
}

pub(crate) fn validate_parameters(
    population_size: usize,
    keep: usize,
    mutation_rate: f64,
    generations: usize,
) -> Result<()> {
    if population_size == 0 {
        return Err(TspError::config("population size must be at least 1"));
    }
    if keep == 0 || keep > population_size {
        return Err(TspError::config(format!(
            "keep must be in [1, {population_size}], got {keep}"
        )));
    }
    validate_mutation_rate(mutation_rate)?;
    if generations == 0 {
        return Err(TspError::config("generations must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.keep, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_keep(2)
            .with_mutation_rate(0.05)
            .with_generations(7)
            .with_seed(3);
        assert_eq!(config.population_size, 10);
        assert_eq!(config.keep, 2);
        assert_eq!(config.mutation_rate, 0.05);
        assert_eq!(config.generations, 7);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_rejects_bad_keep() {
        assert!(GaConfig::default().with_keep(0).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(5)
            .with_keep(6)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_population_size(5)
            .with_keep(5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_bad_rate() {
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_generations_and_population() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GaConfig =
            serde_json::from_str(r#"{"generations": 5, "seed": 9}"#).expect("valid json");
        assert_eq!(config.generations, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.population_size, 100);
    }
}
