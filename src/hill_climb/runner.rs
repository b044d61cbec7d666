//! Greedy single-solution improvement loop.

use log::{debug, info, trace};
use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::check_tour;
use crate::models::{compare_by_cost, Tour};
use crate::operators::{mutate, validate_mutation_rate};
use crate::random::create_rng;

use super::config::{validate_max_iterations, HillClimbConfig, StallPolicy};

/// Outcome of a hill-climbing run.
#[derive(Debug, Clone, Serialize)]
pub struct HillClimbResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Neighbours generated.
    pub iterations: usize,
    /// Neighbours accepted.
    pub improvements: usize,
}

/// Runs hill climbing from a [`HillClimbConfig`].
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::hill_climb::{HillClimbConfig, HillClimbRunner};
/// use u_tsp::models::{Coordinate, Tour};
///
/// let cities = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&cities);
/// let start = Tour::new(vec![2, 1, 3], &dm, 0);
/// let config = HillClimbConfig::default()
///     .with_max_iterations(1000)
///     .with_mutation_rate(0.5)
///     .with_seed(42);
///
/// let result = HillClimbRunner::run(&dm, 0, start, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-9);
/// ```
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Improves `initial` with a generator built from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails before any draw if the configuration or `initial` is invalid.
    pub fn run(
        distances: &DistanceMatrix,
        home: usize,
        initial: Tour,
        config: &HillClimbConfig,
    ) -> Result<HillClimbResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(distances, home, initial, config, &mut rng)
    }

    /// Same as [`run`](Self::run) with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Fails before any draw if the configuration or `initial` is invalid.
    pub fn run_with_rng<R: Rng + ?Sized>(
        distances: &DistanceMatrix,
        home: usize,
        initial: Tour,
        config: &HillClimbConfig,
        rng: &mut R,
    ) -> Result<HillClimbResult> {
        config.validate()?;
        check_tour(&initial, distances, home)?;
        Ok(climb(
            distances,
            home,
            initial,
            config.max_iterations,
            config.mutation_rate,
            config.stall_policy,
            rng,
        ))
    }
}

/// Improves `initial_tour` until `max_iterations + 1` consecutive neighbours
/// fail to beat the current best.
///
/// A neighbour is adopted only when strictly cheaper, so the returned tour
/// never costs more than `initial_tour`.
///
/// # Errors
///
/// Returns [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
/// for a mutation rate outside `[0, 1]` or `max_iterations == usize::MAX`, and
/// [`TspError::InvalidRoute`](crate::error::TspError::InvalidRoute) if the
/// initial route is not a permutation of the non-home cities.
pub fn run_hill_climb<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    initial_tour: Tour,
    max_iterations: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Tour> {
    validate_max_iterations(max_iterations)?;
    validate_mutation_rate(mutation_rate)?;
    check_tour(&initial_tour, distances, home)?;
    Ok(climb(
        distances,
        home,
        initial_tour,
        max_iterations,
        mutation_rate,
        StallPolicy::ResetOnImprove,
        rng,
    )
    .best)
}

fn climb<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    initial: Tour,
    max_iterations: usize,
    mutation_rate: f64,
    policy: StallPolicy,
    rng: &mut R,
) -> HillClimbResult {
    let initial_cost = initial.cost();
    let mut best = initial;
    let mut stalls = 0usize;
    let mut iterations = 0usize;
    let mut improvements = 0usize;

    loop {
        let neighbor = mutate(distances, home, &best, mutation_rate, rng);
        iterations += 1;

        if compare_by_cost(&neighbor, &best).is_lt() {
            debug!(
                "iteration {iterations}: cost {:.3} -> {:.3}",
                best.cost(),
                neighbor.cost()
            );
            best = neighbor;
            improvements += 1;
            if policy == StallPolicy::ResetOnImprove {
                stalls = 0;
            }
        } else {
            trace!("iteration {iterations}: rejected cost {:.3}", neighbor.cost());
            stalls += 1;
            if stalls > max_iterations {
                break;
            }
        }
    }

    let best_cost = best.cost();
    info!(
        "hill climbing finished after {iterations} iterations ({improvements} improvements): \
         {initial_cost:.3} -> {best_cost:.3}"
    );

    HillClimbResult {
        best,
        best_cost,
        iterations,
        improvements,
    }
}
