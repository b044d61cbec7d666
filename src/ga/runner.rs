//! Generational loop of the genetic search.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::{check_instance, check_tour};
use crate::models::{sort_population, Population, Tour};
use crate::operators::{crossover, mutate};
use crate::random::create_rng;
use crate::sampling;

use super::config::{validate_parameters, GaConfig};

/// Outcome of a genetic search run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Lowest-cost tour of the final population.
    pub best: Tour,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Number of generations executed.
    pub generations: usize,
    /// Best cost at the end of each generation.
    pub cost_history: Vec<f64>,
}

/// Runs the genetic search from a [`GaConfig`].
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::{GaConfig, GaRunner};
/// use u_tsp::models::Coordinate;
///
/// let cities = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&cities);
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_keep(2)
///     .with_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&dm, 0, &[0, 1, 2, 3], &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Seeds a random population and evolves it, drawing from a generator
    /// built from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails before any draw if the configuration or the instance is invalid.
    pub fn run(
        distances: &DistanceMatrix,
        home: usize,
        city_indexes: &[usize],
        config: &GaConfig,
    ) -> Result<GaResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(distances, home, city_indexes, config, &mut rng)
    }

    /// Same as [`run`](Self::run) with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Fails before any draw if the configuration or the instance is invalid.
    pub fn run_with_rng<R: Rng + ?Sized>(
        distances: &DistanceMatrix,
        home: usize,
        city_indexes: &[usize],
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;
        check_instance(distances, home, city_indexes)?;

        let population = sampling::population(
            distances,
            home,
            city_indexes,
            config.population_size,
            rng,
        )?;
        Ok(evolve(
            distances,
            home,
            population,
            config.keep,
            config.mutation_rate,
            config.generations,
            rng,
        ))
    }
}

/// Evolves `population` for exactly `generations` generations and returns
/// the best tour of the final population.
///
/// Each generation sorts the population by cost, crosses every adjacent pair
/// `(p[j-1], p[j])`, mutates each child, keeps the `keep` cheapest parents,
/// adds the children, sorts again and trims back to the starting population
/// size. The best cost never increases from one generation to the next.
///
/// # Errors
///
/// - [`TspError::InvalidConfiguration`](crate::error::TspError::InvalidConfiguration)
///   for an empty population, `keep` outside `[1, population.len()]`, a
///   mutation rate outside `[0, 1]` or zero generations.
/// - [`TspError::InvalidRoute`](crate::error::TspError::InvalidRoute) if any
///   tour is not a permutation of the non-home cities.
pub fn run_genetic_search<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    population: Population,
    keep: usize,
    mutation_rate: f64,
    generations: usize,
    rng: &mut R,
) -> Result<Tour> {
    validate_parameters(population.len(), keep, mutation_rate, generations)?;
    for tour in &population {
        check_tour(tour, distances, home)?;
    }
    Ok(evolve(distances, home, population, keep, mutation_rate, generations, rng).best)
}

fn evolve<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    mut population: Population,
    keep: usize,
    mutation_rate: f64,
    generations: usize,
    rng: &mut R,
) -> GaResult {
    let size = population.len();
    let mut cost_history = Vec::with_capacity(generations);
    sort_population(&mut population);
    let initial_cost = population[0].cost();

    for generation in 0..generations {
        next_generation(distances, home, &mut population, keep, mutation_rate, rng);
        population.truncate(size);

        let best_cost = population[0].cost();
        cost_history.push(best_cost);
        debug!("generation {generation}: best cost {best_cost:.3}");
    }

    let best = population.swap_remove(0);
    let best_cost = best.cost();
    info!(
        "genetic search finished after {generations} generations: {initial_cost:.3} -> {best_cost:.3}"
    );

    GaResult {
        best,
        best_cost,
        generations,
        cost_history,
    }
}

/// Replaces `population` with the sorted union of its `keep` best members
/// and one mutated child per adjacent pair.
fn next_generation<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    population: &mut Population,
    keep: usize,
    mutation_rate: f64,
    rng: &mut R,
) {
    sort_population(population);

    let children: Vec<Tour> = population
        .windows(2)
        .map(|pair| crossover(distances, home, &pair[0], &pair[1], rng))
        .collect();
    let children: Vec<Tour> = children
        .iter()
        .map(|child| mutate(distances, home, child, mutation_rate, rng))
        .collect();

    population.truncate(keep);
    population.extend(children);
    sort_population(population);
}
