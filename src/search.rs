//! Caller-facing search entry points.
//!
//! Each operation validates its input before drawing from `rng`, so an
//! invalid call leaves the generator untouched.

use log::warn;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::check_instance;
use crate::models::{Population, Tour};
use crate::sampling;

pub use crate::ga::run_genetic_search;
pub use crate::hill_climb::run_hill_climb;

/// Returns the cheapest of `sample_size` independent random tours.
///
/// # Errors
///
/// Fails if the instance is inconsistent or `sample_size` is zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Coordinate;
/// use u_tsp::search::random_restart_search;
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
/// ]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let tour = random_restart_search(&dm, 0, &[0, 1, 2, 3], 100, &mut rng).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-9);
/// ```
pub fn random_restart_search<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
    sample_size: usize,
    rng: &mut R,
) -> Result<Tour> {
    check_search_instance(distances, home, city_indexes)?;
    sampling::best_of_random_sample(distances, home, city_indexes, sample_size, rng)
}

/// Creates `size` random tours to start a genetic search from.
///
/// # Errors
///
/// Fails if the instance is inconsistent or `size` is zero.
pub fn seed_population<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
    size: usize,
    rng: &mut R,
) -> Result<Population> {
    check_search_instance(distances, home, city_indexes)?;
    sampling::population(distances, home, city_indexes, size, rng)
}

fn check_search_instance(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
) -> Result<()> {
    check_instance(distances, home, city_indexes)?;
    if !distances.is_symmetric(1e-9) || !distances.has_zero_diagonal() {
        warn!("distance matrix is not symmetric with a zero diagonal; costs follow travel direction");
    }
    Ok(())
}
