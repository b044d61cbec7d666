//! Random tour generation.
//!
//! - [`random_tour`] — one uniformly random tour
//! - [`best_of_random_sample`] — random-restart search over independent samples
//! - [`population`] — an unsorted population of random tours for the GA

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::evaluation::non_home_cities;
use crate::models::{best_of, Population, Tour};

/// Creates a tour visiting the non-home cities in a uniformly random order.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::sampling::random_tour;
///
/// let dm = DistanceMatrix::new(5);
/// let mut rng = StdRng::seed_from_u64(7);
/// let tour = random_tour(&dm, 2, &[0, 1, 2, 3, 4], &mut rng);
/// let mut cities = tour.route().to_vec();
/// cities.sort();
/// assert_eq!(cities, vec![0, 1, 3, 4]);
/// ```
pub fn random_tour<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
    rng: &mut R,
) -> Tour {
    let mut route = non_home_cities(city_indexes, home);
    route.shuffle(rng);
    Tour::new(route, distances, home)
}

/// Draws `sample_size` independent random tours and returns the cheapest.
///
/// Ties go to the first tour drawn.
///
/// # Errors
///
/// Returns [`TspError::InvalidConfiguration`] if `sample_size` is zero.
pub fn best_of_random_sample<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
    sample_size: usize,
    rng: &mut R,
) -> Result<Tour> {
    let sample: Population = (0..sample_size)
        .map(|_| random_tour(distances, home, city_indexes, rng))
        .collect();
    best_of(&sample)
        .cloned()
        .ok_or_else(|| TspError::config("sample size must be at least 1"))
}

/// Draws `size` independent random tours, returned unsorted.
///
/// # Errors
///
/// Returns [`TspError::InvalidConfiguration`] if `size` is zero.
pub fn population<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    city_indexes: &[usize],
    size: usize,
    rng: &mut R,
) -> Result<Population> {
    if size == 0 {
        return Err(TspError::config("population size must be at least 1"));
    }
    Ok((0..size)
        .map(|_| random_tour(distances, home, city_indexes, rng))
        .collect())
}
