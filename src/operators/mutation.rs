//! Per-position swap mutation.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Returns a mutated copy of `tour`; the input is left untouched.
///
/// Each position `i` is visited left to right. With probability
/// `mutation_rate` a partner `j` is drawn uniformly from the whole route and
/// the cities at `i` and `j` are exchanged. Swaps apply to the route being
/// built, so a later swap may move a city an earlier swap just placed.
/// `j == i` is allowed and leaves the route unchanged.
///
/// The cost is recomputed once all positions have been processed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{Tour, routes_equal};
/// use u_tsp::operators::mutate;
///
/// let dm = DistanceMatrix::new(5);
/// let tour = Tour::new(vec![1, 2, 3, 4], &dm, 0);
/// let mut rng = StdRng::seed_from_u64(1);
/// let same = mutate(&dm, 0, &tour, 0.0, &mut rng);
/// assert!(routes_equal(&same, &tour));
/// ```
pub fn mutate<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    tour: &Tour,
    mutation_rate: f64,
    rng: &mut R,
) -> Tour {
    let mut mutated = tour.clone();
    mutated.edit_route(distances, home, |route| {
        let n = route.len();
        for i in 0..n {
            if rng.random::<f64>() < mutation_rate {
                let j = floor_index(rng.random::<f64>(), n);
                route.swap(i, j);
            }
        }
    });
    mutated
}

/// Maps a uniform draw in `[0, 1)` onto `[0, len)`.
pub(crate) fn floor_index(draw: f64, len: usize) -> usize {
    // Guards against a draw rounding up to `len` in the product.
    ((draw * len as f64) as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::validate_route;
    use crate::models::routes_equal;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dm(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, ((i + j) * 7 % 11) as f64 + 1.0);
                }
            }
        }
        dm
    }

    #[test]
    fn test_rate_zero_keeps_route() {
        let dm = dm(6);
        let tour = Tour::new(vec![3, 1, 5, 2, 4], &dm, 0);
        let mut rng = StdRng::seed_from_u64(42);
        let mutated = mutate(&dm, 0, &tour, 0.0, &mut rng);
        assert!(routes_equal(&mutated, &tour));
        assert_eq!(mutated.cost(), tour.cost());
    }

    #[test]
    fn test_rate_one_keeps_permutation() {
        let dm = dm(10);
        let route: Vec<usize> = (1..10).collect();
        let tour = Tour::new(route, &dm, 0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mutated = mutate(&dm, 0, &tour, 1.0, &mut rng);
            assert!(validate_route(mutated.route(), 10, 0).is_ok());
        }
    }

    #[test]
    fn test_input_untouched() {
        let dm = dm(6);
        let tour = Tour::new(vec![1, 2, 3, 4, 5], &dm, 0);
        let mut rng = StdRng::seed_from_u64(3);
        let _ = mutate(&dm, 0, &tour, 1.0, &mut rng);
        assert_eq!(tour.route(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_cost_recomputed() {
        let dm = dm(8);
        let tour = Tour::new((1..8).collect(), &dm, 0);
        let mut rng = StdRng::seed_from_u64(99);
        let mutated = mutate(&dm, 0, &tour, 0.5, &mut rng);
        let fresh = Tour::new(mutated.route().to_vec(), &dm, 0);
        assert_eq!(mutated.cost(), fresh.cost());
    }

    #[test]
    fn test_sequential_swaps_match_replay() {
        let dm = dm(7);
        let tour = Tour::new(vec![1, 2, 3, 4, 5, 6], &dm, 0);
        let rate = 0.6;
        let mutated = mutate(&dm, 0, &tour, rate, &mut StdRng::seed_from_u64(2024));

        // Replay the same draw sequence by hand, applying swaps left to right.
        let mut rng = StdRng::seed_from_u64(2024);
        let mut expected = tour.route().to_vec();
        let n = expected.len();
        for i in 0..n {
            if rng.random::<f64>() < rate {
                let j = floor_index(rng.random::<f64>(), n);
                expected.swap(i, j);
            }
        }
        assert_eq!(mutated.route(), expected.as_slice());
    }

    #[test]
    fn test_empty_route() {
        let dm = dm(1);
        let tour = Tour::new(vec![], &dm, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let mutated = mutate(&dm, 0, &tour, 1.0, &mut rng);
        assert!(mutated.is_empty());
    }

    #[test]
    fn test_floor_index() {
        assert_eq!(floor_index(0.0, 5), 0);
        assert_eq!(floor_index(0.999_999, 5), 4);
        assert_eq!(floor_index(0.5, 4), 2);
        assert_eq!(floor_index(0.3, 0), 0);
    }
}
