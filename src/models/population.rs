//! Population helpers for the genetic search.

use super::tour::{compare_by_cost, Tour};

/// An ordered collection of tours.
pub type Population = Vec<Tour>;

/// Sorts tours by ascending cost.
///
/// The sort is stable: tours of equal cost keep their relative order.
pub fn sort_population(population: &mut [Tour]) {
    population.sort_by(compare_by_cost);
}

/// Returns the lowest-cost tour, or `None` for an empty slice.
///
/// Ties go to the first tour encountered.
pub fn best_of(tours: &[Tour]) -> Option<&Tour> {
    tours.iter().min_by(|a, b| compare_by_cost(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::routes_equal;

    fn dm() -> DistanceMatrix {
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 2.0, 1.0, //
                1.0, 0.0, 1.0, 2.0, //
                2.0, 1.0, 0.0, 1.0, //
                1.0, 2.0, 1.0, 0.0,
            ],
        )
        .expect("4x4")
    }

    #[test]
    fn test_sort_population() {
        let dm = dm();
        let mut pop = vec![
            Tour::new(vec![2, 1, 3], &dm, 0),
            Tour::new(vec![1, 2, 3], &dm, 0),
            Tour::new(vec![1, 3, 2], &dm, 0),
        ];
        sort_population(&mut pop);
        assert_eq!(pop[0].route(), &[1, 2, 3]);
        assert!(pop.windows(2).all(|w| w[0].cost() <= w[1].cost()));
    }

    #[test]
    fn test_best_of_first_tie_wins() {
        let dm = dm();
        let tours = vec![
            Tour::new(vec![2, 1, 3], &dm, 0),
            Tour::new(vec![3, 2, 1], &dm, 0),
            Tour::new(vec![1, 2, 3], &dm, 0),
        ];
        let best = best_of(&tours).expect("non-empty");
        assert!(routes_equal(best, &tours[1]));
    }

    #[test]
    fn test_best_of_empty() {
        assert!(best_of(&[]).is_none());
    }
}
