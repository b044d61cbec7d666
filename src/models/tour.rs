//! Closed tours anchored at a home city.

use std::cmp::Ordering;

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::evaluation::evaluate;

/// A closed tour: `home → route[0] → … → route[n-1] → home`.
///
/// `route` holds every city except `home` exactly once. The cost is
/// recomputed from scratch whenever a tour is built, so a `Tour` handed out
/// by this crate never carries a stale cost.
///
/// `Tour` serializes for reporting but cannot be deserialized: a stored
/// cost would not be tied to any distance matrix.
///
/// Tours are ordered with [`compare_by_cost`] and compared structurally with
/// [`routes_equal`]; `Tour` deliberately implements neither `PartialOrd` nor
/// `PartialEq`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.5,
///     2.0, 1.5, 0.0,
/// ]).unwrap();
/// let tour = Tour::new(vec![1, 2], &dm, 0);
/// assert_eq!(tour.route(), &[1, 2]);
/// assert!((tour.cost() - 4.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    route: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a route and evaluates its cost.
    pub fn new(route: Vec<usize>, distances: &DistanceMatrix, home: usize) -> Self {
        let cost = evaluate(&route, distances, home);
        Self { route, cost }
    }

    /// Returns the visiting order (home excluded).
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Total cost of the closed loop.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities in the route (home excluded).
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the route visits no city besides home.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Applies `edit` to the route and recomputes the cost.
    pub(crate) fn edit_route(
        &mut self,
        distances: &DistanceMatrix,
        home: usize,
        edit: impl FnOnce(&mut Vec<usize>),
    ) {
        edit(&mut self.route);
        self.cost = evaluate(&self.route, distances, home);
    }
}

/// Orders tours by ascending cost.
///
/// Uses `f64::total_cmp`, so NaN costs sort after every finite cost.
pub fn compare_by_cost(a: &Tour, b: &Tour) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

/// Returns `true` if both tours visit the cities in the same order.
///
/// Costs are not compared.
pub fn routes_equal(a: &Tour, b: &Tour) -> bool {
    a.route == b.route
}
