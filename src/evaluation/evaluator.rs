//! Closed-loop cost evaluation and route validation.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Computes the cost of the closed loop `home → route[0] → … → route[n-1] → home`.
///
/// Recomputed from scratch in O(n). The route is not validated here; use
/// [`evaluate_checked`] when the input is untrusted.
///
/// # Panics
///
/// Panics if `home` or any city in `route` is out of bounds for `distances`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::evaluate;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 2.0, 3.0,
///     2.0, 0.0, 4.0,
///     3.0, 4.0, 0.0,
/// ]).unwrap();
/// assert_eq!(evaluate(&[1, 2], &dm, 0), 9.0);
/// assert_eq!(evaluate(&[], &dm, 0), 0.0);
/// ```
pub fn evaluate(route: &[usize], distances: &DistanceMatrix, home: usize) -> f64 {
    let mut cost = 0.0;
    let mut from = home;
    for &city in route {
        cost += distances.get(from, city);
        from = city;
    }
    cost + distances.get(from, home)
}

/// Validates `route` against the instance, then evaluates it.
///
/// # Errors
///
/// Returns [`TspError::InvalidRoute`] if the route is not a permutation of
/// the non-home cities of a `distances.size()`-city instance.
pub fn evaluate_checked(route: &[usize], distances: &DistanceMatrix, home: usize) -> Result<f64> {
    validate_route(route, distances.size(), home)?;
    Ok(evaluate(route, distances, home))
}

/// Checks that `route` visits every city of `0..num_cities` except `home`
/// exactly once.
///
/// # Errors
///
/// Returns [`TspError::InvalidRoute`] naming the first offending city.
pub fn validate_route(route: &[usize], num_cities: usize, home: usize) -> Result<()> {
    let expected = num_cities.saturating_sub(1);
    if route.len() != expected {
        return Err(TspError::route(format!(
            "expected {expected} cities, got {}",
            route.len()
        )));
    }

    let mut seen = vec![false; num_cities];
    for &city in route {
        if city >= num_cities {
            return Err(TspError::route(format!("city {city} out of range")));
        }
        if city == home {
            return Err(TspError::route(format!("home city {home} inside route")));
        }
        if seen[city] {
            return Err(TspError::route(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}

/// Checks that a caller-supplied tour belongs to the instance.
///
/// # Errors
///
/// - [`TspError::InvalidConfiguration`] if `home` is out of range.
/// - [`TspError::InvalidRoute`] if the route is not a permutation of the
///   non-home cities, or if the tour's cost is not the cost of its route on
///   `distances`.
pub fn check_tour(tour: &Tour, distances: &DistanceMatrix, home: usize) -> Result<()> {
    if home >= distances.size() {
        return Err(TspError::config(format!(
            "home {home} out of range for {} cities",
            distances.size()
        )));
    }
    validate_route(tour.route(), distances.size(), home)?;

    let fresh = evaluate(tour.route(), distances, home);
    if tour.cost().total_cmp(&fresh).is_ne() {
        return Err(TspError::route(format!(
            "stored cost {} does not match route cost {fresh}",
            tour.cost()
        )));
    }
    Ok(())
}

/// Returns the cities of `city_indexes` other than `home`, in their given order.
pub fn non_home_cities(city_indexes: &[usize], home: usize) -> Vec<usize> {
    city_indexes.iter().copied().filter(|&c| c != home).collect()
}

/// Checks that `distances`, `home` and `city_indexes` describe one instance.
///
/// `city_indexes` must list every index of the matrix exactly once, home
/// included.
///
/// # Errors
///
/// - [`TspError::DimensionMismatch`] if the index list and the matrix differ in size.
/// - [`TspError::InvalidConfiguration`] if `home` is not a listed city or an
///   index is out of range or repeated.
pub fn check_instance(distances: &DistanceMatrix, home: usize, city_indexes: &[usize]) -> Result<()> {
    let n = distances.size();
    if city_indexes.len() != n {
        return Err(TspError::DimensionMismatch {
            expected: n,
            actual: city_indexes.len(),
        });
    }
    if home >= n {
        return Err(TspError::config(format!(
            "home {home} out of range for {n} cities"
        )));
    }

    let mut seen = vec![false; n];
    for &city in city_indexes {
        if city >= n {
            return Err(TspError::config(format!("city index {city} out of range")));
        }
        if seen[city] {
            return Err(TspError::config(format!("city index {city} listed twice")));
        }
        seen[city] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        let s = std::f64::consts::SQRT_2;
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, s, 1.0, //
                1.0, 0.0, 1.0, s, //
                s, 1.0, 0.0, 1.0, //
                1.0, s, 1.0, 0.0,
            ],
        )
        .expect("4x4")
    }

    #[test]
    fn test_evaluate_perimeter() {
        let dm = square();
        assert!((evaluate(&[1, 2, 3], &dm, 0) - 4.0).abs() < 1e-10);
        assert!((evaluate(&[3, 2, 1], &dm, 0) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_crossing() {
        let dm = square();
        let expected = 2.0 + 2.0 * std::f64::consts::SQRT_2;
        assert!((evaluate(&[2, 1, 3], &dm, 0) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_non_zero_home() {
        let dm = square();
        assert!((evaluate(&[3, 0, 1], &dm, 2) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_deterministic() {
        let dm = square();
        let a = evaluate(&[2, 3, 1], &dm, 0);
        let b = evaluate(&[2, 3, 1], &dm, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluate_checked_accepts_permutation() {
        let dm = square();
        let cost = evaluate_checked(&[1, 2, 3], &dm, 0).expect("valid route");
        assert!((cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_route_rejects_duplicate() {
        let err = validate_route(&[1, 1, 3], 4, 0).unwrap_err();
        assert!(matches!(err, TspError::InvalidRoute(_)));
    }

    #[test]
    fn test_validate_route_rejects_home() {
        assert!(validate_route(&[0, 2, 3], 4, 0).is_err());
    }

    #[test]
    fn test_validate_route_rejects_missing() {
        assert!(validate_route(&[1, 2], 4, 0).is_err());
    }

    #[test]
    fn test_validate_route_rejects_out_of_range() {
        assert!(validate_route(&[1, 2, 7], 4, 0).is_err());
    }

    #[test]
    fn test_check_tour() {
        let dm = square();
        let tour = Tour::new(vec![3, 1, 2], &dm, 0);
        assert!(check_tour(&tour, &dm, 0).is_ok());
        assert!(matches!(
            check_tour(&tour, &dm, 9),
            Err(TspError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            check_tour(&tour, &dm, 1),
            Err(TspError::InvalidRoute(_))
        ));
    }

    #[test]
    fn test_non_home_cities() {
        assert_eq!(non_home_cities(&[0, 1, 2, 3], 2), vec![0, 1, 3]);
    }

    #[test]
    fn test_check_instance() {
        let dm = square();
        assert!(check_instance(&dm, 0, &[0, 1, 2, 3]).is_ok());
        assert_eq!(
            check_instance(&dm, 0, &[0, 1, 2]),
            Err(TspError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(check_instance(&dm, 4, &[0, 1, 2, 3]).is_err());
        assert!(check_instance(&dm, 0, &[0, 1, 1, 3]).is_err());
    }
}
