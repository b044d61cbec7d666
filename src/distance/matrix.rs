//! Dense distance matrix.

use crate::error::{Result, TspError};
use crate::models::Coordinate;

/// A dense n×n distance matrix stored in row-major order.
///
/// The matrix is read-only for the duration of a search; every operation in
/// this crate borrows it immutably.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Coordinate;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(3.0, 4.0),
///     Coordinate::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from planar coordinates.
    pub fn from_coordinates(cities: &[Coordinate]) -> Self {
        Self::build(cities, |a, b| a.distance_to(b))
    }

    /// Computes a Euclidean distance matrix with every entry rounded to the
    /// nearest integer.
    pub fn from_coordinates_rounded(cities: &[Coordinate]) -> Self {
        Self::build(cities, |a, b| a.distance_to(b).round())
    }

    fn build(cities: &[Coordinate], metric: impl Fn(&Coordinate, &Coordinate) -> f64) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric(&cities[i], &cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::DimensionMismatch`] if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(TspError::DimensionMismatch {
                    expected: size,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every diagonal entry is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(3.0, 4.0),
            Coordinate::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_coordinates() {
        let dm = DistanceMatrix::from_coordinates(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
        assert!(dm.has_zero_diagonal());
    }

    #[test]
    fn test_from_coordinates_rounded() {
        let cities = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        let dm = DistanceMatrix::from_coordinates_rounded(&cities);
        // sqrt(2) ≈ 1.414 rounds to 1
        assert_eq!(dm.get(0, 1), 1.0);
        assert_eq!(dm.get(1, 0), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_coordinates(&sample_cities());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 2.0], vec![2.0, 0.0]]).expect("square");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(1, 0), 2.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(&[vec![0.0, 2.0], vec![2.0]]).unwrap_err();
        assert_eq!(
            err,
            TspError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
