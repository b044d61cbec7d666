//! Ordered crossover.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::Tour;

use super::mutation::floor_index;

/// Builds a child from two parents by ordered crossover.
///
/// Two cut points are drawn uniformly from `[0, len)`. The child keeps
/// `parent_a.route[start..end]` at the same positions; the remaining
/// positions, left to right, receive the cities of `parent_b` missing from
/// that segment, in `parent_b`'s order. When both cuts coincide the segment
/// is empty and the child is a copy of `parent_b`'s route. Crossing a tour
/// with itself reproduces it.
///
/// Both parents must be routes over the same city set. Neither is modified.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{Tour, routes_equal};
/// use u_tsp::operators::crossover;
///
/// let dm = DistanceMatrix::new(5);
/// let parent = Tour::new(vec![4, 2, 1, 3], &dm, 0);
/// let mut rng = StdRng::seed_from_u64(3);
/// let child = crossover(&dm, 0, &parent, &parent, &mut rng);
/// assert!(routes_equal(&child, &parent));
/// ```
pub fn crossover<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    home: usize,
    parent_a: &Tour,
    parent_b: &Tour,
    rng: &mut R,
) -> Tour {
    let n = parent_a.len();
    let a = floor_index(rng.random::<f64>(), n);
    let b = floor_index(rng.random::<f64>(), n);
    let (start, end) = (a.min(b), a.max(b));

    Tour::new(order_crossover(parent_a.route(), parent_b.route(), start, end), distances, home)
}

/// Keeps `donor[start..end]` in place and fills the other positions with the
/// cities of `filler` missing from that segment, in `filler`'s order.
fn order_crossover(donor: &[usize], filler: &[usize], start: usize, end: usize) -> Vec<usize> {
    let segment = &donor[start..end];
    // City ids are bounded by the largest id either parent mentions.
    let bound = donor
        .iter()
        .chain(filler)
        .copied()
        .max()
        .map_or(0, |m| m + 1);
    let mut taken = vec![false; bound];
    for &city in segment {
        taken[city] = true;
    }

    let mut rest = filler.iter().copied().filter(|&c| !taken[c]);
    let mut child = Vec::with_capacity(filler.len());
    child.extend(rest.by_ref().take(start));
    child.extend_from_slice(segment);
    child.extend(rest);
    child
}
