//! Console rendering of tours.
//!
//! Cities are shown with 1-based labels, the way the city tables number them.

use std::fmt;

use crate::models::Tour;

/// Formats a tour as `home -> c1 -> … -> home` with 1-based labels.
///
/// # Examples
///
/// ```
/// use u_tsp::display::TourDisplay;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::new(3);
/// let tour = Tour::new(vec![2, 1], &dm, 0);
/// assert_eq!(TourDisplay::new(&tour, 0).to_string(), "1 -> 3 -> 2 -> 1");
/// ```
pub struct TourDisplay<'a> {
    tour: &'a Tour,
    home: usize,
}

impl<'a> TourDisplay<'a> {
    /// Wraps a tour anchored at `home`.
    pub fn new(tour: &'a Tour, home: usize) -> Self {
        Self { tour, home }
    }
}

impl fmt::Display for TourDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.home + 1)?;
        for &city in self.tour.route() {
            write!(f, " -> {}", city + 1)?;
        }
        write!(f, " -> {}", self.home + 1)
    }
}

/// Renders a titled block: the path, a blank line, then the total distance.
pub fn report(title: &str, tour: &Tour, home: usize) -> String {
    format!(
        "-- {title} --\n{}\n\nTotal distance: {} miles\n",
        TourDisplay::new(tour, home),
        tour.cost()
    )
}
