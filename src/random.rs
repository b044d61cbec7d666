//! Random source construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator every runner draws from.
///
/// A fixed seed makes a run reproducible; `None` seeds from the operating
/// system.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp::random::create_rng;
///
/// let a: u64 = create_rng(Some(42)).random();
/// let b: u64 = create_rng(Some(42)).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
