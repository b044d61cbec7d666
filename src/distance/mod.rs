//! Distance matrices.
//!
//! Provides a dense distance matrix shared read-only by every search.

mod matrix;

pub use matrix::DistanceMatrix;
