//! Tour cost evaluation and instance validation.

mod evaluator;

pub use evaluator::{check_instance, check_tour, evaluate, evaluate_checked, non_home_cities, validate_route};
