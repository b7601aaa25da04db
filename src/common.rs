//! Defines some common functions used in this library.

/// Defines the ranked label distribution and its accumulator.
pub mod prob_dist;

/// Defines distance and summary statistics.
pub mod statistics;

/// Defines some checker functions.
pub(crate) mod checker;

pub use prob_dist::{ProbDist, LabelTally};
