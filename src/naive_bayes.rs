//! The Gaussian Naive Bayes classifier.

/// Defines the Gaussian Naive Bayes classifier.
mod nbayes;

/// Defines probability density functions.
mod probability;

pub use nbayes::GaussianNB;
pub use probability::{Gaussian, Probability, PSEUDOCOUNT};
