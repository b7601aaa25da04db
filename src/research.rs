//! This directory provides some features for research.
//! - Accuracy of a trained classifier on a test set
//! - Cross validation
//! - Sweeping the number of neighbors of kNN

/// Provides a k-fold cross validation iterator.
pub mod cross_validation;

/// Defines evaluation metrics (e.g., accuracy).
pub mod metrics;

/// Provides the accuracy sweep over the neighbor count of kNN.
pub mod k_sweep;


pub use cross_validation::CrossValidation;
pub use metrics::accuracy;
pub use k_sweep::KSweep;
