//! The k-Nearest-Neighbors classifier and its neighbor selection modes.

/// Defines the k-Nearest-Neighbors classifier.
mod knn_classifier;
/// Defines the neighbor selection modes.
mod neighbors;

pub use knn_classifier::KNNClassifier;
pub use neighbors::{Neighbors, KNNConfig};
