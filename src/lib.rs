#![warn(missing_docs)]

//! 
//! A crate that provides probabilistic classifiers
//! over continuous features.
//! Every classifier in this crate answers a query
//! with a ranked probability distribution over the labels,
//! not just a single label.
//! 
//! This crate includes three classifiers.
//! 
//! - [`KNNClassifier`]
//!     k-Nearest-Neighbors with Euclidean distance.
//!     Either every training instance votes,
//!     weighted by the inverse of the summed distance per label,
//!     or the `k` closest instances vote once each.
//! 
//! 
//! - [`GaussianNB`]
//!     Gaussian Naive Bayes.
//!     Each label is summarized by the per-feature mean and
//!     sample standard deviation of its training instances.
//! 
//! 
//! - [`DecisionTreeClassifier`]
//!     A binary decision tree grown by minimizing the Gini impurity,
//!     whose leaves hold the label distribution of their training instances.
//! 
//! All of them implement the [`Classifier`] trait.
//! 
//! # Example
//! ```
//! use probdist::prelude::*;
//! 
//! let sample = vec![
//!     Instance::new(vec![1.0, 1.0], "A"),
//!     Instance::new(vec![1.5, 1.0], "A"),
//!     Instance::new(vec![9.0, 9.5], "B"),
//!     Instance::new(vec![9.5, 9.0], "B"),
//! ];
//! 
//! let mut nb = GaussianNB::new();
//! nb.fit(sample).unwrap();
//! 
//! let dist = nb.prob_dist(&Instance::unlabeled(vec![1.2, 0.9])).unwrap();
//! assert_eq!(*dist.top(), "A");
//! println!("{dist}");
//! ```

pub mod error;
pub mod instance;
pub mod common;
pub mod classifier;

pub mod knn;
pub mod naive_bayes;
pub mod decision_tree;

pub mod sample;
pub mod research;

pub mod prelude;


pub use error::{ClassifierError, Result};
pub use instance::Instance;
pub use common::{ProbDist, LabelTally};
pub use classifier::Classifier;


pub use knn::{KNNClassifier, KNNConfig, Neighbors};
pub use naive_bayes::{GaussianNB, Gaussian, Probability};
pub use decision_tree::{
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    BranchNode,
    LeafNode,
    Splitter,
    LR,
};


// Export functions that read instances.
pub use sample::{
    InstanceReader,
    from_dataframe,
    train_test_split,
    DEFAULT_TRAIN_RATIO,
};


pub use research::{
    accuracy,
    CrossValidation,
    KSweep,
};
