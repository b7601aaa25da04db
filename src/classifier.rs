//! The uniform train/predict contract shared by every classifier.
//!
//! A classifier is used in three steps:
//!
//! 1. [`Classifier::set_training_data`] hands over the training instances,
//! 2. [`Classifier::train`] builds the model from them, and
//! 3. [`Classifier::prob_dist`] / [`Classifier::classify`]
//!    rank the labels for a test instance.
//!
//! Training takes `&mut self` and prediction takes `&self`,
//! so a trained classifier can be shared across threads for prediction
//! while the borrow checker rules out a concurrent re-training.
use rayon::prelude::*;

use crate::{Instance, ProbDist};
use crate::error::Result;


/// A trait that defines the behavior of a classifier
/// over labels of type `L`.
/// You need to implement `set_training_data`, `train`, and `prob_dist`.
pub trait Classifier<L> {
    /// Returns the name of the classifier.
    fn name(&self) -> &str;


    /// Validates and stores the training instances.
    /// Any previously trained model is discarded.
    fn set_training_data(&mut self, sample: Vec<Instance<L>>) -> Result<()>;


    /// Builds the model from the stored training instances.
    fn train(&mut self) -> Result<()>;


    /// Returns the labels ranked by probability for `instance`.
    fn prob_dist(&self, instance: &Instance<L>) -> Result<ProbDist<L>>;


    /// Returns the most probable label for `instance`.
    fn classify(&self, instance: &Instance<L>) -> Result<L> {
        self.prob_dist(instance)
            .map(|dist| dist.into_top())
    }


    /// Shorthand for `set_training_data` followed by `train`.
    fn fit(&mut self, sample: Vec<Instance<L>>) -> Result<()> {
        self.set_training_data(sample)?;
        self.train()
    }


    /// Computes the distributions of all `instances` in parallel.
    fn prob_dist_all(&self, instances: &[Instance<L>])
        -> Result<Vec<ProbDist<L>>>
        where Self: Sync,
              L: Send + Sync,
    {
        instances.par_iter()
            .map(|instance| self.prob_dist(instance))
            .collect::<Result<Vec<_>>>()
    }


    /// Predicts the labels of all `instances` in parallel.
    fn classify_all(&self, instances: &[Instance<L>]) -> Result<Vec<L>>
        where Self: Sync,
              L: Send + Sync,
    {
        instances.par_iter()
            .map(|instance| self.classify(instance))
            .collect::<Result<Vec<_>>>()
    }
}
