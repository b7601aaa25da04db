use tracing::debug;

use crate::{
    Classifier,
    Instance,
    LabelTally,
    ProbDist,
};
use crate::common::{checker, statistics::euclidean_distance};
use crate::error::{ClassifierError, Result};

use super::neighbors::{Neighbors, KNNConfig};


/// The k-Nearest-Neighbors classifier for continuous features
/// with Euclidean distance.
///
/// By default every training instance is a neighbor
/// ([`Neighbors::All`]) and each label is weighted by the inverse of
/// its summed distance to the test instance.
/// [`Neighbors::Nearest`] restricts the vote to the `k` closest
/// training instances with one vote each.
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let sample = vec![
///     Instance::new(vec![0.0], "X"),
///     Instance::new(vec![100.0], "Y"),
/// ];
/// let mut knn = KNNClassifier::with_k(1);
/// knn.set_training_data(sample).unwrap();
/// knn.train().unwrap();
///
/// let label = knn.classify(&Instance::unlabeled(vec![1.0])).unwrap();
/// assert_eq!(label, "X");
/// ```
#[derive(Debug, Clone)]
pub struct KNNClassifier<L> {
    config: KNNConfig,
    sample: Vec<Instance<L>>,
    n_feature: Option<usize>,
    trained: bool,
}


impl<L> Default for KNNClassifier<L> {
    fn default() -> Self {
        Self::from_config(KNNConfig::default())
    }
}


impl<L> KNNClassifier<L> {
    /// Construct a classifier that uses every training instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct a classifier that votes among the `k` nearest neighbors.
    #[inline]
    pub fn with_k(k: usize) -> Self {
        Self::from_config(KNNConfig { neighbors: Neighbors::Nearest(k) })
    }


    /// Construct a classifier from the given configuration.
    #[inline]
    pub fn from_config(config: KNNConfig) -> Self {
        Self {
            config,
            sample: Vec::new(),
            n_feature: None,
            trained: false,
        }
    }


    /// Set the neighbor selection mode.
    /// Changing the mode requires calling `train()` again.
    #[inline]
    pub fn neighbors(mut self, neighbors: Neighbors) -> Self {
        self.config.neighbors = neighbors;
        self.trained = false;
        self
    }


    /// Returns the current configuration.
    #[inline]
    pub fn config(&self) -> &KNNConfig {
        &self.config
    }


    fn check_neighbors(&self, n_sample: usize) -> Result<()> {
        if let Neighbors::Nearest(k) = self.config.neighbors {
            if k == 0 || k > n_sample {
                return Err(ClassifierError::Configuration(format!(
                    "k must be in [1, {n_sample}], got {k}"
                )));
            }
        }
        Ok(())
    }
}


impl<L> KNNClassifier<L>
    where L: Clone + PartialEq,
{
    /// Sums the distances per label over all training instances,
    /// and weights each label by the inverse of its sum.
    fn inverse_distance_dist(&self, instance: &Instance<L>)
        -> Result<ProbDist<L>>
    {
        let mut distances = LabelTally::new();
        for train in self.sample.iter() {
            let d = euclidean_distance(train.features(), instance.features());
            if let Some(y) = train.label() {
                distances.add(y, d);
            }
        }

        if distances.iter().any(|(_, d)| d == 0f64) {
            return Err(ClassifierError::Arithmetic(
                "summed distance to a label is zero".into()
            ));
        }

        distances.map_weights(|d| 1f64 / d)
            .normalize()
    }


    /// Majority vote among the `k` closest training instances.
    fn majority_vote_dist(&self, instance: &Instance<L>, k: usize)
        -> Result<ProbDist<L>>
    {
        let mut neighbors = self.sample.iter()
            .map(|train| {
                let d = euclidean_distance(
                    train.features(), instance.features()
                );
                (train, d)
            })
            .collect::<Vec<_>>();

        // Stable, so equidistant neighbors keep the training order.
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut votes = LabelTally::new();
        neighbors.into_iter()
            .take(k)
            .filter_map(|(train, _)| train.label())
            .for_each(|y| votes.add(y, 1f64));

        votes.normalize()
    }
}


impl<L> Classifier<L> for KNNClassifier<L>
    where L: Clone + PartialEq,
{
    fn name(&self) -> &str {
        "k-Nearest Neighbors"
    }


    fn set_training_data(&mut self, sample: Vec<Instance<L>>) -> Result<()> {
        let n_feature = checker::check_sample(&sample)?;
        self.check_neighbors(sample.len())?;
        self.sample = sample;
        self.n_feature = Some(n_feature);
        self.trained = false;

        debug!(
            n_sample = self.sample.len(),
            n_feature,
            neighbors = %self.config.neighbors,
            "kNN training data set",
        );
        Ok(())
    }


    fn train(&mut self) -> Result<()> {
        if self.n_feature.is_none() {
            return Err(ClassifierError::InvalidState(
                "train() called before set_training_data()".into()
            ));
        }
        self.check_neighbors(self.sample.len())?;
        self.trained = true;
        Ok(())
    }


    fn prob_dist(&self, instance: &Instance<L>) -> Result<ProbDist<L>> {
        let n_feature = match self.n_feature {
            Some(n) if self.trained => n,
            _ => {
                return Err(ClassifierError::InvalidState(
                    "kNN classifier is not trained".into()
                ));
            },
        };
        checker::check_instance(instance, n_feature)?;

        match self.config.neighbors {
            Neighbors::All => self.inverse_distance_dist(instance),
            Neighbors::Nearest(k) => self.majority_vote_dist(instance, k),
        }
    }
}
