//! Defines the decision tree classifier.
use tracing::debug;

use crate::{
    Classifier,
    Instance,
    ProbDist,
};
use crate::common::checker;
use crate::error::{ClassifierError, Result};

use super::node::*;
use super::split::TreeGrower;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;


/// The Decision Tree algorithm with Gini impurity.
///
/// `train()` grows a binary tree by recursive partitioning.
/// Each node is split by the `(feature, threshold)` pair
/// that minimizes the weighted Gini impurity,
/// where the thresholds are the feature values of the training instances
/// themselves.
/// Instances whose value is strictly below the threshold go left.
/// Growth stops at the maximal depth,
/// or where a split leaves one side empty.
///
/// The maximal depth is `max(number of features, number of distinct labels)`
/// unless fixed through [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let sample = vec![
///     Instance::new(vec![1.0], "A"),
///     Instance::new(vec![2.0], "A"),
///     Instance::new(vec![10.0], "B"),
///     Instance::new(vec![11.0], "B"),
/// ];
/// let mut tree = DecisionTreeClassifier::new();
/// tree.set_training_data(sample).unwrap();
/// tree.train().unwrap();
///
/// assert_eq!(tree.classify(&Instance::unlabeled(vec![1.5])).unwrap(), "A");
/// assert_eq!(tree.classify(&Instance::unlabeled(vec![10.5])).unwrap(), "B");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeClassifier<L> {
    sample: Vec<Instance<L>>,
    n_feature: Option<usize>,
    fixed_depth: Option<usize>,
    max_depth: usize,
    interrupt: Option<Arc<AtomicBool>>,
    root: Option<Node<L>>,
}


impl<L> Default for DecisionTreeClassifier<L> {
    fn default() -> Self {
        Self::from_components(None, None)
    }
}


impl<L> DecisionTreeClassifier<L> {
    /// Construct an untrained tree with the default parameters.
    /// See [`DecisionTreeBuilder`](super::DecisionTreeBuilder)
    /// for the other parameters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    pub(super) fn from_components(
        fixed_depth: Option<usize>,
        interrupt: Option<Arc<AtomicBool>>,
    ) -> Self
    {
        Self {
            sample: Vec::new(),
            n_feature: None,
            fixed_depth,
            max_depth: 0,
            interrupt,
            root: None,
        }
    }


    /// The maximal depth used by `train()`.
    /// `0` until training data is set.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// The root of the trained tree, `None` before `train()`.
    #[inline]
    pub fn root(&self) -> Option<&Node<L>> {
        self.root.as_ref()
    }


    /// Depth of the trained tree.
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        self.root.as_ref().map(Node::depth)
    }


    /// Number of leaves of the trained tree.
    #[inline]
    pub fn n_leaves(&self) -> Option<usize> {
        self.root.as_ref().map(Node::leaves)
    }


    fn trained_root(&self) -> Result<(&Node<L>, usize)> {
        match (&self.root, self.n_feature) {
            (Some(root), Some(n)) => Ok((root, n)),
            _ => Err(ClassifierError::InvalidState(
                "decision tree is not trained".into()
            )),
        }
    }
}


impl<L: fmt::Display> DecisionTreeClassifier<L> {
    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let (root, _) = self.trained_root()?;

        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl<L: fmt::Display> fmt::Display for DecisionTreeClassifier<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(ref root) => write!(f, "{root}"),
            None => writeln!(f, "(untrained decision tree)"),
        }
    }
}


impl<L> Classifier<L> for DecisionTreeClassifier<L>
    where L: Clone + PartialEq,
{
    fn name(&self) -> &str {
        "Decision Tree (Gini)"
    }


    fn set_training_data(&mut self, sample: Vec<Instance<L>>) -> Result<()> {
        let n_feature = checker::check_sample(&sample)?;
        if sample.len() < 2 {
            return Err(ClassifierError::Configuration(format!(
                "a decision tree needs at least 2 training instances, got {}",
                sample.len()
            )));
        }

        let mut labels: Vec<&L> = Vec::new();
        for y in checker::labels_of(&sample) {
            if !labels.contains(&y) { labels.push(y); }
        }
        let n_label = labels.len();

        self.max_depth = self.fixed_depth
            .unwrap_or_else(|| n_feature.max(n_label));
        self.sample = sample;
        self.n_feature = Some(n_feature);
        self.root = None;

        debug!(
            n_sample = self.sample.len(),
            n_feature,
            n_label,
            max_depth = self.max_depth,
            "decision tree training data set",
        );
        Ok(())
    }


    fn train(&mut self) -> Result<()> {
        if self.n_feature.is_none() {
            return Err(ClassifierError::InvalidState(
                "train() called before set_training_data()".into()
            ));
        }

        let grower = TreeGrower {
            max_depth: self.max_depth,
            interrupt: self.interrupt.clone(),
        };
        let instances = self.sample.iter().collect::<Vec<_>>();
        let root = grower.grow(&instances[..])?;

        debug!(
            depth = root.depth(),
            leaves = root.leaves(),
            "decision tree built",
        );
        self.root = Some(root);
        Ok(())
    }


    fn prob_dist(&self, instance: &Instance<L>) -> Result<ProbDist<L>> {
        let (root, n_feature) = self.trained_root()?;
        checker::check_instance(instance, n_feature)?;

        Ok(root.prob_dist(instance.features()).clone())
    }
}
