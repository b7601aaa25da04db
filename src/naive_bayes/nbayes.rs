use tracing::debug;

use crate::{
    Classifier,
    Instance,
    LabelTally,
    ProbDist,
};
use crate::common::checker;
use crate::error::{ClassifierError, Result};

use super::probability::{Gaussian, Probability};


/// Gaussian Naive Bayes for continuous features.
/// The struct name comes from scikit-learn.
///
/// `train()` summarizes each label by the per-feature mean and sample
/// standard deviation of its training instances.
/// The likelihood of a label is the product of the per-feature
/// Gaussian densities, each standard deviation smoothed by
/// [`PSEUDOCOUNT`](super::PSEUDOCOUNT).
/// The product is accumulated in log space, so many features
/// do not underflow it to zero.
///
/// Every label needs at least two training instances.
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let sample = vec![
///     Instance::new(vec![1.0], "A"),
///     Instance::new(vec![2.0], "A"),
///     Instance::new(vec![3.0], "A"),
///     Instance::new(vec![10.0], "B"),
///     Instance::new(vec![11.0], "B"),
///     Instance::new(vec![12.0], "B"),
/// ];
/// let mut nbayes = GaussianNB::new();
/// nbayes.fit(sample).unwrap();
///
/// let dist = nbayes.prob_dist(&Instance::unlabeled(vec![2.0])).unwrap();
/// assert_eq!(*dist.top(), "A");
/// ```
#[derive(Debug, Clone)]
pub struct GaussianNB<L> {
    sample: Vec<Instance<L>>,
    n_feature: Option<usize>,
    summaries: Option<Vec<(L, Gaussian)>>,
}


impl<L> Default for GaussianNB<L> {
    fn default() -> Self {
        Self {
            sample: Vec::new(),
            n_feature: None,
            summaries: None,
        }
    }
}


impl<L> GaussianNB<L> {
    /// Initializes the GaussianNB instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Returns the per-label summaries in order of first appearance,
    /// or `None` before `train()`.
    #[inline]
    pub fn summaries(&self) -> Option<&[(L, Gaussian)]> {
        self.summaries.as_deref()
    }
}


impl<L> GaussianNB<L>
    where L: Clone + PartialEq,
{
    /// Groups the training instances by label,
    /// keeping the order in which labels first appear.
    fn separate_by_label(&self) -> Vec<(&L, Vec<&Instance<L>>)> {
        let mut separated: Vec<(&L, Vec<&Instance<L>>)> = Vec::new();
        for instance in self.sample.iter() {
            let Some(y) = instance.label() else { continue; };
            match separated.iter_mut().find(|(label, _)| *label == y) {
                Some((_, group)) => { group.push(instance); },
                None => { separated.push((y, vec![instance])); },
            }
        }
        separated
    }
}


impl<L> Classifier<L> for GaussianNB<L>
    where L: Clone + PartialEq,
{
    fn name(&self) -> &str {
        "Gaussian Naive Bayes"
    }


    fn set_training_data(&mut self, sample: Vec<Instance<L>>) -> Result<()> {
        let n_feature = checker::check_sample(&sample)?;
        self.sample = sample;
        self.n_feature = Some(n_feature);
        self.summaries = None;

        debug!(
            n_sample = self.sample.len(),
            n_feature,
            "Naive Bayes training data set",
        );
        Ok(())
    }


    fn train(&mut self) -> Result<()> {
        let n_feature = self.n_feature
            .ok_or_else(|| ClassifierError::InvalidState(
                "train() called before set_training_data()".into()
            ))?;

        let separated = self.separate_by_label();

        if let Some((_, group)) = separated.iter().find(|(_, g)| g.len() < 2) {
            return Err(ClassifierError::Configuration(format!(
                "every label needs at least 2 training instances \
                to estimate a standard deviation, found a label with {}",
                group.len(),
            )));
        }

        let summaries = separated.into_iter()
            .map(|(y, group)| {
                let rows = group.iter().map(|instance| instance.features());
                (y.clone(), Gaussian::fit(rows, n_feature))
            })
            .collect::<Vec<_>>();

        debug!(n_label = summaries.len(), "Naive Bayes summaries computed");
        self.summaries = Some(summaries);
        Ok(())
    }


    fn prob_dist(&self, instance: &Instance<L>) -> Result<ProbDist<L>> {
        let (summaries, n_feature) = match (&self.summaries, self.n_feature) {
            (Some(s), Some(n)) => (s, n),
            _ => {
                return Err(ClassifierError::InvalidState(
                    "Naive Bayes classifier is not trained".into()
                ));
            },
        };
        checker::check_instance(instance, n_feature)?;

        let x = instance.features();
        let log_likelihoods = summaries.iter()
            .map(|(y, density)| (y, density.log_probability(x)))
            .collect::<Vec<_>>();

        // Shift by the maximum before exponentiating (log-sum-exp),
        // which leaves the normalized values unchanged.
        let max = log_likelihoods.iter()
            .map(|(_, l)| *l)
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(ClassifierError::Arithmetic(format!(
                "the likelihood of every label is degenerate (max log = {max})"
            )));
        }

        let mut tally = LabelTally::new();
        log_likelihoods.into_iter()
            .for_each(|(y, l)| tally.add(y, (l - max).exp()));

        tally.normalize()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::statistics::gaussian_density;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn two_clusters() -> Vec<Instance<&'static str>> {
        vec![
            Instance::new(vec![1.0], "A"),
            Instance::new(vec![2.0], "A"),
            Instance::new(vec![3.0], "A"),
            Instance::new(vec![10.0], "B"),
            Instance::new(vec![11.0], "B"),
            Instance::new(vec![12.0], "B"),
        ]
    }

    #[test]
    fn test_two_clusters() {
        let mut nbayes = GaussianNB::new();
        nbayes.fit(two_clusters()).unwrap();

        let dist = nbayes.prob_dist(&Instance::unlabeled(vec![2.0])).unwrap();
        assert_eq!(*dist.top(), "A");
        assert!(dist.top_probability() > 0.5);
    }

    #[test]
    fn test_matches_literal_product() {
        let mut nbayes = GaussianNB::new();
        nbayes.fit(two_clusters()).unwrap();

        // Both labels have std dev 1, so the smoothed std dev is 2.
        let x = 6.0;
        let pa = gaussian_density(x, 2.0, 2.0);
        let pb = gaussian_density(x, 11.0, 2.0);

        let dist = nbayes.prob_dist(&Instance::unlabeled(vec![x])).unwrap();
        assert_eq!(*dist.top(), "A");
        assert!((dist.probability_of(&"A") - pa / (pa + pb)).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_no_underflow_with_many_features() {
        // 400 features far from both means: the literal product underflows.
        let n = 400;
        let sample = vec![
            Instance::new(vec![0.0; n], 0),
            Instance::new(vec![1.0; n], 0),
            Instance::new(vec![4.0; n], 1),
            Instance::new(vec![5.0; n], 1),
        ];
        let mut nbayes = GaussianNB::new();
        nbayes.fit(sample).unwrap();

        let dist = nbayes.prob_dist(&Instance::unlabeled(vec![40.0; n])).unwrap();
        assert_eq!(*dist.top(), 1);
        let sum = dist.iter().map(|(_, p)| p).sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_instance_label_is_rejected() {
        let mut sample = two_clusters();
        sample.push(Instance::new(vec![50.0], "C"));

        let mut nbayes = GaussianNB::new();
        nbayes.set_training_data(sample).unwrap();
        assert!(matches!(
            nbayes.train(),
            Err(ClassifierError::Configuration(_))
        ));
        assert!(nbayes.summaries().is_none());
    }

    #[test]
    fn test_summaries_keep_label_order() {
        let sample = vec![
            Instance::new(vec![10.0], "B"),
            Instance::new(vec![1.0], "A"),
            Instance::new(vec![12.0], "B"),
            Instance::new(vec![3.0], "A"),
        ];
        let mut nbayes = GaussianNB::new();
        nbayes.fit(sample).unwrap();

        let summaries = nbayes.summaries().unwrap();
        assert_eq!(summaries[0].0, "B");
        assert_eq!(summaries[0].1.means(), &[11.0]);
        assert_eq!(summaries[1].0, "A");
        assert_eq!(summaries[1].1.means(), &[2.0]);
    }

    #[test]
    fn test_predict_before_train() {
        let mut nbayes = GaussianNB::new();
        nbayes.set_training_data(two_clusters()).unwrap();
        assert!(matches!(
            nbayes.classify(&Instance::unlabeled(vec![2.0])),
            Err(ClassifierError::InvalidState(_))
        ));
    }
}
