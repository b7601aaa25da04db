use colored::Colorize;
use tracing::debug;

use std::ops::RangeInclusive;

use crate::{Classifier, Instance, KNNClassifier, Neighbors};
use crate::error::Result;
use super::metrics::accuracy;


/// Smallest number of neighbors tried by default.
pub const DEFAULT_K_MIN: usize = 1;
/// Largest number of neighbors tried by default.
pub const DEFAULT_K_MAX: usize = 10;


/// Trains a majority-vote kNN for every `k` in a range
/// and reports the test accuracy of each.
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let train = (0..20)
///     .map(|i| Instance::new(vec![i as f64], i < 10))
///     .collect::<Vec<_>>();
/// let test = vec![
///     Instance::new(vec![2.5], true),
///     Instance::new(vec![16.5], false),
/// ];
/// let report = KSweep::new(&train, &test)
///     .k_range(1..=5)
///     .run()
///     .unwrap();
/// assert_eq!(report.len(), 5);
/// assert!(report.iter().all(|&(_, acc)| acc == 100.0));
/// ```
pub struct KSweep<'a, L> {
    train: &'a [Instance<L>],
    test: &'a [Instance<L>],
    ks: RangeInclusive<usize>,
    verbose: bool,
}


impl<'a, L> KSweep<'a, L>
    where L: Clone + PartialEq + Send + Sync,
{
    /// Construct a new sweep over `k = 1, 2, ..., 10`.
    pub fn new(train: &'a [Instance<L>], test: &'a [Instance<L>]) -> Self {
        Self {
            train,
            test,
            ks: DEFAULT_K_MIN..=DEFAULT_K_MAX,
            verbose: false,
        }
    }


    /// Set the range of `k`.
    pub fn k_range(mut self, ks: RangeInclusive<usize>) -> Self {
        assert!(*ks.start() > 0, "`k` should be positive.");
        self.ks = ks;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, the accuracy of each `k` is printed.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Runs the sweep and returns `(k, accuracy)` pairs in increasing `k`.
    pub fn run(self) -> Result<Vec<(usize, f64)>> {
        let mut knn = KNNClassifier::new();
        knn.set_training_data(self.train.to_vec())?;

        let mut report = Vec::new();
        for k in self.ks.clone() {
            knn = knn.neighbors(Neighbors::Nearest(k));
            knn.train()?;
            let acc = accuracy(&knn, self.test)?;
            debug!(k, accuracy = acc, "k sweep");

            if self.verbose {
                println!(
                    "{}    {}",
                    format!("[k = {k: >3}]").bold().red(),
                    format!("[ACCURACY {acc: >8.3}%]").bold().green(),
                );
            }
            report.push((k, acc));
        }
        Ok(report)
    }
}
