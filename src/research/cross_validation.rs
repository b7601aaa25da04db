use rand::prelude::*;
use colored::Colorize;
use crate::Instance;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test sample for cross validation.
///
/// The sample is cut into `n_folds` contiguous folds
/// of `n_sample / n_folds` instances each;
/// the last fold also takes the remainder.
/// Each iteration yields `(train, test)`
/// where `test` is one fold and `train` is everything else.
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let sample = (0..20)
///     .map(|i| Instance::new(vec![i as f64], i < 10))
///     .collect::<Vec<_>>();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(4)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let mut knn = KNNClassifier::with_k(3);
///     knn.fit(train).unwrap();
///     let acc = accuracy(&knn, &test).unwrap();
///     assert!((0.0..=100.0).contains(&acc));
/// }
/// ```
pub struct CrossValidation<'a, L> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a [Instance<L>],
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a, L: Clone> CrossValidation<'a, L> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a [Instance<L>]) -> Self {
        let ix = (0..sample.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(
            2 <= n_folds && n_folds <= self.sample.len(),
            "The number of folds should be in `[2, {}]`.",
            self.sample.len()
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Vec<Instance<L>>, Vec<Instance<L>>) {
        let n_sample = self.sample.len();
        let test_size = n_sample / self.n_folds;
        let start = i * test_size;
        let end = if i + 1 == self.n_folds { n_sample } else { start + test_size };

        let mut train = Vec::with_capacity(n_sample - (end - start));
        let mut test = Vec::with_capacity(end - start);
        for (pos, &k) in self.ix.iter().enumerate() {
            let instance = self.sample[k].clone();
            if (start..end).contains(&pos) {
                test.push(instance);
            } else {
                train.push(instance);
            }
        }
        (train, test)
    }
}


impl<'a, L: Clone> Iterator for CrossValidation<'a, L> {
    type Item = (Vec<Instance<L>>, Vec<Instance<L>>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }
        if self.sample.len() < self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
