use rand::prelude::*;

use crate::Instance;


/// The share of instances that goes to the training set by default.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.67;


/// Shuffle `sample` with the given `seed` and split it into
/// a training set holding `train_ratio` of the instances
/// and a test set holding the rest.
///
/// # Example
/// ```
/// use probdist::prelude::*;
///
/// let sample = (0..100)
///     .map(|i| Instance::new(vec![i as f64], i % 2))
///     .collect::<Vec<_>>();
/// let (train, test) = train_test_split(sample, DEFAULT_TRAIN_RATIO, 1234);
/// assert_eq!(train.len(), 67);
/// assert_eq!(test.len(), 33);
/// ```
pub fn train_test_split<L>(
    mut sample: Vec<Instance<L>>,
    train_ratio: f64,
    seed: u64,
) -> (Vec<Instance<L>>, Vec<Instance<L>>)
{
    assert!(
        0f64 < train_ratio && train_ratio < 1f64,
        "Training ratio should be in `(0, 1)`."
    );
    let mut rng = StdRng::seed_from_u64(seed);
    sample.shuffle(&mut rng);

    let n_train = (train_ratio * sample.len() as f64).round() as usize;
    let test = sample.split_off(n_train);
    (sample, test)
}
