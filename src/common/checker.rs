//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use crate::Instance;
use crate::error::{ClassifierError, Result};


/// Check whether the training sample is valid or not,
/// and returns the number of features.
///
/// A valid training sample
/// - has at least one instance,
/// - has at least one feature,
/// - has feature vectors of the same length, and
/// - has a label on every instance.
pub(crate) fn check_sample<L>(sample: &[Instance<L>]) -> Result<usize> {
    let first = sample.first()
        .ok_or_else(|| ClassifierError::Configuration(
            "the training set is empty".into()
        ))?;

    let n_feature = first.n_features();
    if n_feature == 0 {
        return Err(ClassifierError::Configuration(
            "the training instances have no feature".into()
        ));
    }

    for (i, instance) in sample.iter().enumerate() {
        if instance.n_features() != n_feature {
            return Err(ClassifierError::Configuration(format!(
                "instance {i} has {} features, expected {n_feature}",
                instance.n_features(),
            )));
        }
        if instance.label().is_none() {
            return Err(ClassifierError::Configuration(
                format!("training instance {i} has no label")
            ));
        }
    }

    Ok(n_feature)
}


/// Check whether the test instance has the expected number of features.
#[inline]
pub(crate) fn check_instance<L>(instance: &Instance<L>, n_feature: usize)
    -> Result<()>
{
    let got = instance.n_features();
    if got != n_feature {
        return Err(ClassifierError::DimensionMismatch {
            expected: n_feature,
            got,
        });
    }
    Ok(())
}


/// Returns the labels of the given sample.
/// The sample must have passed [`check_sample`].
#[inline]
pub(crate) fn labels_of<L>(sample: &[Instance<L>]) -> impl Iterator<Item = &L> {
    sample.iter().filter_map(|instance| instance.label())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_success() {
        let sample = vec![
            Instance::new(vec![1.0, 2.0], "A"),
            Instance::new(vec![3.0, 4.0], "B"),
        ];
        assert_eq!(check_sample(&sample).unwrap(), 2);
    }

    #[test]
    fn test_sample_failure_empty() {
        let sample: Vec<Instance<&str>> = Vec::new();
        assert!(matches!(
            check_sample(&sample),
            Err(ClassifierError::Configuration(_))
        ));
    }

    #[test]
    fn test_sample_failure_no_feature() {
        let sample = vec![Instance::new(vec![], "A")];
        assert!(check_sample(&sample).is_err());
    }

    #[test]
    fn test_sample_failure_ragged() {
        let sample = vec![
            Instance::new(vec![1.0, 2.0], "A"),
            Instance::new(vec![3.0], "B"),
        ];
        assert!(check_sample(&sample).is_err());
    }

    #[test]
    fn test_sample_failure_unlabeled() {
        let sample = vec![
            Instance::new(vec![1.0], "A"),
            Instance::unlabeled(vec![3.0]),
        ];
        assert!(check_sample(&sample).is_err());
    }

    #[test]
    fn test_instance_dimension() {
        let x = Instance::<&str>::unlabeled(vec![1.0]);
        assert!(check_instance(&x, 1).is_ok());
        assert!(matches!(
            check_instance(&x, 2),
            Err(ClassifierError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }
}
