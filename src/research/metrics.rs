use crate::{Classifier, Instance};
use crate::error::{ClassifierError, Result};


/// Returns the percentage (in `[0, 100]`) of `test` instances
/// whose label equals the classifier's prediction.
///
/// Every test instance must carry a label,
/// and `test` must not be empty.
pub fn accuracy<C, L>(classifier: &C, test: &[Instance<L>]) -> Result<f64>
    where C: Classifier<L> + Sync,
          L: Clone + PartialEq + Send + Sync,
{
    if test.is_empty() {
        return Err(ClassifierError::Configuration(
            "accuracy needs at least one test instance".into()
        ));
    }

    let predictions = classifier.classify_all(test)?;

    let mut correct = 0_usize;
    for (instance, prediction) in test.iter().zip(predictions) {
        let label = instance.label()
            .ok_or_else(|| ClassifierError::Configuration(
                "test instances must be labeled".into()
            ))?;
        if *label == prediction { correct += 1; }
    }

    Ok(100f64 * correct as f64 / test.len() as f64)
}
