//! Defines [`Instance`], a single data point.
use serde::{Serialize, Deserialize};

use std::fmt;


/// A feature vector together with an optional label.
///
/// Training instances always carry a label.
/// Test instances may leave it as `None`;
/// the classifiers never write a prediction back into an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance<L> {
    features: Vec<f64>,
    label: Option<L>,
}


impl<L> Instance<L> {
    /// Construct a labeled instance.
    #[inline]
    pub fn new(features: Vec<f64>, label: L) -> Self {
        Self { features, label: Some(label) }
    }


    /// Construct an instance without label.
    #[inline]
    pub fn unlabeled(features: Vec<f64>) -> Self {
        Self { features, label: None }
    }


    /// Returns the feature vector.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features[..]
    }


    /// Returns the `i`-th feature value.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn feature(&self, i: usize) -> f64 {
        self.features[i]
    }


    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }


    /// Returns the label, if any.
    #[inline]
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }
}


impl<L> From<(Vec<f64>, L)> for Instance<L> {
    #[inline]
    fn from((features, label): (Vec<f64>, L)) -> Self {
        Self::new(features, label)
    }
}


impl<L: fmt::Display> fmt::Display for Instance<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, ", self.features)?;
        match self.label {
            Some(ref label) => write!(f, "{label}"),
            None => write!(f, "None"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let x = Instance::new(vec![1.0, 2.5], "A");
        assert_eq!(x.to_string(), "[1.0, 2.5], A");

        let x = Instance::<&str>::unlabeled(vec![0.0]);
        assert_eq!(x.to_string(), "[0.0], None");
    }

    #[test]
    fn test_accessors() {
        let x: Instance<i32> = (vec![3.0, 4.0], 7).into();
        assert_eq!(x.n_features(), 2);
        assert_eq!(x.feature(1), 4.0);
        assert_eq!(x.label(), Some(&7));
    }
}
