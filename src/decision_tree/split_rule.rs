//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Instance;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The feature value is strictly less than the threshold.
    Left,
    /// The feature value is greater than or equal to the threshold.
    Right,
}


/// A pair of a feature index and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    /// Index of the feature this rule looks at.
    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Threshold of this rule.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, x: &[f64]) -> LR {
        if x[self.feature] < self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }


    /// Partition `instances` into the left and right groups,
    /// keeping their relative order.
    pub(crate) fn partition<'a, L>(&self, instances: &[&'a Instance<L>])
        -> (Vec<&'a Instance<L>>, Vec<&'a Instance<L>>)
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for &instance in instances {
            match self.split(instance.features()) {
                LR::Left  => { left.push(instance); },
                LR::Right => { right.push(instance); },
            }
        }
        (left, right)
    }
}
