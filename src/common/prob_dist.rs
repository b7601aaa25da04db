//! Defines [`ProbDist`], the output of every classifier,
//! and [`LabelTally`], the ordered accumulator it is built from.
use serde::{Serialize, Deserialize};

use crate::error::{ClassifierError, Result};

use std::fmt;


/// An insertion-ordered map from labels to non-negative weights.
///
/// Labels are only required to be comparable by `==`,
/// so the lookup is linear in the number of distinct labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTally<L> {
    entries: Vec<(L, f64)>,
}


impl<L> Default for LabelTally<L> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}


impl<L> LabelTally<L>
    where L: PartialEq + Clone,
{
    /// Construct an empty tally.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Add `weight` to the entry of `label`,
    /// appending a new entry if the label has not been seen yet.
    #[inline]
    pub fn add(&mut self, label: &L, weight: f64) {
        match self.entries.iter_mut().find(|(y, _)| y == label) {
            Some((_, w)) => { *w += weight; },
            None => { self.entries.push((label.clone(), weight)); },
        }
    }


    /// Returns the weight of `label`.
    #[inline]
    pub fn get(&self, label: &L) -> Option<f64> {
        self.entries.iter()
            .find(|(y, _)| y == label)
            .map(|(_, w)| *w)
    }


    /// Sum of all weights.
    #[inline]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum::<f64>()
    }


    /// Number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Returns `true` if no label has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Iterate over `(label, weight)` in order of first appearance.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.entries.iter().map(|(y, w)| (y, *w))
    }


    /// Apply `f` to every weight.
    #[inline]
    pub fn map_weights<F>(mut self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        self.entries.iter_mut().for_each(|(_, w)| { *w = f(*w); });
        self
    }


    /// Normalize the weights to sum to `1` and sort them
    /// in descending order.
    /// Labels of equal weight keep their order of first appearance.
    pub fn normalize(self) -> Result<ProbDist<L>> {
        if self.entries.is_empty() {
            return Err(ClassifierError::Arithmetic(
                "cannot normalize an empty distribution".into()
            ));
        }
        let total = self.total();
        if !total.is_finite() || total <= 0f64 {
            return Err(ClassifierError::Arithmetic(
                format!("cannot normalize weights summing to {total}")
            ));
        }

        let mut entries = self.entries;
        entries.iter_mut().for_each(|(_, w)| { *w /= total; });
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(ProbDist { entries })
    }
}


/// A ranked label distribution.
///
/// Pairs `(label, probability)` sorted by descending probability,
/// probabilities summing to `1`.
/// A `ProbDist` is never empty.
/// Deserialization rejects pairs that break these rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawProbDist<L>",
    bound(deserialize = "L: Deserialize<'de>")
)]
pub struct ProbDist<L> {
    entries: Vec<(L, f64)>,
}


/// Unchecked serialized form of [`ProbDist`].
#[derive(Deserialize)]
struct RawProbDist<L> {
    entries: Vec<(L, f64)>,
}


impl<L> TryFrom<RawProbDist<L>> for ProbDist<L> {
    type Error = ClassifierError;

    fn try_from(raw: RawProbDist<L>) -> Result<Self> {
        let entries = raw.entries;
        if entries.is_empty() {
            return Err(ClassifierError::Configuration(
                "a distribution needs at least one label".into()
            ));
        }
        if entries.iter().any(|(_, p)| !(0f64..=1f64).contains(p)) {
            return Err(ClassifierError::Configuration(
                "probabilities must lie in [0, 1]".into()
            ));
        }
        if entries.windows(2).any(|w| w[0].1 < w[1].1) {
            return Err(ClassifierError::Configuration(
                "probabilities must be sorted in descending order".into()
            ));
        }
        let total = entries.iter().map(|(_, p)| p).sum::<f64>();
        if (total - 1f64).abs() > 1e-6 {
            return Err(ClassifierError::Configuration(
                format!("probabilities sum to {total}, not 1")
            ));
        }
        Ok(Self { entries })
    }
}


impl<L> ProbDist<L> {
    /// The most probable label.
    #[inline]
    pub fn top(&self) -> &L {
        &self.entries[0].0
    }


    /// Probability of the most probable label.
    #[inline]
    pub fn top_probability(&self) -> f64 {
        self.entries[0].1
    }


    /// Number of labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Always `false`; kept for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Iterate over `(label, probability)` in ranking order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.entries.iter().map(|(y, p)| (y, *p))
    }


    /// Returns the pairs as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[(L, f64)] {
        &self.entries[..]
    }


    /// Consume `self` and return the most probable label.
    #[inline]
    pub fn into_top(mut self) -> L {
        self.entries.swap_remove(0).0
    }
}


impl<L: PartialEq> ProbDist<L> {
    /// Probability of `label`, `0` if the label is absent.
    #[inline]
    pub fn probability_of(&self, label: &L) -> f64 {
        self.entries.iter()
            .find(|(y, _)| y == label)
            .map(|(_, p)| *p)
            .unwrap_or(0f64)
    }
}


impl<L> IntoIterator for ProbDist<L> {
    type Item = (L, f64);
    type IntoIter = std::vec::IntoIter<(L, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}


impl<L: fmt::Display> fmt::Display for ProbDist<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.entries.iter()
            .map(|(y, p)| format!("({y}, {p:.3})"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{pairs}]")
    }
}
