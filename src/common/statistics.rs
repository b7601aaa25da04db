//! Distance and summary statistics over numeric slices.
use core::f64::consts::PI;

use super::prob_dist::LabelTally;


/// Euclidean distance between two feature vectors.
/// Both slices must have the same length.
#[inline]
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}


/// Arithmetic mean. Returns `NaN` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}


/// Sample standard deviation (divides by `n - 1`).
///
/// The result is not finite when `values.len() < 2`;
/// callers are expected to reject such input beforehand.
#[inline]
pub fn std_dev(values: &[f64]) -> f64 {
    let mu = mean(values);
    let n = values.len() as f64;
    let variance = values.iter()
        .map(|x| (x - mu).powi(2))
        .sum::<f64>()
        / (n - 1f64);
    variance.sqrt()
}


/// Density of `N(mean, std_dev^2)` at `x`.
#[inline]
pub fn gaussian_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    log_gaussian_density(x, mean, std_dev).exp()
}


/// Logarithm of [`gaussian_density`].
#[inline]
pub fn log_gaussian_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    - 0.5 * z * z - std_dev.ln() - 0.5 * (2f64 * PI).ln()
}


/// Gini impurity of a single group of labels:
/// `1 - Σ_label p(label)^2`.
/// An empty group has impurity `0`.
pub fn gini_impurity<'a, L, I>(labels: I) -> f64
    where L: PartialEq + Clone + 'a,
          I: IntoIterator<Item = &'a L>,
{
    let mut tally = LabelTally::new();
    labels.into_iter().for_each(|y| tally.add(y, 1f64));

    let total = tally.total();
    if total <= 0f64 { return 0f64; }

    let correct = tally.iter()
        .map(|(_, w)| (w / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


/// Gini impurity of a partition,
/// each group weighted by its share of the instances:
/// `Σ_group gini(group) * |group| / Σ|group|`.
pub fn weighted_gini_impurity<L>(groups: &[&[&L]]) -> f64
    where L: PartialEq + Clone,
{
    let total = groups.iter()
        .map(|g| g.len())
        .sum::<usize>() as f64;
    if total <= 0f64 { return 0f64; }

    groups.iter()
        .filter(|g| !g.is_empty())
        .map(|g| {
            let share = g.len() as f64 / total;
            gini_impurity(g.iter().copied()) * share
        })
        .sum::<f64>()
}
