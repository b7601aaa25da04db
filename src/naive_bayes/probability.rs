use serde::{
    Serialize,
    Deserialize,
};

use crate::common::statistics::{
    mean,
    std_dev,
    log_gaussian_density,
};


/// The constant added to every standard deviation at prediction time.
pub const PSEUDOCOUNT: f64 = 1f64;


/// A density over feature vectors.
pub trait Probability {
    /// Logarithm of the density at `x`.
    fn log_probability(&self, x: &[f64]) -> f64;

    /// Density at `x`.
    fn probability(&self, x: &[f64]) -> f64 {
        self.log_probability(x).exp()
    }
}


/// Axis-aligned Gaussian density.
/// Each feature has its own mean and sample standard deviation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Gaussian {
    pub(super) means: Vec<f64>,
    pub(super) std_devs: Vec<f64>,
}


impl Gaussian {
    pub(super) fn new(means: Vec<f64>, std_devs: Vec<f64>) -> Self {
        assert_eq!(means.len(), std_devs.len());
        Self { means, std_devs }
    }


    /// Summarize the given feature vectors, feature by feature.
    /// Needs at least two rows.
    pub(super) fn fit<'a, I>(rows: I, n_feature: usize) -> Self
        where I: Iterator<Item = &'a [f64]>,
    {
        let mut columns = vec![Vec::new(); n_feature];
        for row in rows {
            for (column, &x) in columns.iter_mut().zip(row) {
                column.push(x);
            }
        }

        let means = columns.iter()
            .map(|column| mean(column))
            .collect::<Vec<_>>();
        let std_devs = columns.iter()
            .map(|column| std_dev(column))
            .collect::<Vec<_>>();

        Self::new(means, std_devs)
    }


    /// Per-feature means.
    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means[..]
    }


    /// Per-feature sample standard deviations (without pseudocount).
    #[inline]
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs[..]
    }
}


impl Probability for Gaussian {
    /// Sum of the per-feature log densities,
    /// each with its standard deviation smoothed by [`PSEUDOCOUNT`].
    #[inline]
    fn log_probability(&self, x: &[f64]) -> f64 {
        self.means.iter()
            .zip(&self.std_devs[..])
            .zip(x)
            .map(|((&mean, &sd), &x)| {
                log_gaussian_density(x, mean, sd + PSEUDOCOUNT)
            })
            .sum::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::statistics::gaussian_density;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_fit() {
        let rows = [vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]];
        let g = Gaussian::fit(rows.iter().map(|r| &r[..]), 2);

        assert_eq!(g.means(), &[2.0, 20.0]);
        assert!((g.std_devs()[0] - 1.0).abs() < TEST_TOLERANCE);
        assert!((g.std_devs()[1] - 10.0).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_probability_is_smoothed_product() {
        let g = Gaussian::new(vec![0.0, 5.0], vec![1.0, 0.5]);
        let x = [0.5, 4.0];

        let expected = gaussian_density(0.5, 0.0, 2.0)
            * gaussian_density(4.0, 5.0, 1.5);
        assert!((g.probability(&x) - expected).abs() < TEST_TOLERANCE);
    }
}
