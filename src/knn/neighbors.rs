use serde::{
    Serialize,
    Deserialize,
};

use std::fmt;


/// Which training instances take part in the vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighbors {
    /// Every training instance is a neighbor.
    /// Each label is weighted by the inverse of the summed distance
    /// from the test instance to that label's training instances.
    All,

    /// Only the `k` closest training instances are neighbors.
    /// Each of them casts one vote for its label.
    Nearest(usize),
}


impl Default for Neighbors {
    fn default() -> Self {
        Self::All
    }
}


impl fmt::Display for Neighbors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All (inverse summed distance)"),
            Self::Nearest(k) => write!(f, "Nearest {k} (majority vote)"),
        }
    }
}


/// kNN configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KNNConfig {
    /// Neighbor selection mode.
    pub neighbors: Neighbors,
}
