use crate::DecisionTreeClassifier;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;


/// A struct that builds `DecisionTreeClassifier`.
/// `DecisionTreeBuilder` keeps parameters for constructing
/// `DecisionTreeClassifier`.
///
/// # Example
///
/// ```
/// use probdist::prelude::*;
///
/// let tree: DecisionTreeClassifier<String> = DecisionTreeBuilder::new()
///     .max_depth(3)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    max_depth: Option<usize>,
    interrupt: Option<Arc<AtomicBool>>,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, the maximal depth is derived from the training data
    /// as `max(number of features, number of distinct labels)`,
    /// and the build cannot be interrupted.
    pub fn new() -> Self {
        Self::default()
    }


    /// Fix the maximal depth of the tree
    /// instead of deriving it from the training data.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = Some(depth);

        self
    }


    /// Share a flag that interrupts `train()` once it is set.
    /// The flag is checked before each node is split.
    #[inline]
    pub fn interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }


    /// Build a `DecisionTreeClassifier`.
    /// This method consumes `self`.
    pub fn build<L>(self) -> DecisionTreeClassifier<L> {
        DecisionTreeClassifier::from_components(
            self.max_depth, self.interrupt
        )
    }
}
