//! The decision tree classifier grown by Gini impurity.

/// Defines the builder of `DecisionTreeClassifier`.
pub mod builder;
/// Defines the decision tree classifier.
pub mod dtree;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;
mod split_rule;
mod split;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTreeClassifier;
pub use node::{Node, BranchNode, LeafNode};
pub use split_rule::{Splitter, LR};
