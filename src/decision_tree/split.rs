//! Split selection by Gini impurity and the recursive tree growth.
use tracing::trace;

use crate::{Instance, LabelTally, ProbDist};
use crate::common::statistics::weighted_gini_impurity;
use crate::error::{ClassifierError, Result};

use super::node::Node;
use super::split_rule::Splitter;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};


/// The best split of a group, with the two groups it produces.
pub(super) struct Split<'a, L> {
    pub(super) rule: Splitter,
    pub(super) left: Vec<&'a Instance<L>>,
    pub(super) right: Vec<&'a Instance<L>>,
}


/// Weighted Gini impurity of a two-way partition.
fn split_impurity<L>(left: &[&Instance<L>], right: &[&Instance<L>]) -> f64
    where L: PartialEq + Clone,
{
    let left = left.iter()
        .filter_map(|x| x.label())
        .collect::<Vec<_>>();
    let right = right.iter()
        .filter_map(|x| x.label())
        .collect::<Vec<_>>();
    weighted_gini_impurity(&[&left[..], &right[..]])
}


/// Returns the split that minimizes the weighted Gini impurity.
///
/// Every feature value of every instance is tried as a threshold,
/// feature by feature, instance by instance.
/// A candidate replaces the current best only if its impurity is
/// strictly lower, so the first minimal candidate wins.
/// Returns `None` if `instances` is empty.
pub(super) fn split_node<'a, L>(instances: &[&'a Instance<L>])
    -> Option<Split<'a, L>>
    where L: PartialEq + Clone,
{
    let n_feature = instances.first()?.n_features();

    let mut lowest_impurity = 1f64;
    let mut best = None;
    for feature in 0..n_feature {
        for instance in instances {
            let rule = Splitter::new(feature, instance.feature(feature));
            let (left, right) = rule.partition(instances);
            let impurity = split_impurity(&left, &right);

            if impurity < lowest_impurity {
                lowest_impurity = impurity;
                best = Some(Split { rule, left, right });
            }
        }
    }
    best
}


/// Label frequencies of `group`, normalized and sorted.
pub(super) fn terminal_dist<'a, L, I>(group: I) -> Result<ProbDist<L>>
    where L: PartialEq + Clone + 'a,
          I: IntoIterator<Item = &'a Instance<L>>,
{
    let mut counts = LabelTally::new();
    group.into_iter()
        .filter_map(|x| x.label())
        .for_each(|y| counts.add(y, 1f64));
    counts.normalize()
}


/// Grows a tree from a split, depth first.
pub(super) struct TreeGrower {
    pub(super) max_depth: usize,
    pub(super) interrupt: Option<Arc<AtomicBool>>,
}


impl TreeGrower {
    fn check_interrupt(&self) -> Result<()> {
        match self.interrupt {
            Some(ref flag) if flag.load(Ordering::Relaxed) => {
                Err(ClassifierError::Interrupted)
            },
            _ => Ok(()),
        }
    }


    /// Builds the whole tree for `instances`.
    pub(super) fn grow<L>(&self, instances: &[&Instance<L>]) -> Result<Node<L>>
        where L: PartialEq + Clone,
    {
        self.check_interrupt()?;
        match split_node(instances) {
            Some(split) => self.grow_split(split, 1),
            None => terminal_dist(instances.iter().copied()).map(Node::leaf),
        }
    }


    /// Turns `split` into a branch node at `depth`,
    /// whose children are either leaves or split further.
    fn grow_split<L>(&self, split: Split<'_, L>, depth: usize)
        -> Result<Node<L>>
        where L: PartialEq + Clone,
    {
        self.check_interrupt()?;
        let Split { rule, left, right } = split;
        trace!(
            depth,
            feature = rule.feature,
            threshold = rule.threshold,
            n_left = left.len(),
            n_right = right.len(),
            "split",
        );

        // The split separates nothing:
        // both branches predict the distribution of the whole group.
        if left.is_empty() || right.is_empty() {
            let dist = terminal_dist(left.iter().chain(right.iter()).copied())?;
            return Ok(Node::branch(rule, Node::leaf(dist.clone()), Node::leaf(dist)));
        }

        if depth >= self.max_depth {
            let l = Node::leaf(terminal_dist(left.iter().copied())?);
            let r = Node::leaf(terminal_dist(right.iter().copied())?);
            return Ok(Node::branch(rule, l, r));
        }

        let l = self.grow_group(&left, depth + 1)?;
        let r = self.grow_group(&right, depth + 1)?;
        Ok(Node::branch(rule, l, r))
    }


    fn grow_group<L>(&self, group: &[&Instance<L>], depth: usize)
        -> Result<Node<L>>
        where L: PartialEq + Clone,
    {
        match split_node(group) {
            Some(split) => self.grow_split(split, depth),
            None => terminal_dist(group.iter().copied()).map(Node::leaf),
        }
    }
}
