//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::ProbDist;
use super::split_rule::*;

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node<L> {
    /// A node that have two childrens.
    Branch(BranchNode<L>),


    /// A node that have no child.
    Leaf(LeafNode<L>),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode<L> {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node<L>>,
    pub(super) right: Box<Node<L>>,
}


impl<L> BranchNode<L> {
    /// The splitting rule of this node.
    #[inline]
    pub fn rule(&self) -> &Splitter {
        &self.rule
    }


    /// The subtree for feature values below the threshold.
    #[inline]
    pub fn left(&self) -> &Node<L> {
        &self.left
    }


    /// The subtree for feature values at or above the threshold.
    #[inline]
    pub fn right(&self) -> &Node<L> {
        &self.right
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode<L> {
    pub(super) dist: ProbDist<L>,
}


impl<L> LeafNode<L> {
    /// The label distribution of the training instances
    /// that reached this leaf.
    #[inline]
    pub fn dist(&self) -> &ProbDist<L> {
        &self.dist
    }
}


impl<L> Node<L> {
    /// Construct a branch node from the arguments.
    #[inline]
    pub(super) fn branch(rule: Splitter, left: Self, right: Self) -> Self {
        Node::Branch(BranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Construct a leaf node from the given distribution.
    #[inline]
    pub(super) fn leaf(dist: ProbDist<L>) -> Self {
        Node::Leaf(LeafNode { dist })
    }


    /// Walk down the tree with `x` and return the distribution
    /// of the leaf it reaches.
    #[inline]
    pub fn prob_dist(&self, x: &[f64]) -> &ProbDist<L> {
        let mut node = self;
        loop {
            match node {
                Node::Branch(b) => {
                    node = match b.rule.split(x) {
                        LR::Left => &*b.left,
                        LR::Right => &*b.right,
                    };
                },
                Node::Leaf(l) => { return &l.dist; },
            }
        }
    }


    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.leaves() + b.right.leaves(),
            Node::Leaf(_) => 1,
        }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}


impl<L: fmt::Display> Node<L> {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize)
        -> fmt::Result
    {
        let indent = " ".repeat(4 * depth);
        match self {
            Node::Branch(b) => {
                writeln!(
                    f, "{indent}Features[{feat}] < {thr:.3} ?",
                    feat = b.rule.feature,
                    thr = b.rule.threshold,
                )?;
                b.left.fmt_indented(f, depth + 1)?;
                b.right.fmt_indented(f, depth + 1)
            },
            Node::Leaf(l) => writeln!(f, "{indent}{}", l.dist),
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"Features[{feat}] < {thr:.2} ?\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = l.dist
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl<L: fmt::Display> fmt::Display for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
