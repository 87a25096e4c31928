//! Sibling-merge (`+`) and replication (`*`) operators.
//!
//! `a + b` yields a [`Container`] holding `a` then `b`. When one side is
//! already a container the other side is absorbed into it instead, so
//! chained `+` never nests single-purpose wrappers: `p + p + p` is one
//! container of three paragraphs, not a container of containers.
//!
//! `node * n` yields a container of `n` independent deep copies. Copies
//! never alias: mutating one replica leaves the others untouched.

use std::ops::{Add, Mul};

use crate::node::{Comment, Container, Element, Node, Text};

/// Merges two nodes into a single flat container.
fn merge(left: Node, right: Node) -> Container {
    match (left, right) {
        (Node::Container(mut left), Node::Container(right)) => {
            left.nodes_mut().extend(right.into_nodes());
            left
        }
        (Node::Container(mut left), right) => {
            left.push(right);
            left
        }
        (left, Node::Container(mut right)) => {
            right.nodes_mut().insert(0, left);
            right
        }
        (left, right) => Container::from_nodes(vec![left, right]),
    }
}

/// Replicates a node into a container of `count` deep copies.
fn replicate(node: Node, count: usize) -> Container {
    assert!(count > 0, "replication count must be at least 1");
    let mut nodes = Vec::with_capacity(count);
    for _ in 1..count {
        nodes.push(node.clone());
    }
    nodes.push(node);
    Container::from_nodes(nodes)
}

macro_rules! impl_node_operators {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<R: Into<Node>> Add<R> for $ty {
                type Output = Container;

                /// Merges both sides into a flat [`Container`].
                fn add(self, rhs: R) -> Container {
                    merge(self.into(), rhs.into())
                }
            }

            impl Mul<usize> for $ty {
                type Output = Container;

                /// Replicates this node into a [`Container`] of `rhs`
                /// independent deep copies.
                ///
                /// # Panics
                ///
                /// Panics when `rhs` is zero.
                /// [`Node::repeat`] is the non-panicking form.
                fn mul(self, rhs: usize) -> Container {
                    replicate(self.into(), rhs)
                }
            }
        )+
    };
}

impl_node_operators!(Node, Element, Text, Comment, Container);
