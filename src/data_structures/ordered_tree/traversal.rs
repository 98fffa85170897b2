// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Borrowed node views and iterative traversals.
//!
//! Every aggregate (height, node count, leaf collection) is computed from a single
//! explicit-stack pre-order walk, so arbitrarily deep trees never exhaust the call
//! stack.

use std::fmt;
use std::hash::Hash;

use super::node::{NodeId, OrderedTreeNode};
use super::OrderedTree;

/// A read-only view of one node together with the tree that owns it.
pub struct NodeRef<'a, K, P> {
    tree: &'a OrderedTree<K, P>,
    id: NodeId,
}

impl<'a, K, P> NodeRef<'a, K, P> {
    /// `id` must be a valid index into `tree`; callers in this module check it.
    pub(crate) fn new(tree: &'a OrderedTree<K, P>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a OrderedTreeNode<K, P> {
        &self.tree.nodes[self.id.0]
    }

    /// Returns the arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the key of this node.
    pub fn key(&self) -> &'a K {
        self.node().key()
    }

    /// Returns the payload attached to this node.
    pub fn payload(&self) -> &'a P {
        self.node().payload()
    }

    /// Checks whether this node is the tree's root. Compares identity, not keys.
    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// A node is a leaf when it has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }

    /// Returns the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K, P>> {
        self.node()
            .parent()
            .map(|parent| NodeRef::new(self.tree, parent))
    }

    /// Iterates over the direct children in insertion order.
    pub fn children(&self) -> Children<'a, K, P> {
        Children {
            tree: self.tree,
            ids: self.node().children().iter(),
        }
    }

    /// Iterates from this node's parent up to and including the root.
    pub fn ancestors(&self) -> Ancestors<'a, K, P> {
        Ancestors {
            tree: self.tree,
            next: self.node().parent(),
        }
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Keys on the path from just below the root down to this node.
    ///
    /// The root's own key is never part of a path; the root itself yields an
    /// empty path.
    pub fn path(&self) -> Vec<&'a K> {
        if self.is_root() {
            return Vec::new();
        }

        let mut keys: Vec<&'a K> = self
            .ancestors()
            .filter(|ancestor| !ancestor.is_root())
            .map(|ancestor| ancestor.key())
            .collect();
        keys.reverse();
        keys.push(self.key());
        keys
    }

    /// Walks the subtree rooted here in pre-order, children in insertion order.
    ///
    /// Yields `(depth, node)` with depth measured from this node (which is 0).
    pub fn pre_order(&self) -> PreOrder<'a, K, P> {
        PreOrder {
            tree: self.tree,
            stack: vec![(self.id, 0)],
        }
    }

    /// Height of the subtree: 0 for a leaf, otherwise one more than the tallest child.
    pub fn height(&self) -> usize {
        self.pre_order().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Number of nodes in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }

    /// Appends the key of every leaf in the subtree to `into`, in pre-order.
    pub fn collect_leaves(&self, into: &mut Vec<K>)
    where
        K: Clone,
    {
        into.extend(
            self.pre_order()
                .filter(|(_, node)| node.is_leaf())
                .map(|(_, node)| node.key().clone()),
        );
    }
}

impl<'a, K: Eq + Hash, P> NodeRef<'a, K, P> {
    /// Looks up a direct child by key.
    pub fn child(&self, key: &K) -> Option<NodeRef<'a, K, P>> {
        self.node()
            .child(key)
            .map(|child| NodeRef::new(self.tree, child))
    }

    /// Checks whether a direct child with this key exists.
    pub fn contains_child(&self, key: &K) -> bool {
        self.node().contains_child(key)
    }
}

impl<K, P> Clone for NodeRef<'_, K, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P> Copy for NodeRef<'_, K, P> {}

impl<K, P> PartialEq for NodeRef<'_, K, P> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K, P> Eq for NodeRef<'_, K, P> {}

impl<K: fmt::Debug, P: fmt::Debug> fmt::Debug for NodeRef<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("payload", self.payload())
            .finish()
    }
}

/// Iterator over the direct children of a node.
pub struct Children<'a, K, P> {
    tree: &'a OrderedTree<K, P>,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a, K, P> Iterator for Children<'a, K, P> {
    type Item = NodeRef<'a, K, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| NodeRef::new(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

/// Iterator from a node's parent up to the root.
pub struct Ancestors<'a, K, P> {
    tree: &'a OrderedTree<K, P>,
    next: Option<NodeId>,
}

impl<'a, K, P> Iterator for Ancestors<'a, K, P> {
    type Item = NodeRef<'a, K, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = NodeRef::new(self.tree, self.next?);
        self.next = current.node().parent();
        Some(current)
    }
}

/// Explicit-stack pre-order walk over a subtree.
pub struct PreOrder<'a, K, P> {
    tree: &'a OrderedTree<K, P>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, K, P> Iterator for PreOrder<'a, K, P> {
    type Item = (usize, NodeRef<'a, K, P>);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = NodeRef::new(self.tree, id);

        // Reversed so the first-inserted child is popped first
        self.stack.extend(
            node.node()
                .children()
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );

        Some((depth, node))
    }
}
