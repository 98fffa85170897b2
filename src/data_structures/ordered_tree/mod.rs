// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered tree.
//!
//! A generic tree whose nodes own uniquely-keyed children kept in insertion order,
//! each node holding a non-owning back-reference to its parent. The tree owns all of
//! its nodes in an arena; nodes refer to each other by [`NodeId`], so there are no
//! reference cycles and dropping the tree drops every node.
//!
//! Structures built on top of the tree attach their own per-node state through the
//! payload type parameter `P` rather than through a custom node type.
//!
//! # Example
//!
//! ```
//! use lexitrie_lib::data_structures::ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<&str> = OrderedTree::new("root");
//! let root = tree.root().id();
//! let h = tree.add_child(root, "H").unwrap();
//! tree.add_child(h, "E").unwrap();
//! tree.add_child(root, "W").unwrap();
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.leaf_keys(), vec!["E", "W"]);
//! ```

mod error;
mod node;
mod traversal;

use std::fmt;
use std::hash::Hash;

pub use error::{TreeError, TreeResult};
pub use node::{NodeId, OrderedTreeNode};
pub use traversal::{Ancestors, Children, NodeRef, PreOrder};

/// A tree of keyed, insertion-ordered nodes with parent back-references.
///
/// The root always exists and always has id [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct OrderedTree<K, P = ()> {
    /// Arena of nodes; index 0 is the root
    nodes: Vec<OrderedTreeNode<K, P>>,
}

impl<K, P: Default> OrderedTree<K, P> {
    /// Creates a tree holding only a root node with the given key.
    pub fn new(root_key: K) -> Self {
        Self {
            nodes: vec![OrderedTreeNode::new(root_key, None, P::default())],
        }
    }
}

impl<K, P> OrderedTree<K, P> {
    /// Returns the root node.
    pub fn root(&self) -> NodeRef<'_, K, P> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Returns a view of the node with the given id.
    ///
    /// # Errors
    ///
    /// * `TreeError::NodeNotFound` - If the id does not belong to this tree.
    pub fn node(&self, id: NodeId) -> TreeResult<NodeRef<'_, K, P>> {
        self.slot(id)?;
        Ok(NodeRef::new(self, id))
    }

    /// Returns mutable access to a node's payload.
    ///
    /// # Errors
    ///
    /// * `TreeError::NodeNotFound` - If the id does not belong to this tree.
    pub fn payload_mut(&mut self, id: NodeId) -> TreeResult<&mut P> {
        self.nodes
            .get_mut(id.0)
            .map(OrderedTreeNode::payload_mut)
            .ok_or(TreeError::NodeNotFound(id))
    }

    /// Height of the tree. A tree holding only its root has height 0.
    pub fn height(&self) -> usize {
        self.root().height()
    }

    /// Number of nodes in the tree, root included. Never less than 1.
    pub fn node_count(&self) -> usize {
        self.root().node_count()
    }

    /// Keys of every leaf, in pre-order with children in insertion order.
    pub fn leaf_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        self.root().collect_leaves(&mut keys);
        keys
    }

    fn slot(&self, id: NodeId) -> TreeResult<&OrderedTreeNode<K, P>> {
        self.nodes.get(id.0).ok_or(TreeError::NodeNotFound(id))
    }
}

impl<K, P> OrderedTree<K, P>
where
    K: Eq + Hash + Clone,
    P: Default,
{
    /// Adds a new child under `parent`.
    ///
    /// # Arguments
    ///
    /// * `parent` - Id of the node that will own the new child.
    /// * `key` - Key of the new child; must not already be used by a sibling.
    ///
    /// # Returns
    ///
    /// * `Ok(NodeId)` - The id of the new child.
    /// * `Err(TreeError)` - `DuplicateChild` if the key is taken, `NodeNotFound` if
    ///   `parent` is unknown.
    pub fn add_child(&mut self, parent: NodeId, key: K) -> TreeResult<NodeId>
    where
        K: fmt::Debug,
    {
        if self.slot(parent)?.contains_child(&key) {
            return Err(TreeError::DuplicateChild {
                key: format!("{key:?}"),
            });
        }

        Ok(self.push_child(parent, key))
    }

    /// Returns the child of `parent` keyed by `key`, creating it if it is missing.
    ///
    /// Unlike [`add_child`](Self::add_child) this never fails on an existing key, so
    /// calling it repeatedly with the same arguments always yields the same node.
    ///
    /// # Errors
    ///
    /// * `TreeError::NodeNotFound` - If `parent` is unknown.
    pub fn child_or_insert(&mut self, parent: NodeId, key: K) -> TreeResult<NodeId> {
        if let Some(existing) = self.slot(parent)?.child(&key) {
            return Ok(existing);
        }

        Ok(self.push_child(parent, key))
    }

    /// Drops every node except the root, which is reset to a default payload.
    pub fn clear(&mut self) {
        let root_key = self.nodes[NodeId::ROOT.0].key().clone();
        self.nodes.clear();
        self.nodes
            .push(OrderedTreeNode::new(root_key, None, P::default()));
    }

    /// `parent` must be valid and must not already have a child for `key`.
    fn push_child(&mut self, parent: NodeId, key: K) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(OrderedTreeNode::new(key.clone(), Some(parent), P::default()));
        self.nodes[parent.0].link_child(key, id);
        id
    }
}
