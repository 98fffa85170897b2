// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the ordered tree.
//!
//! Nodes live in the owning tree's arena and refer to each other by [`NodeId`].
//! A node records its children in a keyed map for O(1) lookup and, separately,
//! in insertion order so traversals are deterministic.

use std::fmt;
use std::hash::Hash;

use fnv::FnvBuildHasher;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// Index of a node inside an [`OrderedTree`](super::OrderedTree) arena.
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The id of every tree's root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena index of this id.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Insertion-ordered map of child keys to node ids.
#[derive(Debug, Clone)]
struct ChildMap<K> {
    lookup: HashMap<K, NodeId, FnvBuildHasher>,
    order: Vec<NodeId>,
}

impl<K> ChildMap<K> {
    fn new() -> Self {
        Self {
            lookup: HashMap::with_hasher(FnvBuildHasher::default()),
            order: Vec::new(),
        }
    }

    fn ids(&self) -> &[NodeId] {
        &self.order
    }
}

impl<K: Eq + Hash> ChildMap<K> {
    fn get(&self, key: &K) -> Option<NodeId> {
        self.lookup.get(key).copied()
    }

    fn insert(&mut self, key: K, id: NodeId) -> bool {
        match self.lookup.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(id);
                self.order.push(id);
                true
            }
        }
    }
}

/// A node in the ordered tree.
///
/// Each node carries its key, a back-reference to its parent (absent only for the
/// root), its children in insertion order, and a payload owned by whatever
/// structure specializes the tree.
#[derive(Debug, Clone)]
pub struct OrderedTreeNode<K, P> {
    /// Key of this node; unique among its siblings
    key: K,

    /// Parent id, `None` for the root. Never used for ownership
    parent: Option<NodeId>,

    /// Children keyed by their own key
    children: ChildMap<K>,

    /// Per-node state attached by the specialization
    payload: P,
}

impl<K, P> OrderedTreeNode<K, P> {
    pub(crate) fn new(key: K, parent: Option<NodeId>, payload: P) -> Self {
        Self {
            key,
            parent,
            children: ChildMap::new(),
            payload,
        }
    }

    /// Returns the key of this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the parent id, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the payload attached to this node.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Returns the ids of the direct children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        self.children.ids()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.ids().len()
    }

    /// A node is a leaf when it has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.ids().is_empty()
    }
}

impl<K: Eq + Hash, P> OrderedTreeNode<K, P> {
    /// Looks up a direct child by key.
    pub fn child(&self, key: &K) -> Option<NodeId> {
        self.children.get(key)
    }

    /// Checks whether a direct child with this key exists.
    pub fn contains_child(&self, key: &K) -> bool {
        self.children.get(key).is_some()
    }

    /// Records `id` as the child for `key`. Returns `false` and leaves the map
    /// untouched if the key is already taken.
    pub(crate) fn link_child(&mut self, key: K, id: NodeId) -> bool {
        self.children.insert(key, id)
    }
}
