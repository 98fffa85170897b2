//! Per-node state for the word trie.
//!
//! The trie stores its nodes in an [`OrderedTree`] keyed by `char`; this module
//! provides the payload each node carries and the helpers that turn node paths back
//! into words.

use crate::data_structures::ordered_tree::{NodeRef, OrderedTree};

/// Payload attached to every trie node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieMark {
    /// Whether this node represents the end of a stored word
    is_terminal: bool,
}

impl TrieMark {
    /// Returns `true` if a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn mark_terminal(&mut self) {
        self.is_terminal = true;
    }
}

/// The tree type backing a word trie.
pub type TrieTree = OrderedTree<char, TrieMark>;

/// A borrowed view of one trie node.
pub type TrieNodeRef<'a> = NodeRef<'a, char, TrieMark>;

/// Rebuilds the word spelled by the path from the root to `node`.
pub(crate) fn word_at(node: TrieNodeRef<'_>) -> String {
    node.path().into_iter().collect()
}

/// Collects every stored word in the subtree rooted at `start`, `start` included.
///
/// Words are complete paths from the root, not fragments relative to `start`.
/// Order is pre-order with children in insertion order, so a word precedes the
/// longer words that extend it.
pub(crate) fn completions(start: TrieNodeRef<'_>) -> Vec<String> {
    let mut words = Vec::new();
    let mut path: Vec<char> = start.path().into_iter().copied().collect();
    let base = path.len();

    for (depth, node) in start.pre_order() {
        if depth > 0 {
            path.truncate(base + depth - 1);
            path.push(*node.key());
        }

        if node.payload().is_terminal() && !path.is_empty() {
            words.push(path.iter().collect());
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::ordered_tree::NodeId;

    fn mark(tree: &mut TrieTree, id: NodeId) {
        tree.payload_mut(id).unwrap().mark_terminal();
    }

    #[test]
    fn test_mark_defaults_to_non_terminal() {
        let mut mark = TrieMark::default();
        assert!(!mark.is_terminal());

        mark.mark_terminal();
        assert!(mark.is_terminal());
    }

    #[test]
    fn test_word_at() {
        let mut tree = TrieTree::new('*');
        let h = tree.add_child(NodeId::ROOT, 'h').unwrap();
        let i = tree.add_child(h, 'i').unwrap();

        assert_eq!(word_at(tree.node(i).unwrap()), "hi");
        assert_eq!(word_at(tree.root()), "");
    }

    #[test]
    fn test_completions_rebuild_full_words() {
        // h-e-y and h-e-l-p, with "he" itself terminal
        let mut tree = TrieTree::new('*');
        let h = tree.add_child(NodeId::ROOT, 'h').unwrap();
        let e = tree.add_child(h, 'e').unwrap();
        let y = tree.add_child(e, 'y').unwrap();
        let l = tree.add_child(e, 'l').unwrap();
        let p = tree.add_child(l, 'p').unwrap();
        mark(&mut tree, e);
        mark(&mut tree, y);
        mark(&mut tree, p);

        assert_eq!(completions(tree.root()), vec!["he", "hey", "help"]);
        assert_eq!(completions(tree.node(l).unwrap()), vec!["help"]);
        assert_eq!(completions(tree.node(e).unwrap()), vec!["he", "hey", "help"]);
    }

    #[test]
    fn test_completions_skip_unmarked_nodes() {
        let mut tree = TrieTree::new('*');
        let a = tree.add_child(NodeId::ROOT, 'a').unwrap();
        tree.add_child(a, 'b').unwrap();

        assert!(completions(tree.root()).is_empty());
    }
}
