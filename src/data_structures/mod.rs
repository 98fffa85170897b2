//! Data structures for lexitrie.
//!
//! This module contains the tree structures behind the vocabulary store:
//! - `ordered_tree`: a generic tree with keyed, insertion-ordered children and
//!   parent back-references, stored in an arena
//! - `word_trie`: the character-indexed prefix tree built on it
//! - `suggestion`: the fallback climb that answers misspelled input
//!
//! All traversals are iterative and no unsafe code is used.

pub mod ordered_tree;
pub mod suggestion;
pub mod word_trie;

// Re-export common data structures
pub use ordered_tree::{NodeId, NodeRef, OrderedTree, TreeError, TreeResult};
pub use suggestion::SuggestionEngine;
pub use word_trie::{WordTrie, WordTrieConfig, WordTrieError, WordTrieResult};
