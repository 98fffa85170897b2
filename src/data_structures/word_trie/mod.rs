//! Word Trie Implementation
//!
//! This module provides a character-indexed prefix tree for storing a vocabulary
//! and answering membership, prefix and suggestion queries. Each node below the
//! root is keyed by a single `char`; a node is terminal when a stored word ends
//! there. Words that share a prefix share that prefix's nodes.
//!
//! # Example
//!
//! ```
//! use lexitrie_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.add("helloworld").unwrap();
//! trie.add("hello").unwrap();
//! trie.add("hey").unwrap();
//!
//! assert!(trie.contains("hello"));
//! assert!(!trie.contains("hell"));
//! assert_eq!(trie.words_with_prefix("hell0").unwrap(), vec!["hello", "helloworld"]);
//! ```

mod config;
mod error;
mod node;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::data_structures::ordered_tree::NodeId;
use crate::data_structures::suggestion::SuggestionEngine;

pub use config::{WordTrieConfig, DEFAULT_MAX_WORD_LENGTH, DEFAULT_ROOT_KEY};
pub use error::{WordTrieError, WordTrieResult};
pub use node::{TrieMark, TrieNodeRef, TrieTree};

pub(crate) use node::{completions, word_at};

/// Outcome of walking an input down from the root, one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk<'a> {
    /// Every character matched; holds the node of the last one.
    Matched(TrieNodeRef<'a>),
    /// The walk hit a character with no matching child; holds the deepest node reached.
    Stopped(TrieNodeRef<'a>),
}

impl<'a> Walk<'a> {
    /// The deepest node reached, whether or not the whole input matched.
    pub(crate) fn node(&self) -> TrieNodeRef<'a> {
        match self {
            Walk::Matched(node) | Walk::Stopped(node) => *node,
        }
    }
}

/// A prefix tree of words.
///
/// Key features:
/// * O(length) insertion and lookup
/// * Shared storage for common prefixes
/// * Prefix completion that tolerates an unmatched tail
/// * Deterministic, insertion-ordered results
#[derive(Debug, Clone)]
pub struct WordTrie {
    /// Node storage; the root carries the sentinel key
    tree: TrieTree,

    /// Configuration options
    config: WordTrieConfig,

    /// Number of distinct words stored
    word_count: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(WordTrieConfig::default())
    }

    /// Creates a new empty `WordTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: WordTrieConfig) -> Self {
        Self {
            tree: TrieTree::new(config.root_key()),
            config,
            word_count: 0,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &WordTrieConfig {
        &self.config
    }

    /// Read-only access to the underlying tree for structural queries.
    pub fn tree(&self) -> &TrieTree {
        &self.tree
    }

    /// Adds a word to the trie.
    ///
    /// Existing nodes along the word's path are reused, missing ones are created,
    /// and the node of the last character is marked terminal. Adding a word that is
    /// already stored changes nothing.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add. Must not be empty.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was not stored before.
    /// * `Err(WordTrieError)` - `EmptyArgument` or `WordTooLong`; the trie is left
    ///   untouched in both cases.
    pub fn add(&mut self, word: &str) -> WordTrieResult<bool> {
        if word.is_empty() {
            return Err(WordTrieError::EmptyArgument { parameter: "word" });
        }

        let word = self.normalize(word);
        let length = word.chars().count();
        if length > self.config.max_word_length() {
            return Err(WordTrieError::WordTooLong {
                length,
                max_length: self.config.max_word_length(),
            });
        }

        let mut node = NodeId::ROOT;
        for c in word.chars() {
            node = self.tree.child_or_insert(node, c)?;
        }

        let mark = self.tree.payload_mut(node)?;
        let is_new = !mark.is_terminal();
        mark.mark_terminal();

        if is_new {
            self.word_count += 1;
        }
        trace!(word = %word, is_new, "Added word");

        Ok(is_new)
    }

    /// Checks whether a word is stored.
    ///
    /// A stored word that is only a prefix of the input, or an input that is only
    /// a prefix of stored words, does not count. Empty input is never contained.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        match self.walk(word) {
            Walk::Matched(node) => node.payload().is_terminal(),
            Walk::Stopped(_) => false,
        }
    }

    /// Returns every stored word, in pre-order with children in insertion order.
    pub fn words(&self) -> Vec<String> {
        completions(self.tree.root())
    }

    /// Returns the stored words that extend the longest matched part of `prefix`.
    ///
    /// The walk follows `prefix` as far as the trie allows and stops, without
    /// failing, at the first unmatched character; every word below the node reached
    /// is returned. When not even the first character matches, that node is the root
    /// and every stored word is returned.
    ///
    /// # Errors
    ///
    /// * `WordTrieError::EmptyArgument` - If `prefix` is empty.
    pub fn words_with_prefix(&self, prefix: &str) -> WordTrieResult<Vec<String>> {
        if prefix.is_empty() {
            return Err(WordTrieError::EmptyArgument { parameter: "prefix" });
        }

        let walk = self.walk(prefix);
        if let Walk::Stopped(node) = walk {
            debug!(
                prefix,
                matched = node.depth(),
                "Prefix walk stopped before the end of the prefix"
            );
        }

        Ok(completions(walk.node()))
    }

    /// Returns suggestions for a possibly misspelled input.
    ///
    /// Shorthand for [`SuggestionEngine::suggest`] on this trie.
    pub fn suggest(&self, input: &str) -> WordTrieResult<Vec<String>> {
        SuggestionEngine::new(self).suggest(input)
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Height of the underlying tree; 0 for an empty trie.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Number of nodes in the underlying tree, root included.
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Removes every word, leaving only the root.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.word_count = 0;
    }

    /// Walks `input` down from the root until it is consumed or a character has no
    /// matching child.
    pub(crate) fn walk(&self, input: &str) -> Walk<'_> {
        let input = self.normalize(input);
        let mut node = self.tree.root();

        for c in input.chars() {
            match node.child(&c) {
                Some(child) => node = child,
                None => return Walk::Stopped(node),
            }
        }

        Walk::Matched(node)
    }

    fn normalize<'w>(&self, text: &'w str) -> Cow<'w, str> {
        if self.config.case_sensitive() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
