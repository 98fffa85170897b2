// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suggestion engine for misspelled or unrecognized input.
//!
//! The engine follows the input down a [`WordTrie`] as far as it matches, then
//! offers the stored words below the deepest node it reached. If that node has
//! nothing to offer it climbs towards the root one parent at a time, but it never
//! answers from the root itself: an input that shares no prefix with the
//! vocabulary gets no suggestions rather than the whole vocabulary.
//!
//! # Example
//!
//! ```
//! use lexitrie_lib::data_structures::suggestion::SuggestionEngine;
//! use lexitrie_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.add("helloworld").unwrap();
//! trie.add("hello").unwrap();
//! trie.add("hey").unwrap();
//!
//! let engine = SuggestionEngine::new(&trie);
//! assert_eq!(engine.suggest("helloz").unwrap(), vec!["hello", "helloworld"]);
//! assert!(engine.suggest("xyz").unwrap().is_empty());
//! ```

use tracing::debug;

use crate::data_structures::word_trie::{
    completions, word_at, TrieNodeRef, WordTrie, WordTrieError, WordTrieResult,
};

/// Produces completions for input that may not be a stored word or prefix.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    trie: &'a WordTrie,
}

impl<'a> SuggestionEngine<'a> {
    /// Creates an engine answering from `trie`.
    pub fn new(trie: &'a WordTrie) -> Self {
        Self { trie }
    }

    /// Returns the most specific completions reachable from the matched part of `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - The possibly misspelled word. Must not be empty.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Completions in depth-first, insertion order. Empty when
    ///   not even the first character of `input` matches.
    /// * `Err(WordTrieError)` - `EmptyArgument` if `input` is empty.
    pub fn suggest(&self, input: &str) -> WordTrieResult<Vec<String>> {
        if input.is_empty() {
            return Err(WordTrieError::EmptyArgument { parameter: "input" });
        }

        let start = self.trie.walk(input).node();
        if start.is_root() {
            debug!(input, "Input shares no prefix with the vocabulary");
            return Ok(Vec::new());
        }

        Ok(climb(start))
    }
}

/// Collects completions from `start`, moving to the parent while none are found.
///
/// Returns empty once the climb reaches the root.
fn climb(start: TrieNodeRef<'_>) -> Vec<String> {
    let mut current = Some(start);

    while let Some(node) = current.filter(|node| !node.is_root()) {
        let found = completions(node);
        if !found.is_empty() {
            debug!(
                anchor = %word_at(node),
                count = found.len(),
                "Found suggestions"
            );
            return found;
        }

        debug!(anchor = %word_at(node), "No completions below node, climbing");
        current = node.parent();
    }

    Vec::new()
}
