//! Error types for the word trie.
//!
//! This module defines the error types that can occur during trie and
//! suggestion operations.

use crate::data_structures::ordered_tree::TreeError;

/// Errors that can occur in word trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum WordTrieError {
    /// Error when an empty word, prefix or input is provided.
    #[error("The parameter '{parameter}' should not be empty")]
    EmptyArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word of {length} characters exceeds maximum length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word, in characters.
        length: usize,
        /// The configured maximum.
        max_length: usize,
    },

    /// Error raised by the underlying tree.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Result type for word trie operations
pub type WordTrieResult<T> = Result<T, WordTrieError>;
