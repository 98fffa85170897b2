//! Lexitrie Library
//!
//! This library contains the core components of lexitrie: a generic ordered
//! tree, a word trie built on it, the suggestion engine, and the dictionary
//! loader and configuration used by the `lexitrie` binary. The library is
//! designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::ordered_tree`] stores nodes in an arena and addresses
//!   them by [`data_structures::NodeId`]; children keep insertion order.
//! - [`data_structures::word_trie`] keys nodes by `char` and marks the nodes
//!   where words end.
//! - [`data_structures::suggestion`] answers "did you mean" queries against a
//!   borrowed trie.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for lexitrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
