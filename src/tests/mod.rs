//! Test modules for lexitrie.
//!
//! This module contains crate-internal test suites that cut across modules:
//! - Configuration loading and validation
//! - Error context and reporting
//! - Property-based tests for the word trie and suggestion engine
//!
//! Unit tests for a single component live beside that component.

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{trie_from, vocabulary_strategy, word_strategy, TestFixture};
