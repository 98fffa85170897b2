//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::{NodeId, TreeError, WordTrieError};
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, LexiError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LexiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let lexi_error = LexiError::Io(io_error);

    let error_string = format!("{lexi_error}");
    assert!(error_string.contains("file not found"));
}

/// Test that component errors convert into the crate error.
#[test]
fn test_component_error_conversion() {
    let trie_error: LexiError = WordTrieError::EmptyArgument { parameter: "word" }.into();
    assert!(matches!(trie_error, LexiError::Trie(_)));
    assert_eq!(
        trie_error.to_string(),
        "Trie error: The parameter 'word' should not be empty"
    );

    let tree_error: LexiError = TreeError::NodeNotFound(NodeId::ROOT).into();
    assert!(matches!(tree_error, LexiError::Tree(_)));

    let config_error: LexiError = ConfigError::ValidationError("bad".to_string()).into();
    assert!(config_error.to_string().contains("bad"));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    assert!(set_error_reporter(reporter.clone()));

    let error = LexiError::Custom("test error".to_string());
    report_error(&ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);

    // A second reporter is refused and the first stays in place
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter::new())));
    report_error(&ErrorContext::new(
        LexiError::Custom("again".to_string()),
        "test_component",
    ));
    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = LexiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(&context);
}
