// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the ordered tree.

use super::node::NodeId;

/// Errors that can occur in ordered tree operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// The parent already has a direct child under this key.
    #[error("Node already has a child with key '{key}'")]
    DuplicateChild {
        /// Debug rendering of the conflicting key.
        key: String,
    },

    /// The id does not refer to a node of this tree.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}

/// Result type for ordered tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;
