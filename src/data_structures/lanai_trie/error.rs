// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.

use super::node::NodeId;

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// Error when an empty word is inserted under the rejecting policy.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_length} characters")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed number of characters.
        max_length: usize,
    },

    /// Error when a node handle was not issued by this trie.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
