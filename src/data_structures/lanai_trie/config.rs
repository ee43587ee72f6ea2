// Copyright (c) 2025 Lanai Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// How the trie treats insertion of the empty word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyWordPolicy {
    /// Reject the empty word with [`LanaiTrieError::EmptyWord`](super::LanaiTrieError::EmptyWord).
    #[default]
    Reject,

    /// Mark the root terminal, so `""` is reported by an empty-prefix query.
    MarkRoot,
}

/// Configuration for the Lanai Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanaiTrieConfig {
    /// Policy applied when the empty word is inserted
    #[serde(default)]
    pub empty_word: EmptyWordPolicy,

    /// Maximum number of characters per word, unlimited when `None`
    #[serde(default)]
    pub max_word_length: Option<usize>,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - empty_word: `Reject`
    /// - max_word_length: None (unlimited)
    pub fn new() -> Self {
        Self {
            empty_word: EmptyWordPolicy::Reject,
            max_word_length: None,
        }
    }

    /// Set the policy for inserting the empty word.
    pub fn with_empty_word_policy(mut self, policy: EmptyWordPolicy) -> Self {
        self.empty_word = policy;
        self
    }

    /// Limit the number of characters a single word may have.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
