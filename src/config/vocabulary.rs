//! Vocabulary configuration module.
//!
//! This module defines the words preloaded into the trie before any
//! command-line words are added.

use serde::{Deserialize, Serialize};

/// Vocabulary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Words inserted into every trie built from this configuration
    #[serde(default)]
    pub seed_words: Vec<String>,
}

impl VocabularyConfig {
    /// Position of the first empty seed word, if any.
    pub fn empty_seed_position(&self) -> Option<usize> {
        self.seed_words.iter().position(|w| w.is_empty())
    }
}
