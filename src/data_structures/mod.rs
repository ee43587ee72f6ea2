//! Data structures for Lanai Complete.
//!
//! This module contains the prefix tree that backs word completion.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No recursion on paths whose depth depends on input
//! - Owned storage without reference cycles

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{InsertSummary, LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
