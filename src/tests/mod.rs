//! Test modules for Lanai Complete.
//!
//! This module contains shared testing infrastructure, including:
//! - Unit tests for configuration and error handling
//! - Proptest strategies reused by the trie property tests
//! - Test fixtures and utilities


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{vocabulary_strategy, word_strategy, TestFixture};
