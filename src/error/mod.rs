//! Error module for Lanai Complete.
//!
//! This module provides the error types shared by the library and the binary,
//! with explicit error enums, `#[from]` conversions for propagation with `?`,
//! and messages that carry enough context to act on.

use thiserror::Error;

use crate::data_structures::LanaiTrieError;

pub mod config;

/// Result type alias used throughout Lanai Complete.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for Lanai Complete.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the prefix tree.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl LanaiError {
    /// Name of the component the error originated from, used as a log field.
    pub fn component(&self) -> &'static str {
        match self {
            LanaiError::Config(_) => "config",
            LanaiError::Trie(_) => "trie",
            LanaiError::Io(_) => "io",
            LanaiError::Serialization(_) => "serialization",
            LanaiError::Custom(_) => "custom",
        }
    }

    /// Logs the error through `tracing`.
    pub fn report(&self) {
        tracing::error!(error = %self, component = self.component(), "Error reported");
    }
}
