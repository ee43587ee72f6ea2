//! Trie configuration module.
//!
//! Validation rules for the prefix tree options embedded in the application
//! configuration.

use super::{ConfigResult, Validate};
use crate::data_structures::LanaiTrieConfig;
use crate::error::config::ConfigError;

impl Validate for LanaiTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        // A zero limit would reject every non-empty word
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
