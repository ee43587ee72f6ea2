//! Configuration module for Lanai Complete.
//!
//! This module provides a configuration system that can load settings from
//! files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::data_structures::lanai_trie::EmptyWordPolicy;
use crate::data_structures::LanaiTrieConfig;
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod trie;
pub mod vocabulary;

pub use vocabulary::VocabularyConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LANAI";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Lanai Complete.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LanaiConfig {
    /// Prefix tree options
    #[serde(default)]
    pub trie: LanaiTrieConfig,

    /// Words preloaded into the trie
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Log configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for LanaiConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.log.validate()?;

        // An empty seed word is only insertable when the root may be marked
        if self.trie.empty_word == EmptyWordPolicy::Reject {
            if let Some(position) = self.vocabulary.empty_seed_position() {
                return Err(ConfigError::ValidationError(format!(
                    "vocabulary.seed_words[{position}] must not be empty"
                )));
            }
        }

        // Seed words must fit the configured limit, otherwise every run would skip them
        if let Some(max_length) = self.trie.max_word_length {
            if let Some(word) = self
                .vocabulary
                .seed_words
                .iter()
                .find(|w| w.chars().count() > max_length)
            {
                return Err(ConfigError::ValueOutOfRange {
                    key: "vocabulary.seed_words".to_string(),
                    message: format!("'{word}' is longer than {max_length} characters"),
                });
            }
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Lanai Complete.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, a file, and environment variables.
    ///
    /// Later sources override earlier ones. The merged result is validated
    /// before it is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(LanaiConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<LanaiConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&LanaiConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(map_external_error)?;

        let lanai_config: LanaiConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        lanai_config.validate()?;

        tracing::debug!(
            path = ?self.config_path,
            seed_words = lanai_config.vocabulary.seed_words.len(),
            "Configuration loaded"
        );
        Ok(lanai_config)
    }
}

fn map_external_error(error: ExternalConfigError) -> ConfigError {
    match error {
        ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
        ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
            "Error parsing config file {}: {cause}",
            uri.as_deref().unwrap_or("<unknown>")
        )),
        other => ConfigError::ParseError(other.to_string()),
    }
}
