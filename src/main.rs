//! Lanai Complete - Main entrypoint.
//!
//! This is the command-line front end for Lanai Complete. It loads
//! configuration, initializes the logging system, builds a trie from the
//! configured vocabulary plus any words given on the command line, and runs
//! the requested command.

use clap::{Parser, Subcommand};
use lanai_complete_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_complete_lib::data_structures::LanaiTrie;
use lanai_complete_lib::error::{LanaiError, LanaiResult};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Command line arguments for Lanai Complete.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Complete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every known word that starts with a prefix
    Complete {
        /// Prefix to complete (may be empty)
        prefix: String,

        /// Word to add to the vocabulary, repeatable
        #[clap(short, long = "word", value_parser)]
        words: Vec<String>,

        /// Print completions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Print the number of nodes in the trie
    Count {
        /// Word to add to the vocabulary, repeatable
        #[clap(short, long = "word", value_parser)]
        words: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured seed words followed by `extra` words.
fn build_trie(config: &LanaiConfig, extra: &[String]) -> LanaiTrie {
    let mut trie = LanaiTrie::with_config(config.trie.clone());
    let summary = trie.insert_words(config.vocabulary.seed_words.iter().chain(extra));

    info!(
        words = trie.word_count(),
        nodes = trie.count_nodes(),
        rejected = summary.rejected.len(),
        "Vocabulary loaded"
    );
    trie
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration; logging falls back to defaults if it fails
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();
    let log_config = loaded
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            LanaiError::from(e).report();
            process::exit(1);
        }
    };

    match args.command {
        Command::Complete {
            prefix,
            words,
            json,
        } => {
            let trie = build_trie(&config, &words);
            let completions = trie.find_words(&prefix);
            info!(prefix = %prefix, completions = completions.len(), "Completed prefix");

            if json {
                println!("{}", serde_json::to_string(&completions)?);
            } else {
                for word in completions {
                    println!("{word}");
                }
            }
            Ok(())
        }
        Command::Count { words } => {
            let trie = build_trie(&config, &words);
            println!("{}", trie.count_nodes());
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
