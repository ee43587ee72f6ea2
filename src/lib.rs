//! Lanai Complete Library
//!
//! This library contains the core components of Lanai Complete: the prefix
//! tree used for word completion, the configuration system, and the error
//! types shared with the binary crate. It can also be used as a dependency by
//! other projects.
//!
//! # Architecture
//!
//! Lanai Complete is designed with the following principles in mind:
//! - Strict component boundaries
//! - Synchronous, single-threaded core with no internal locking
//! - Comprehensive error handling and propagation
//! - Iterative traversals that do not depend on call-stack depth

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai Complete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
