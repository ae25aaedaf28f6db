//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The YAML could not be parsed
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Path that was requested
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration could not be serialised
    #[error("Failed to serialise config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}
