//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    /// The configuration file has no section with the requested name.
    #[error("Section '{section}' not found in '{}'", path.display())]
    MissingSection { section: String, path: PathBuf },

    /// Figment extraction or merge error (includes TOML parse errors).
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section was found but names neither a server nor a local database.
    #[error("Configuration section '{section}' is not configured (set 'host' or 'path')")]
    NotConfigured { section: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
