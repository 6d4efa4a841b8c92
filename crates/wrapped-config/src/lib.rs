//! # wrapped-config
//!
//! Connection configuration loading for Music Wrapped using figment.
//!
//! A configuration file holds one or more TOML sections; the dashboard reads a
//! single section (default `[postgresql]` in `database.toml`).
//!
//! Sources (in priority order, highest wins):
//! 1. Environment variables (`WRAPPED_*` prefix, `__` as separator)
//! 2. The requested section of the configuration file
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WRAPPED_POSTGRESQL__PASSWORD` -> `postgresql.password`, so any
//! option of any section can be overridden without editing the file.
//!
//! # Usage
//!
//! ```no_run
//! use wrapped_config::{ConnectionConfig, DEFAULT_SECTION};
//!
//! let path = wrapped_config::resolve_config_path(None);
//! let config = wrapped_config::load_cached(&path, DEFAULT_SECTION).expect("config");
//! if config.is_remote() {
//!     println!("server: {}", config.host);
//! }
//! ```

mod connection;
mod error;

pub use connection::ConnectionConfig;
pub use error::ConfigError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Dict,
};

/// Configuration file read when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "database.toml";

/// Section read when none is given.
pub const DEFAULT_SECTION: &str = "postgresql";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "WRAPPED_";

type CacheKey = (PathBuf, String);

static CONFIG_CACHE: OnceLock<Mutex<HashMap<CacheKey, ConnectionConfig>>> = OnceLock::new();

impl ConnectionConfig {
    /// Load `section` from the TOML file at `path`, with environment overrides.
    ///
    /// Does NOT call `dotenvy` -- use [`ConnectionConfig::load_with_dotenv`] if
    /// you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if the file does not exist,
    /// [`ConfigError::Figment`] if it cannot be parsed, and
    /// [`ConfigError::MissingSection`] if it has no such section.
    pub fn load(path: &Path, section: &str) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), section, "loading connection config");

        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let sections: Dict = Figment::from(Toml::file(path)).extract()?;
        if !sections.contains_key(section) {
            return Err(ConfigError::MissingSection {
                section: section.to_string(),
                path: path.to_path_buf(),
            });
        }

        let config: Self = Self::figment(path, section).extract_inner(section)?;
        tracing::debug!(
            section,
            host = %config.host,
            database = %config.database,
            local = config.is_local(),
            "connection config loaded"
        );
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load `.env` from the current directory before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`ConnectionConfig::load`].
    pub fn load_with_dotenv(path: &Path, section: &str) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(path, section)
    }

    /// Build the figment provider chain for one section.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(path: &Path, section: &str) -> Figment {
        Figment::from(Serialized::default(section, Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

/// Load a section once per process.
///
/// The first successful load for a `(path, section)` pair is kept for the rest
/// of the process; failures are not remembered, so a fixed file can be picked
/// up by retrying.
///
/// # Errors
///
/// Same as [`ConnectionConfig::load_with_dotenv`].
pub fn load_cached(path: &Path, section: &str) -> Result<ConnectionConfig, ConfigError> {
    let cache = CONFIG_CACHE.get_or_init(Mutex::default);
    let key = (path.to_path_buf(), section.to_string());

    if let Some(config) = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(config.clone());
    }

    let config = ConnectionConfig::load_with_dotenv(path, section)?;
    cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, config.clone());
    Ok(config)
}

/// Pick the configuration file to read.
///
/// An explicit path always wins. Otherwise `./database.toml` is used when it
/// exists, then `~/.config/wrapped/database.toml`, and finally
/// `./database.toml` again so the load reports it as missing.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return local;
    }

    if let Some(global) = global_config_path()
        && global.is_file()
    {
        return global;
    }

    local
}

/// Path to the user-global config file.
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wrapped").join(DEFAULT_CONFIG_FILE))
}
