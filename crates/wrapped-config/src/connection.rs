//! Connection options for the listening store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default PostgreSQL port.
const fn default_port() -> u16 {
    5432
}

/// One configuration section, e.g.
///
/// ```toml
/// [postgresql]
/// host = "localhost"
/// port = 5432
/// database = "music"
/// user = "wrapped"
/// password = "secret"
/// ```
///
/// A section may instead name a local `DuckDB` file with `path`, in which case
/// the server fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// Server host name. Empty means "no server".
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name on the server.
    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Local `DuckDB` database file holding the store.
    #[serde(default)]
    pub path: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            database: String::new(),
            user: String::new(),
            password: String::new(),
            path: String::new(),
        }
    }
}

impl ConnectionConfig {
    /// A config pointing at a local `DuckDB` file.
    #[must_use]
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Whether the section names a local database file.
    #[must_use]
    pub fn is_local(&self) -> bool {
        !self.path.is_empty()
    }

    /// Whether the section names a database server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.is_local() && !self.host.is_empty()
    }

    /// Whether the section names either a server or a local file.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.is_local() || self.is_remote()
    }

    /// Fail unless the section names a server or a local file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an empty section and
    /// [`ConfigError::InvalidValue`] for a server without a database name.
    pub fn ensure_configured(&self, section: &str) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: section.to_string(),
            });
        }
        if self.is_remote() && self.database.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("{section}.database"),
                reason: "required when 'host' is set".to_string(),
            });
        }
        Ok(())
    }

    /// The non-empty options of this section, keyed by option name.
    #[must_use]
    pub fn options(&self) -> BTreeMap<&'static str, String> {
        let mut options = BTreeMap::new();
        for (key, value) in [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
            ("password", &self.password),
            ("path", &self.path),
        ] {
            if !value.is_empty() {
                options.insert(key, value.clone());
            }
        }
        if self.is_remote() {
            options.insert("port", self.port.to_string());
        }
        options
    }

    /// libpq key/value connection string for the server fields.
    ///
    /// Values containing whitespace, quotes or backslashes are single-quoted
    /// with libpq escaping.
    #[must_use]
    pub fn conninfo(&self) -> String {
        let port = self.port.to_string();
        [
            ("host", self.host.as_str()),
            ("port", port.as_str()),
            ("dbname", self.database.as_str()),
            ("user", self.user.as_str()),
            ("password", self.password.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", quote_conninfo_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn quote_conninfo_value(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
