//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use std::path::Path;

use figment::Jail;
use pretty_assertions::assert_eq;
use wrapped_config::{ConfigError, ConnectionConfig, DEFAULT_SECTION};

#[test]
fn loads_server_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "database.toml",
            r#"
[postgresql]
host = "db.internal"
port = 6432
database = "music"
user = "wrapped"
password = "hunter2"
"#,
        )?;

        let config = ConnectionConfig::load(Path::new("database.toml"), DEFAULT_SECTION)
            .expect("config loads");

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        assert_eq!(config.database, "music");
        assert_eq!(config.user, "wrapped");
        assert_eq!(config.password, "hunter2");
        assert!(config.is_remote());
        assert!(config.ensure_configured(DEFAULT_SECTION).is_ok());
        Ok(())
    });
}

#[test]
fn loads_local_section_and_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "database.toml",
            r#"
[postgresql]
host = "ignored"

[duckdb]
path = "music.duckdb"
"#,
        )?;

        let config =
            ConnectionConfig::load(Path::new("database.toml"), "duckdb").expect("config loads");

        assert_eq!(config.path, "music.duckdb");
        assert_eq!(config.port, 5432);
        assert!(config.host.is_empty());
        assert!(config.is_local());
        Ok(())
    });
}

#[test]
fn options_mapping_lists_section_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "database.toml",
            r#"
[postgresql]
host = "localhost"
database = "music"
user = "me"
password = "pw"
"#,
        )?;

        let config = ConnectionConfig::load(Path::new("database.toml"), DEFAULT_SECTION)
            .expect("config loads");
        let options = config.options();

        assert_eq!(options.get("host").map(String::as_str), Some("localhost"));
        assert_eq!(options.get("port").map(String::as_str), Some("5432"));
        assert_eq!(options.get("database").map(String::as_str), Some("music"));
        assert_eq!(options.get("user").map(String::as_str), Some("me"));
        assert_eq!(options.get("password").map(String::as_str), Some("pw"));
        assert!(!options.contains_key("path"));
        Ok(())
    });
}

#[test]
fn absent_section_fails_clearly() {
    Jail::expect_with(|jail| {
        jail.create_file("database.toml", "[other]\nhost = \"x\"\n")?;

        let err = ConnectionConfig::load(Path::new("database.toml"), DEFAULT_SECTION)
            .expect_err("section is absent");

        assert!(matches!(err, ConfigError::MissingSection { .. }));
        assert_eq!(
            err.to_string(),
            "Section 'postgresql' not found in 'database.toml'"
        );
        Ok(())
    });
}

#[test]
fn wrong_value_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("database.toml", "[postgresql]\nport = \"not-a-port\"\n")?;

        let err = ConnectionConfig::load(Path::new("database.toml"), DEFAULT_SECTION)
            .expect_err("port must be numeric");

        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
