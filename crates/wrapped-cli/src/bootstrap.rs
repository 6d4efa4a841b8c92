use anyhow::Context;
use wrapped_config::ConnectionConfig;
use wrapped_db::{DuckDbExecutor, Reports};

use crate::cli::GlobalFlags;

/// The report service every command runs against.
pub type AppReports = Reports<DuckDbExecutor>;

/// Resolve the connection options from the global flags.
///
/// `--database` names a local file directly; otherwise the configured section
/// of the configuration file is read, with environment overrides.
pub fn load_connection(flags: &GlobalFlags) -> anyhow::Result<ConnectionConfig> {
    if let Some(path) = &flags.database {
        return Ok(ConnectionConfig::local(path.clone()));
    }

    let path = wrapped_config::resolve_config_path(flags.config.as_deref());
    let config = wrapped_config::load_cached(&path, &flags.section)
        .with_context(|| format!("failed to load connection settings from {}", path.display()))?;
    config.ensure_configured(&flags.section)?;
    Ok(config)
}

/// Connect to the listening store and wrap it in a report service.
pub fn open_reports(flags: &GlobalFlags) -> anyhow::Result<AppReports> {
    let config = load_connection(flags)?;
    let executor = DuckDbExecutor::connect(&config).context("failed to connect to the listening store")?;
    tracing::debug!(remote = config.is_remote(), caching = !flags.no_cache, "report service ready");

    let reports = Reports::new(executor);
    Ok(if flags.no_cache {
        reports.without_cache()
    } else {
        reports
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::load_connection;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            config: None,
            section: "postgresql".to_string(),
            database: None,
            no_cache: false,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn database_flag_skips_the_config_file() {
        let flags = GlobalFlags {
            database: Some("music.duckdb".to_string()),
            config: Some("/nonexistent/database.toml".into()),
            ..flags()
        };
        let config = load_connection(&flags).expect("local database");
        assert!(config.is_local());
        assert_eq!(config.path, "music.duckdb");
    }

    #[test]
    fn unconfigured_section_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[bootstrap_empty]\nport = 5432\n").unwrap();
        let flags = GlobalFlags {
            config: Some(file.path().to_path_buf()),
            section: "bootstrap_empty".to_string(),
            ..flags()
        };
        let err = load_connection(&flags).unwrap_err();
        assert!(format!("{err:#}").contains("not configured"));
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let flags = GlobalFlags {
            config: Some("/nonexistent/wrapped.toml".into()),
            ..flags()
        };
        let err = load_connection(&flags).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/wrapped.toml"));
    }
}
