use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wrapped` binary.
#[derive(Debug, Parser)]
#[command(name = "wrapped", version, about = "Music Wrapped - listening statistics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Connection configuration file (defaults to ./database.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Section of the configuration file to read
    #[arg(short, long, global = true, default_value = wrapped_config::DEFAULT_SECTION)]
    pub section: String,

    /// Local DuckDB database file (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Run every report against the store, even when repeated
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
            section: self.section.clone(),
            database: self.database.clone(),
            no_cache: self.no_cache,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
