use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all report commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub section: String,
    pub database: Option<String>,
    pub no_cache: bool,
    pub quiet: bool,
    pub verbose: bool,
}
