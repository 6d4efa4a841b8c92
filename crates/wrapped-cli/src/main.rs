#![allow(clippy::missing_errors_doc)]

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod dashboard;
mod messages;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("wrapped error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::SeedDemo { path } = &cli.command {
        return commands::seed_demo::handle(path, flags.quiet);
    }

    let reports = bootstrap::open_reports(&flags)?;
    commands::dispatch::dispatch(cli.command, &reports, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("WRAPPED_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
