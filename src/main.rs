//! ctxsum CLI
//!
//! Command-line interface for deterministic build-context fingerprinting.

use anyhow::Result;
use clap::Parser;

use ctxsum::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --verbose surfaces walk events
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Hash {
            path,
            ignore_file,
            always_include,
            length,
            full,
            json,
        } => commands::hash::execute(
            path,
            ignore_file,
            always_include,
            length,
            full,
            json,
            cli.verbose,
        ),
        Commands::Files {
            path,
            ignore_file,
            always_include,
            json,
        } => commands::files::execute(path, ignore_file, always_include, json, cli.verbose),
    }
}
