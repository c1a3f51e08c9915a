//! Command-line interface for ctxsum

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// ctxsum - deterministic build-context fingerprinting
#[derive(Parser)]
#[command(
    name = "ctxsum",
    version,
    about = "Fingerprint a directory the way a container build context would see it",
    long_about = "ctxsum hashes exactly the files an ignore file would let into a container \
                  build context, producing a deterministic cache key for up-to-date checks."
)]
pub struct Cli {
    /// Enable verbose output (walk events at debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the context fingerprint
    Hash {
        /// Context root directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Ignore-file name, resolved relative to the root
        #[arg(long, default_value = ".dockerignore")]
        ignore_file: String,

        /// File that bypasses ignore rules (repeatable)
        #[arg(long = "always-include", value_name = "PATH")]
        always_include: Vec<String>,

        /// Number of hex characters to print
        #[arg(short, long, default_value_t = 12)]
        length: usize,

        /// Print the full 64-character digest
        #[arg(long, conflicts_with = "length")]
        full: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the files the fingerprint would cover
    Files {
        /// Context root directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Ignore-file name, resolved relative to the root
        #[arg(long, default_value = ".dockerignore")]
        ignore_file: String,

        /// File that bypasses ignore rules (repeatable)
        #[arg(long = "always-include", value_name = "PATH")]
        always_include: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
