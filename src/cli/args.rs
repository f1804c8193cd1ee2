//! Command line argument parsing for the kusari CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kusari - Markov-chain triplet frequency preparation
#[derive(Parser, Debug, Clone)]
#[command(name = "kusari")]
#[command(about = "Build and inspect Markov-chain triplet frequency tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KusariArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KusariArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the triplet frequency table from a corpus file
    Build(BuildArgs),

    /// Show statistics for a stored frequency table
    Stats(StatsArgs),
}

/// Arguments for the `build` command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Corpus file to ingest (UTF-8 text)
    pub input: PathBuf,

    /// SQLite database file
    #[arg(long, default_value = "chain.db")]
    pub db: PathBuf,

    /// Schema script executed when (re)initializing the table
    #[arg(long, default_value = "schema.sql")]
    pub schema: PathBuf,

    /// Append rows to the existing table instead of re-running the schema script
    #[arg(long)]
    pub append: bool,

    /// Extract sentence contributions in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print the frequency map to stdout after persisting
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the `stats` command
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// SQLite database file
    #[arg(long, default_value = "chain.db")]
    pub db: PathBuf,

    /// Emit stored rows as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}
