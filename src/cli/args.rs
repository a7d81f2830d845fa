//! Command line argument parsing for the gladius CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default location of the document collection.
pub const DEFAULT_DATA_PATH: &str = "data/news.csv";

/// Gladius - boolean full-text search over a CSV document collection
#[derive(Parser, Debug, Clone)]
#[command(name = "gladius")]
#[command(about = "Boolean and ranked full-text search over CSV documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GladiusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "GLADIUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GladiusArgs {
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
    /// Load a CSV collection, index it and run a query
    Search(SearchArgs),

    /// Show how a query compiles, without loading any documents
    Explain(ExplainArgs),

    /// Load a CSV collection and show index statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the CSV file (id,title,date,content)
    #[arg(short, long, value_name = "CSV_FILE", default_value = DEFAULT_DATA_PATH)]
    pub path: PathBuf,

    /// Query string, e.g. '"small cat" AND NOT dog'
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Maximum number of results to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Enable English stemming
    #[arg(long)]
    pub stem: bool,
}

/// Arguments for explaining a query
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Query string
    #[arg(short, long)]
    pub query: String,

    /// Enable English stemming
    #[arg(long)]
    pub stem: bool,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the CSV file (id,title,date,content)
    #[arg(short, long, value_name = "CSV_FILE", default_value = DEFAULT_DATA_PATH)]
    pub path: PathBuf,

    /// Enable English stemming
    #[arg(long)]
    pub stem: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
