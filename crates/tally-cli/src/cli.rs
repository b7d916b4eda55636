//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Tally - Summarize where your money goes
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance transaction analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Analysis config file (defaults to ~/.local/share/tally/config/analysis.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze transactions from a CSV file
    Analyze {
        /// CSV file with date,amount,category,type[,sourceInfo,destinationInfo]
        #[arg(short, long)]
        file: PathBuf,

        /// Strategy: trend, clustering, forecast, anomaly, all
        #[arg(short, long, default_value = "all")]
        strategy: String,

        /// Output format
        #[arg(long, value_enum, default_value = "report")]
        format: OutputFormat,
    },

    /// List transactions from a CSV file
    Transactions {
        /// CSV file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Only show this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort by date
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Maximum number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the effective analysis configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Banner report with one line per entry
    Report,
    /// Starred summary view
    Summary,
    /// JSON object per strategy
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}
