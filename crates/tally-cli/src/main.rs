//! Tally CLI - Personal finance analysis
//!
//! Usage:
//!   tally analyze --file CSV --strategy all     Run analyses and print reports
//!   tally transactions --file CSV               List ingested transactions
//!   tally config                                Show effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging on stderr so stdout carries only command output
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            file,
            strategy,
            format,
        } => commands::cmd_analyze(&file, &strategy, format, &config),
        Commands::Transactions {
            file,
            category,
            sort,
            limit,
        } => commands::cmd_transactions(&file, category.as_deref(), sort, limit),
        Commands::Config => commands::cmd_config(cli.config.as_deref(), &config),
    }
}
