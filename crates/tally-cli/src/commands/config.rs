//! Config command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::config::default_config_path;
use tally_core::AnalysisConfig;

/// Load the analysis config from `--config`, the default override, or embedded defaults
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => AnalysisConfig::load().context("Failed to load config"),
    }
}

pub fn cmd_config(path: Option<&Path>, config: &AnalysisConfig) -> Result<()> {
    let source = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .filter(|p| p.exists());

    println!();
    println!("⚙️  Analysis Configuration");
    match source {
        Some(p) => println!("   Source: {}", p.display()),
        None => println!("   Source: built-in defaults"),
    }
    println!("   ─────────────────────────────────────────");
    println!("   Anomaly threshold:  {} σ", config.anomaly_threshold);
    println!("   Forecast horizon:   {} day(s)", config.forecast_horizon_days);
    if let Some(p) = default_config_path() {
        println!();
        println!("   Override path: {}", p.display());
    }

    Ok(())
}
