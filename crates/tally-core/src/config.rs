//! Analysis configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an override (explicit path, or
//!    ~/.local/share/tally/config/analysis.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_FORECAST_HORIZON_DAYS, MAX_FORECAST_HORIZON_DAYS,
};
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analysis.toml");

/// Tunable parameters for the analysis strategies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    /// Standard deviations from the mean that flag an anomaly
    pub anomaly_threshold: f64,
    /// Days past the latest transaction to forecast
    pub forecast_horizon_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: DEFAULT_ANOMALY_THRESHOLD,
            forecast_horizon_days: DEFAULT_FORECAST_HORIZON_DAYS,
        }
    }
}

impl AnalysisConfig {
    /// Load from the default override location, or the embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from `path` if it exists, or the embedded defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    fn validate(&self) -> Result<()> {
        if !self.anomaly_threshold.is_finite() || self.anomaly_threshold <= 0.0 {
            return Err(Error::Config(format!(
                "anomaly threshold must be a positive number, got {}",
                self.anomaly_threshold
            )));
        }
        if self.forecast_horizon_days == 0 {
            return Err(Error::Config(
                "forecast horizon must be at least one day".into(),
            ));
        }
        if self.forecast_horizon_days > MAX_FORECAST_HORIZON_DAYS {
            return Err(Error::Config(format!(
                "forecast horizon must be at most {} days, got {}",
                MAX_FORECAST_HORIZON_DAYS, self.forecast_horizon_days
            )));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("analysis.toml"))
}

fn load_config(override_path: Option<&Path>) -> Result<AnalysisConfig> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    let content = match path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading analysis config");
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    anomaly: Option<RawAnomaly>,
    forecast: Option<RawForecast>,
}

#[derive(Debug, Deserialize)]
struct RawAnomaly {
    threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    horizon_days: Option<u32>,
}

fn parse_config(content: &str) -> Result<AnalysisConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalysisConfig::default();

    if let Some(threshold) = raw.anomaly.and_then(|a| a.threshold) {
        config.anomaly_threshold = threshold;
    }
    if let Some(days) = raw.forecast.and_then(|f| f.horizon_days) {
        config.forecast_horizon_days = days;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AnalysisConfig::from_toml("[anomaly]\nthreshold = 3.5\n").unwrap();
        assert_eq!(config.anomaly_threshold, 3.5);
        assert_eq!(config.forecast_horizon_days, 1);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(
            AnalysisConfig::from_toml("").unwrap(),
            AnalysisConfig::default()
        );
    }

    #[test]
    fn test_horizon_upper_bound() {
        let config = AnalysisConfig::from_toml("[forecast]\nhorizon_days = 3650\n").unwrap();
        assert_eq!(config.forecast_horizon_days, MAX_FORECAST_HORIZON_DAYS);

        let err = AnalysisConfig::from_toml("[forecast]\nhorizon_days = 3651\n").unwrap_err();
        assert!(err.to_string().contains("at most 3650 days"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AnalysisConfig::from_toml("[anomaly]\nthreshold = 0.0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("[forecast]\nhorizon_days = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("[forecast]\nhorizon_days = 4294967295\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("not toml = = ="),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[forecast]\nhorizon_days = 14").unwrap();

        let config = AnalysisConfig::load_from(file.path()).unwrap();
        assert_eq!(config.forecast_horizon_days, 14);
        assert_eq!(config.anomaly_threshold, 2.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }
}
