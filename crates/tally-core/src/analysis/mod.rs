//! Analysis strategies
//!
//! Each strategy turns a slice of transactions into a [`Report`]. The set is
//! closed, so strategies are variants of [`AnalysisStrategy`] rather than
//! trait objects:
//!
//! - **Trend** - credit/debit totals and net balance
//! - **Clustering** - amount totals per category
//! - **Forecast** - least-squares projection of the next amount
//! - **Anomaly Detection** - amounts far from the mean
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::AnalysisStrategy;
//!
//! let report = AnalysisStrategy::Trend.analyze(&transactions);
//! ```

pub mod anomaly;
pub mod clustering;
pub mod forecast;
pub mod trend;

use std::fmt;
use std::str::FromStr;

use crate::config::AnalysisConfig;
use crate::error::Error;
use crate::models::{Report, Transaction};

pub use anomaly::DEFAULT_ANOMALY_THRESHOLD;
pub use forecast::{DEFAULT_FORECAST_HORIZON_DAYS, MAX_FORECAST_HORIZON_DAYS};

/// An interchangeable analysis algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisStrategy {
    Trend,
    Clustering,
    Forecast {
        /// Days past the latest transaction to evaluate the fit at
        horizon_days: u32,
    },
    AnomalyDetection {
        /// Deviation from the mean, in standard deviations, that flags a transaction
        threshold: f64,
    },
}

impl AnalysisStrategy {
    /// Forecast one day past the latest transaction
    pub fn forecast() -> Self {
        Self::Forecast {
            horizon_days: DEFAULT_FORECAST_HORIZON_DAYS,
        }
    }

    /// Flag amounts two standard deviations from the mean
    pub fn anomaly_detection() -> Self {
        Self::AnomalyDetection {
            threshold: DEFAULT_ANOMALY_THRESHOLD,
        }
    }

    /// All strategies with default parameters, in reporting order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Trend,
            Self::Clustering,
            Self::forecast(),
            Self::anomaly_detection(),
        ]
    }

    /// All strategies parameterized from config
    pub fn all_with_config(config: &AnalysisConfig) -> Vec<Self> {
        Self::all()
            .into_iter()
            .map(|s| s.configured(config))
            .collect()
    }

    /// Replace this strategy's parameters with the ones in `config`
    pub fn configured(self, config: &AnalysisConfig) -> Self {
        match self {
            Self::Forecast { .. } => Self::Forecast {
                horizon_days: config.forecast_horizon_days,
            },
            Self::AnomalyDetection { .. } => Self::AnomalyDetection {
                threshold: config.anomaly_threshold,
            },
            other => other,
        }
    }

    /// Type name announced to observers when this strategy completes
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Trend => "TrendAnalysisStrategy",
            Self::Clustering => "ClusteringStrategy",
            Self::Forecast { .. } => "ForecastAnalysisStrategy",
            Self::AnomalyDetection { .. } => "AnomalyDetectionStrategy",
        }
    }

    /// Short key used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Clustering => "clustering",
            Self::Forecast { .. } => "forecast",
            Self::AnomalyDetection { .. } => "anomaly",
        }
    }

    /// Run the strategy
    pub fn analyze(&self, transactions: &[Transaction]) -> Report {
        match *self {
            Self::Trend => trend::analyze(transactions),
            Self::Clustering => clustering::analyze(transactions),
            Self::Forecast { horizon_days } => forecast::analyze(transactions, horizon_days),
            Self::AnomalyDetection { threshold } => anomaly::analyze(transactions, threshold),
        }
    }
}

impl fmt::Display for AnalysisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trend" => Ok(Self::Trend),
            "clustering" | "cluster" => Ok(Self::Clustering),
            "forecast" => Ok(Self::forecast()),
            "anomaly" | "anomalies" => Ok(Self::anomaly_detection()),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown strategy: {}. Available: trend, clustering, forecast, anomaly",
                s
            ))),
        }
    }
}

/// Round to a fixed number of decimal places, folding `-0.0` into `0.0`
///
/// Exact ties round to even (0.125 -> 0.12, 0.375 -> 0.38).
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round_ties_even() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
