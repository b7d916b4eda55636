//! Linear regression forecast
//!
//! Fits `amount = slope * day + intercept` by ordinary least squares, where
//! `day` is the date's ordinal day count (0001-01-01 is day 1), and evaluates
//! the line a fixed number of days past the latest observed date.

use chrono::{Datelike, Duration, NaiveDate};

use super::round_to;
use crate::models::{Report, Transaction};

/// Default number of days past the latest transaction to forecast
pub const DEFAULT_FORECAST_HORIZON_DAYS: u32 = 1;

/// Longest accepted forecast horizon (about ten years)
pub const MAX_FORECAST_HORIZON_DAYS: u32 = 3650;

/// Slope and intercept of a fitted line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinal day count, 0001-01-01 = 1
pub fn ordinal(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Least-squares fit of `ys` against `xs`
///
/// Returns `None` for fewer than two points. When every x is the same the
/// line is undetermined; the fit is then flat at the mean of `ys`.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let count = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / count;
    let mean_y = ys[..n].iter().sum::<f64>() / count;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx == 0.0 {
        return Some(LinearFit {
            slope: 0.0,
            intercept: mean_y,
        });
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Forecast the amount `horizon_days` after the latest transaction
pub fn analyze(transactions: &[Transaction], horizon_days: u32) -> Report {
    let Some(latest) = transactions.iter().map(|t| t.date()).max() else {
        return Report::new().with("Forecast", "No data");
    };

    let xs: Vec<f64> = transactions.iter().map(|t| ordinal(t.date())).collect();
    let ys: Vec<f64> = transactions.iter().map(|t| t.amount()).collect();

    let Some(fit) = least_squares(&xs, &ys) else {
        return Report::new().with("Forecast", "Insufficient data for forecasting");
    };

    let Some(forecast_date) =
        latest.checked_add_signed(Duration::days(i64::from(horizon_days)))
    else {
        return Report::new().with("Forecast", "Forecast date out of range");
    };
    let forecast_amount = fit.at(ordinal(forecast_date));

    Report::new()
        .with("Forecast Date", forecast_date.format("%Y-%m-%d").to_string())
        .with("Forecast Amount", round_to(forecast_amount, 2))
        .with("Regression Slope", round_to(fit.slope, 4))
        .with("Regression Intercept", round_to(fit.intercept, 4))
}
