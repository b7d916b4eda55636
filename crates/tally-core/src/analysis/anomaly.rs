//! Standard-deviation anomaly detection

use super::round_to;
use crate::models::{Report, Transaction};

/// Default number of standard deviations that marks an anomaly
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 2.0;

/// Relative slack when comparing a deviation against the limit, so a value
/// sitting exactly on the limit is not lost to rounding
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Mean and population standard deviation
pub fn mean_and_std_dev(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}

/// Flag transactions whose amount lies `threshold` standard deviations or
/// more from the mean
///
/// A set with zero spread has no anomalies.
pub fn analyze(transactions: &[Transaction], threshold: f64) -> Report {
    let amounts: Vec<f64> = transactions.iter().map(|t| t.amount()).collect();
    let Some((mean, std_dev)) = mean_and_std_dev(&amounts) else {
        return Report::new().with("Anomalies", "No data");
    };

    let limit = threshold * std_dev;
    let anomalies: Vec<String> = if std_dev > 0.0 {
        transactions
            .iter()
            .filter(|t| (t.amount() - mean).abs() >= limit - limit * BOUNDARY_TOLERANCE)
            .map(|t| t.details())
            .collect()
    } else {
        Vec::new()
    };

    let found = anomalies.len() as i64;
    let mut report = Report::new()
        .with("Mean Amount", round_to(mean, 2))
        .with("Standard Deviation", round_to(std_dev, 2))
        .with("Anomalies Found", found);
    if anomalies.is_empty() {
        report.insert("Anomaly Details", "None");
    } else {
        report.insert("Anomaly Details", anomalies);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportValue;
    use crate::test_utils::{credit, debit};

    #[test]
    fn test_flags_single_outlier() {
        let mut transactions: Vec<_> = (1..=4)
            .map(|d| debit(&format!("2024-01-0{}", d), 10.0, "Coffee"))
            .collect();
        transactions.push(debit("2024-01-05", 1000.0, "Laptop"));

        let report = analyze(&transactions, DEFAULT_ANOMALY_THRESHOLD);
        assert_eq!(report.get("Mean Amount"), Some(&ReportValue::Number(208.0)));
        assert_eq!(report.get("Standard Deviation"), Some(&ReportValue::Number(396.0)));
        assert_eq!(report.get("Anomalies Found"), Some(&ReportValue::Integer(1)));
        assert_eq!(
            report.get("Anomaly Details"),
            Some(&ReportValue::List(vec![
                "Date: 2024-01-05, Amount: 1000.0, Category: Laptop, Destination: Test Payee"
                    .to_string()
            ]))
        );
    }

    #[test]
    fn test_uniform_amounts_have_no_anomalies() {
        let transactions = vec![
            debit("2024-02-01", 25.0, "Gym"),
            debit("2024-03-01", 25.0, "Gym"),
            debit("2024-04-01", 25.0, "Gym"),
        ];

        let report = analyze(&transactions, DEFAULT_ANOMALY_THRESHOLD);
        assert_eq!(report.get("Standard Deviation"), Some(&ReportValue::Number(0.0)));
        assert_eq!(report.get("Anomalies Found"), Some(&ReportValue::Integer(0)));
        assert_eq!(
            report.get("Anomaly Details"),
            Some(&ReportValue::Text("None".into()))
        );
    }

    #[test]
    fn test_no_data() {
        let report = analyze(&[], DEFAULT_ANOMALY_THRESHOLD);
        assert_eq!(report, Report::new().with("Anomalies", "No data"));
    }

    #[test]
    fn test_single_transaction_is_not_anomalous() {
        let report = analyze(&[credit("2024-01-01", 500.0, "Bonus")], 2.0);
        assert_eq!(report.get("Anomalies Found"), Some(&ReportValue::Integer(0)));
        assert_eq!(report.get("Mean Amount"), Some(&ReportValue::Number(500.0)));
    }

    #[test]
    fn test_report_label_order() {
        let transactions = vec![
            debit("2024-01-01", 1.0, "A"),
            debit("2024-01-02", 2.0, "B"),
        ];
        let labels: Vec<_> = analyze(&transactions, 2.0)
            .labels()
            .map(String::from)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Mean Amount",
                "Standard Deviation",
                "Anomalies Found",
                "Anomaly Details"
            ]
        );
    }

    #[test]
    fn test_lower_threshold_flags_more() {
        let transactions = vec![
            debit("2024-01-01", 10.0, "A"),
            debit("2024-01-02", 12.0, "A"),
            debit("2024-01-03", 11.0, "A"),
            debit("2024-01-04", 30.0, "A"),
        ];

        let strict = analyze(&transactions, 2.0);
        let loose = analyze(&transactions, 0.5);
        let strict_count = strict.get("Anomalies Found").unwrap().as_number().unwrap();
        let loose_count = loose.get("Anomalies Found").unwrap().as_number().unwrap();
        assert!(loose_count > strict_count);
    }

    #[test]
    fn test_mean_rounds_ties_to_even() {
        let transactions = vec![
            debit("2024-01-01", 0.0, "A"),
            debit("2024-01-02", 0.25, "A"),
            debit("2024-01-03", 0.125, "A"),
        ];
        // mean 0.125 sits exactly between 0.12 and 0.13
        let report = analyze(&transactions, 2.0);
        assert_eq!(report.get("Mean Amount"), Some(&ReportValue::Number(0.12)));
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert!(mean_and_std_dev(&[]).is_none());
        let (mean, std) = mean_and_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(mean, 5.0);
        assert_eq!(std, 2.0);
    }
}
