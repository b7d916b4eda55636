//! Domain models for Tally

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Which way money moved, with the counterparty note for that direction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Direction {
    /// Money coming in, with a note about where it came from
    Credit { source_info: String },
    /// Money going out, with a note about where it went
    Debit { destination_info: String },
}

impl Direction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Credit { .. } => TransactionKind::Credit,
            Self::Debit { .. } => TransactionKind::Debit,
        }
    }

    /// The counterparty note, whichever direction it is
    pub fn info(&self) -> &str {
        match self {
            Self::Credit { source_info } => source_info,
            Self::Debit { destination_info } => destination_info,
        }
    }
}

/// Transaction kind as named in input files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Build the direction for this kind around a counterparty note
    pub fn direction(&self, info: impl Into<String>) -> Direction {
        match self {
            Self::Credit => Direction::Credit {
                source_info: info.into(),
            },
            Self::Debit => Direction::Debit {
                destination_info: info.into(),
            },
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid transaction type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded financial movement
///
/// Fields are private so a constructed transaction always satisfies
/// `amount >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    amount: f64,
    category: String,
    direction: Direction,
}

impl Transaction {
    /// Create and validate a transaction
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        direction: Direction,
    ) -> Result<Self> {
        let tx = Self {
            date,
            amount,
            category: category.into(),
            direction,
        };
        tx.validate()?;
        Ok(tx)
    }

    /// Create a credit (incoming) transaction
    pub fn credit(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        source_info: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            date,
            amount,
            category,
            Direction::Credit {
                source_info: source_info.into(),
            },
        )
    }

    /// Create a debit (outgoing) transaction
    pub fn debit(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        destination_info: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            date,
            amount,
            category,
            Direction::Debit {
                destination_info: destination_info.into(),
            },
        )
    }

    /// Check the amount invariant
    pub fn validate(&self) -> Result<()> {
        // `!(x >= 0)` also rejects NaN
        if !(self.amount >= 0.0) {
            return Err(Error::Validation("Amount must be non-negative".into()));
        }
        Ok(())
    }

    /// Canonical one-line description
    ///
    /// Format: `Date: YYYY-MM-DD, Amount: <amount>, Category: <category>`
    /// followed by `, Source: <info>` or `, Destination: <info>`.
    pub fn details(&self) -> String {
        let base = format!(
            "Date: {}, Amount: {}, Category: {}",
            self.date.format("%Y-%m-%d"),
            format_float(self.amount),
            self.category
        );
        match &self.direction {
            Direction::Credit { source_info } => format!("{}, Source: {}", base, source_info),
            Direction::Debit { destination_info } => {
                format!("{}, Destination: {}", base, destination_info)
            }
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    pub fn kind(&self) -> TransactionKind {
        self.direction.kind()
    }

    pub fn is_credit(&self) -> bool {
        matches!(self.direction, Direction::Credit { .. })
    }

    pub fn is_debit(&self) -> bool {
        matches!(self.direction, Direction::Debit { .. })
    }
}

/// Builds transactions from a textual kind
pub struct TransactionFactory;

impl TransactionFactory {
    /// Create a transaction from a kind string ("credit" or "debit", any case)
    ///
    /// `extra_info` becomes the source note for credits and the destination
    /// note for debits.
    pub fn create(
        kind: &str,
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        extra_info: impl Into<String>,
    ) -> Result<Transaction> {
        let kind: TransactionKind = kind.parse()?;
        Transaction::new(date, amount, category, kind.direction(extra_info))
    }
}

/// A single value in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(f64),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl ReportValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_float(*n)),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<f64> for ReportValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ReportValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for ReportValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ReportValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for ReportValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered label -> value summary produced by one analysis run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<(String, ReportValue)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the value in place if the label exists
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<ReportValue>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, label: impl Into<String>, value: impl Into<ReportValue>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Format a float the way amounts appear in source data (`100.0`, `15.49`)
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_credit_details() {
        let tx = Transaction::credit(date(2024, 3, 1), 1500.0, "Salary", "Employer").unwrap();
        assert_eq!(
            tx.details(),
            "Date: 2024-03-01, Amount: 1500.0, Category: Salary, Source: Employer"
        );
        assert!(tx.is_credit());
        assert!(!tx.is_debit());
    }

    #[test]
    fn test_debit_details() {
        let tx = Transaction::debit(date(2024, 3, 2), 15.49, "Dining", "Cafe").unwrap();
        assert_eq!(
            tx.details(),
            "Date: 2024-03-02, Amount: 15.49, Category: Dining, Destination: Cafe"
        );
        assert_eq!(tx.kind(), TransactionKind::Debit);
        assert_eq!(tx.direction().info(), "Cafe");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Transaction::debit(date(2024, 1, 1), -5.0, "Food", "Store");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_nan_amount_rejected() {
        let result = Transaction::credit(date(2024, 1, 1), f64::NAN, "Gift", "Aunt");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_amount_allowed() {
        let tx = Transaction::credit(date(2024, 1, 1), 0.0, "Refund", "Shop").unwrap();
        assert!(tx.validate().is_ok());
        assert_eq!(tx.amount(), 0.0);
    }

    #[test]
    fn test_factory_dispatch_is_case_insensitive() {
        let credit =
            TransactionFactory::create("CREDIT", date(2024, 1, 1), 10.0, "Gift", "Aunt").unwrap();
        assert_eq!(
            credit.direction(),
            &Direction::Credit {
                source_info: "Aunt".into()
            }
        );

        let debit =
            TransactionFactory::create("Debit", date(2024, 1, 1), 10.0, "Food", "Store").unwrap();
        assert!(debit.is_debit());
    }

    #[test]
    fn test_factory_unknown_kind() {
        let result = TransactionFactory::create("transfer", date(2024, 1, 1), 10.0, "X", "Y");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_factory_validates_amount() {
        let result = TransactionFactory::create("credit", date(2024, 1, 1), -1.0, "X", "Y");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut report = Report::new();
        report.insert("Zeta", 1.0);
        report.insert("Alpha", 2.0);
        report.insert("Mid", "text");
        let labels: Vec<_> = report.labels().collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);

        report.insert("Zeta", 9.0);
        assert_eq!(report.len(), 3);
        assert_eq!(report.get("Zeta"), Some(&ReportValue::Number(9.0)));
    }

    #[test]
    fn test_report_json_keeps_order() {
        let report = Report::new()
            .with("Total Credit", 100.0)
            .with("Anomalies Found", 2i64)
            .with("Anomaly Details", vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"Total Credit":100.0,"Anomalies Found":2,"Anomaly Details":["a","b"]}"#
        );
    }

    #[test]
    fn test_report_value_display() {
        assert_eq!(ReportValue::Number(1500.0).to_string(), "1500.0");
        assert_eq!(ReportValue::Number(12.5).to_string(), "12.5");
        assert_eq!(ReportValue::Integer(3).to_string(), "3");
        assert_eq!(ReportValue::from("None").to_string(), "None");
    }
}
