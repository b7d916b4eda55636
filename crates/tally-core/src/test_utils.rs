//! Test utilities for tally-core
//!
//! Builders for valid transactions so tests can focus on the analysis
//! rather than construction.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Counterparty note used by [`credit`]
pub const TEST_PAYER: &str = "Test Payer";

/// Counterparty note used by [`debit`]
pub const TEST_PAYEE: &str = "Test Payee";

/// Parse a `YYYY-MM-DD` date, panicking on bad input
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A credit transaction from [`TEST_PAYER`]
pub fn credit(date_str: &str, amount: f64, category: &str) -> Transaction {
    Transaction::credit(date(date_str), amount, category, TEST_PAYER).unwrap()
}

/// A debit transaction to [`TEST_PAYEE`]
pub fn debit(date_str: &str, amount: f64, category: &str) -> Transaction {
    debit_on(date(date_str), amount, category)
}

/// A debit transaction on an already-built date
pub fn debit_on(date: NaiveDate, amount: f64, category: &str) -> Transaction {
    Transaction::debit(date, amount, category, TEST_PAYEE).unwrap()
}

/// A small month of household activity
pub fn sample_month() -> Vec<Transaction> {
    vec![
        credit("2024-01-01", 3000.0, "Salary"),
        debit("2024-01-02", 1200.0, "Rent"),
        debit("2024-01-05", 85.4, "Groceries"),
        debit("2024-01-12", 62.1, "Groceries"),
        debit("2024-01-15", 45.0, "Utilities"),
        credit("2024-01-20", 150.0, "Refund"),
        debit("2024-01-26", 90.25, "Groceries"),
    ]
}

/// Sample CSV in the ingestion format
pub fn sample_csv() -> &'static str {
    "date,amount,category,type,sourceInfo,destinationInfo
2024-01-01,3000.0,Salary,credit,Employer,
2024-01-02,1200.0,Rent,debit,,Landlord
2024-01-05,85.4,Groceries,debit,,Market
2024-01-12,62.1,Groceries,DEBIT,, Market 
2024-01-15,45.0,Utilities,debit,,Power Co
2024-01-20,150.0,Refund,Credit,Store,
2024-01-26,90.25,Groceries,debit,,Market
"
}
