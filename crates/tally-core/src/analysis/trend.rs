//! Credit/debit trend totals

use crate::models::{Report, Transaction};

/// Total credits, total debits and the net balance between them
pub fn analyze(transactions: &[Transaction]) -> Report {
    let total_credit: f64 = transactions
        .iter()
        .filter(|t| t.is_credit())
        .map(|t| t.amount())
        .sum();
    let total_debit: f64 = transactions
        .iter()
        .filter(|t| t.is_debit())
        .map(|t| t.amount())
        .sum();

    Report::new()
        .with("Total Credit", total_credit)
        .with("Total Debit", total_debit)
        .with("Net Balance", total_credit - total_debit)
}
