//! Category clustering

use std::collections::HashMap;

use crate::models::{Report, Transaction};

/// Sum amounts per category, one entry per category in first-seen order
///
/// Categories are compared exactly as written, so "Food" and "food" are
/// separate clusters.
pub fn analyze(transactions: &[Transaction]) -> Report {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for t in transactions {
        let total = totals.entry(t.category()).or_insert_with(|| {
            order.push(t.category());
            0.0
        });
        *total += t.amount();
    }

    let mut report = Report::new();
    for category in order {
        report.insert(category, totals[category]);
    }
    report
}
