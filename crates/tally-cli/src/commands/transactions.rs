//! Transaction listing command

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{import_file, Transaction, TransactionKind, TransactionManager};

use super::truncate;
use crate::cli::SortOrder;

/// Pick, order and cap the transactions to list
pub fn select_transactions(
    transactions: &[Transaction],
    category: Option<&str>,
    sort: Option<SortOrder>,
    limit: usize,
) -> Vec<Transaction> {
    let manager = TransactionManager::new(transactions);
    let filtered: Vec<Transaction> = match category {
        Some(category) => manager
            .filter_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    };
    let mut selected = match sort {
        Some(order) => TransactionManager::new(&filtered)
            .sort_by_date(order == SortOrder::Desc)
            .into_iter()
            .cloned()
            .collect(),
        None => filtered,
    };
    selected.truncate(limit);
    selected
}

pub fn cmd_transactions(
    file: &Path,
    category: Option<&str>,
    sort: Option<SortOrder>,
    limit: usize,
) -> Result<()> {
    let outcome = import_file(file)
        .with_context(|| format!("Failed to read transactions from {}", file.display()))?;
    let transactions = &outcome.transactions;

    let selected = select_transactions(transactions, category, sort, limit);

    println!();
    println!("📄 Transactions ({} of {})", selected.len(), transactions.len());
    println!("   ─────────────────────────────────────────────────────────────");

    if selected.is_empty() {
        println!("   No transactions found.");
        return Ok(());
    }

    println!(
        "   {:10} │ {:6} │ {:>10} │ {:20} │ {}",
        "Date", "Type", "Amount", "Category", "Counterparty"
    );
    println!("   ───────────┼────────┼────────────┼──────────────────────┼──────────────");
    for t in &selected {
        println!(
            "   {:10} │ {:6} │ {:>10.2} │ {:20} │ {}",
            t.date().format("%Y-%m-%d"),
            t.kind().as_str(),
            t.amount(),
            truncate(t.category(), 20),
            truncate(t.direction().info(), 30)
        );
    }

    let manager = TransactionManager::new(transactions);
    println!();
    println!(
        "   Credits: ${:.2}   Debits: ${:.2}",
        manager.total_by_kind(TransactionKind::Credit),
        manager.total_by_kind(TransactionKind::Debit)
    );
    if outcome.skipped > 0 {
        println!("   \x1b[2m{} row(s) skipped\x1b[0m", outcome.skipped);
    }

    Ok(())
}
