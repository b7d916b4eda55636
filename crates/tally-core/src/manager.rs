//! Transaction collections
//!
//! - [`TransactionBook`] - a validating, append-only collection
//! - [`TransactionManager`] - sorting, filtering and totals over a slice

use tracing::{debug, error, info};

use crate::error::Result;
use crate::models::{Transaction, TransactionKind};

/// A person's collection of validated transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionBook {
    owner: String,
    transactions: Vec<Transaction>,
}

impl TransactionBook {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            transactions: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Validate and append a transaction
    ///
    /// A rejected transaction is logged and its error returned; the book is
    /// left unchanged.
    pub fn add(&mut self, transaction: Transaction) -> Result<()> {
        if let Err(e) = transaction.validate() {
            error!(owner = %self.owner, error = %e, "Failed to add transaction");
            return Err(e);
        }
        debug!(owner = %self.owner, details = %transaction.details(), "Transaction added");
        self.transactions.push(transaction);
        Ok(())
    }

    /// Add every transaction that validates, returning how many were accepted
    pub fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) -> usize {
        transactions
            .into_iter()
            .map(|tx| self.add(tx))
            .filter(|r| r.is_ok())
            .count()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Read-only queries over a set of transactions
pub struct TransactionManager<'a> {
    transactions: &'a [Transaction],
}

impl<'a> TransactionManager<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Transactions ordered by date; ties keep their input order
    pub fn sort_by_date(&self, reverse: bool) -> Vec<&'a Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        if reverse {
            sorted.sort_by(|a, b| b.date().cmp(&a.date()));
        } else {
            sorted.sort_by_key(|t| t.date());
        }
        info!(count = sorted.len(), reverse, "Transactions sorted by date");
        sorted
    }

    /// Transactions whose category matches, ignoring case
    pub fn filter_by_category(&self, category: &str) -> Vec<&'a Transaction> {
        let wanted = category.to_lowercase();
        let filtered: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.category().to_lowercase() == wanted)
            .collect();
        info!(count = filtered.len(), category, "Filtered transactions by category");
        filtered
    }

    /// Sum of amounts for one kind
    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        let total: f64 = self
            .transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(|t| t.amount())
            .sum();
        info!(kind = kind.as_str(), total, "Computed total by kind");
        total
    }
}
