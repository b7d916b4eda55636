//! CSV ingestion of flat transaction records
//!
//! Expected header: `date,amount,category,type` plus optional `sourceInfo`
//! (credits) and `destinationInfo` (debits). Rows that cannot become a valid
//! transaction, including rows that are not valid UTF-8, are logged and
//! skipped; they never abort the import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{Transaction, TransactionKind};

/// Transactions read from a file, plus how many rows were rejected
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub transactions: Vec<Transaction>,
    pub skipped: usize,
}

/// Column positions resolved from the header row
struct Columns {
    date: Option<usize>,
    amount: Option<usize>,
    category: Option<usize>,
    kind: Option<usize>,
    source_info: Option<usize>,
    destination_info: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            date: find("date"),
            amount: find("amount"),
            category: find("category"),
            kind: find("type"),
            source_info: find("sourceInfo"),
            destination_info: find("destinationInfo"),
        }
    }
}

fn field<'r>(record: &'r StringRecord, index: Option<usize>) -> Option<&'r str> {
    index.and_then(|i| record.get(i))
}

/// Parse CSV data into transactions
pub fn parse_csv<R: Read>(reader: R) -> Result<ImportOutcome> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    let mut outcome = ImportOutcome::default();

    for (index, result) in rdr.byte_records().enumerate() {
        let raw = result?;
        // Header is line 1
        let line = index + 2;

        let record = match StringRecord::from_byte_record(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(line, error = %e, "Skipping row with invalid UTF-8");
                outcome.skipped += 1;
                continue;
            }
        };

        match parse_record(&record, &columns) {
            Ok(tx) => {
                debug!(line, details = %tx.details(), "Parsed transaction");
                outcome.transactions.push(tx);
            }
            Err(reason) => {
                warn!(line, reason = %reason, row = ?record, "Skipping row");
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Turn one record into a transaction, or explain why it can't be one
fn parse_record(
    record: &StringRecord,
    columns: &Columns,
) -> std::result::Result<Transaction, String> {
    let (Some(date_str), Some(amount_str), Some(category), Some(kind_str)) = (
        field(record, columns.date),
        field(record, columns.amount),
        field(record, columns.category),
        field(record, columns.kind),
    ) else {
        return Err("missing required fields".into());
    };

    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", date_str, e))?;
    let amount = amount_str
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid amount '{}': {}", amount_str, e))?;

    if amount < 0.0 {
        return Err(format!("negative amount {}", amount));
    }

    let kind = kind_str
        .parse::<TransactionKind>()
        .map_err(|e| e.to_string())?;
    let info_column = match kind {
        TransactionKind::Credit => columns.source_info,
        TransactionKind::Debit => columns.destination_info,
    };
    let info = field(record, info_column).unwrap_or("").trim();

    Transaction::new(date, amount, category, kind.direction(info)).map_err(|e| e.to_string())
}

/// Read transactions from a CSV file
pub fn import_file(path: &Path) -> Result<ImportOutcome> {
    let file = File::open(path)?;
    let outcome = parse_csv(file)?;
    info!(
        count = outcome.transactions.len(),
        skipped = outcome.skipped,
        path = %path.display(),
        "Fetched transactions"
    );
    Ok(outcome)
}
