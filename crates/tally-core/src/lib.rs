//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tool:
//! - Transaction model with explicit credit/debit direction
//! - Analysis strategies (trend, clustering, forecast, anomaly detection)
//! - Analyzer with observer notifications and an injectable event sink
//! - CSV ingestion of flat transaction records
//! - Transaction collections (validation, sorting, filtering)
//! - Text report rendering
//! - Analysis configuration loaded from TOML

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod events;
pub mod import;
pub mod manager;
pub mod models;
pub mod observer;
pub mod report;

/// Test utilities including transaction builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analysis::AnalysisStrategy;
pub use analyzer::Analyzer;
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use events::{AnalysisEvent, EventSink, MemorySink, NullSink, TracingSink};
pub use import::{import_file, parse_csv, ImportOutcome};
pub use manager::{TransactionBook, TransactionManager};
pub use models::{
    Direction, Report, ReportValue, Transaction, TransactionFactory, TransactionKind,
};
pub use observer::{
    ConsoleObserver, Observer, ObserverHandle, ObserverRegistry, RecordingObserver,
};
pub use report::{render_summary, ReportGenerator};
