//! Analyzer - runs the selected strategy and announces completion

use std::sync::Arc;

use crate::analysis::AnalysisStrategy;
use crate::error::{Error, Result};
use crate::events::{AnalysisEvent, EventSink, TracingSink};
use crate::models::{Report, Transaction};
use crate::observer::{ObserverHandle, ObserverRegistry};

/// Holds a transaction set and the currently selected strategy
///
/// Each successful [`Analyzer::analyze`] call emits one [`AnalysisEvent`] to
/// the sink and sends one completion message to every attached observer.
pub struct Analyzer {
    transactions: Vec<Transaction>,
    strategy: Option<AnalysisStrategy>,
    observers: ObserverRegistry,
    sink: Arc<dyn EventSink>,
}

impl Analyzer {
    /// Create an analyzer with no strategy selected
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            strategy: None,
            observers: ObserverRegistry::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the event sink
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Select the strategy for the next analysis
    pub fn set_strategy(&mut self, strategy: AnalysisStrategy) {
        self.strategy = Some(strategy);
    }

    pub fn strategy(&self) -> Option<AnalysisStrategy> {
        self.strategy
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn attach<H: ObserverHandle + ?Sized>(&mut self, observer: &H) {
        self.observers.attach(observer);
    }

    pub fn detach<H: ObserverHandle + ?Sized>(&mut self, observer: &H) -> Result<()> {
        self.observers.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Run the selected strategy over the held transactions
    ///
    /// Fails with [`Error::IllegalState`] when no strategy has been set; in
    /// that case no observer is notified.
    pub fn analyze(&self) -> Result<Report> {
        let strategy = self
            .strategy
            .ok_or_else(|| Error::IllegalState("No analysis strategy set.".into()))?;

        let report = strategy.analyze(&self.transactions);
        let notified = self
            .observers
            .notify(&format!("Analysis complete using {}", strategy.type_name()));

        self.sink.emit(&AnalysisEvent {
            strategy: strategy.type_name(),
            transactions: self.transactions.len(),
            entries: report.len(),
            notified,
        });

        Ok(report)
    }
}
