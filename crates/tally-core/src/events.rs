//! Structured analysis events
//!
//! The analyzer reports what it did through an [`EventSink`] handed to it,
//! rather than writing to a global logger directly. [`TracingSink`] is the
//! default and forwards events to `tracing`.

use std::sync::Mutex;

use serde::Serialize;

/// Emitted once per completed analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisEvent {
    /// Type name of the strategy that ran
    pub strategy: &'static str,
    /// Number of transactions analyzed
    pub transactions: usize,
    /// Number of entries in the produced report
    pub entries: usize,
    /// Number of observers that received the completion notice
    pub notified: usize,
}

/// Receiver for analysis events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &AnalysisEvent);
}

/// Forwards events to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &AnalysisEvent) {
        tracing::info!(
            strategy = event.strategy,
            transactions = event.transactions,
            entries = event.entries,
            notified = event.notified,
            "Analysis completed"
        );
    }
}

/// Discards events
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &AnalysisEvent) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalysisEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<AnalysisEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &AnalysisEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> AnalysisEvent {
        AnalysisEvent {
            strategy: "TrendAnalysisStrategy",
            transactions: 3,
            entries: 3,
            notified: 1,
        }
    }

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        sink.emit(&event());
        sink.emit(&event());
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0], event());
    }

    #[test]
    fn test_null_and_tracing_sinks_accept_events() {
        NullSink.emit(&event());
        TracingSink.emit(&event());
    }
}
