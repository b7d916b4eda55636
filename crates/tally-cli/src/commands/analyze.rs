//! Analysis command implementations

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::{
    import_file, render_summary, AnalysisConfig, AnalysisStrategy, Analyzer, ConsoleObserver,
    Observer, Report, ReportGenerator, Transaction,
};

use crate::cli::OutputFormat;

/// One strategy's report in JSON output
#[derive(Serialize)]
struct StrategyReport<'a> {
    strategy: &'static str,
    report: &'a Report,
}

/// Resolve a strategy name (or "all") to configured strategies
pub fn resolve_strategies(name: &str, config: &AnalysisConfig) -> Result<Vec<AnalysisStrategy>> {
    if name.trim().eq_ignore_ascii_case("all") {
        return Ok(AnalysisStrategy::all_with_config(config));
    }
    let strategy: AnalysisStrategy = name.parse()?;
    Ok(vec![strategy.configured(config)])
}

/// Render one report in the requested text format
pub fn render_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Report => ReportGenerator::new().render(report),
        OutputFormat::Summary => render_summary(report),
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
    }
}

/// Run each strategy in turn and collect the rendered output
///
/// When `observer` is given it is attached for the whole run and receives
/// one notification per strategy.
pub fn run_analysis<O: Observer + 'static>(
    transactions: Vec<Transaction>,
    strategies: &[AnalysisStrategy],
    format: OutputFormat,
    observer: Option<&Arc<O>>,
) -> Result<String> {
    let mut analyzer = Analyzer::new(transactions);
    if let Some(observer) = observer {
        analyzer.attach(observer);
    }

    let mut reports = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        analyzer.set_strategy(*strategy);
        let report = analyzer
            .analyze()
            .with_context(|| format!("{} analysis failed", strategy))?;
        reports.push((strategy.as_str(), report));
    }

    if format == OutputFormat::Json {
        let entries: Vec<StrategyReport<'_>> = reports
            .iter()
            .map(|(strategy, report)| StrategyReport {
                strategy: *strategy,
                report,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let sections: Vec<String> = reports
        .iter()
        .map(|(_, report)| render_report(report, format))
        .collect();
    Ok(sections.join("\n\n"))
}

pub fn cmd_analyze(
    file: &Path,
    strategy: &str,
    format: OutputFormat,
    config: &AnalysisConfig,
) -> Result<()> {
    let strategies = resolve_strategies(strategy, config)?;
    let outcome = import_file(file)
        .with_context(|| format!("Failed to read transactions from {}", file.display()))?;

    if outcome.skipped > 0 {
        tracing::warn!(skipped = outcome.skipped, "Some rows were skipped during import");
    }

    // Notifications on stdout would corrupt JSON output
    let output = if format == OutputFormat::Json {
        run_analysis::<ConsoleObserver>(outcome.transactions, &strategies, format, None)?
    } else {
        let console = Arc::new(ConsoleObserver);
        run_analysis(outcome.transactions, &strategies, format, Some(&console))?
    };

    println!("{}", output);
    Ok(())
}
