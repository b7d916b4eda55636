//! Text rendering of analysis reports

use crate::models::{Report, ReportValue};

const REPORT_RULE_WIDTH: usize = 40;
const SUMMARY_RULE_WIDTH: usize = 50;

/// Renders a report as a fixed-width text block
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render with a titled banner; list entries become indented bullets
    pub fn render(&self, report: &Report) -> String {
        let rule = "=".repeat(REPORT_RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "            Budget Analysis Report".to_string(),
            rule.clone(),
        ];

        for (label, value) in report.iter() {
            let value = match value {
                ReportValue::List(items) => format!("\n    - {}", items.join("\n    - ")),
                other => other.to_string(),
            };
            lines.push(format!("{:<20}: {}", label, value));
        }

        lines.push(rule);
        lines.join("\n")
    }
}

/// Render the starred summary view
pub fn render_summary(report: &Report) -> String {
    let stars = "*".repeat(SUMMARY_RULE_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&stars);
    out.push('\n');
    out.push_str("***** BUDGET ANALYSIS SUMMARY *****\n");
    out.push_str(&stars);
    out.push('\n');

    for (label, value) in report.iter() {
        match value {
            ReportValue::List(items) => {
                out.push_str(&format!("{:<20}:\n", label));
                for item in items {
                    out.push_str(&format!("   - {}\n", item));
                }
            }
            other => out.push_str(&format!("{:<20}: {}\n", label, other)),
        }
    }

    out.push_str(&stars);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalar_entries() {
        let report = Report::new()
            .with("Total Credit", 1500.0)
            .with("Anomalies Found", 0i64)
            .with("Anomaly Details", "None");

        let text = ReportGenerator::new().render(&report);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(40));
        assert_eq!(lines[1], "            Budget Analysis Report");
        assert_eq!(lines[3], "Total Credit        : 1500.0");
        assert_eq!(lines[4], "Anomalies Found     : 0");
        assert_eq!(lines[5], "Anomaly Details     : None");
        assert_eq!(lines[6], "=".repeat(40));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_list_as_bullets() {
        let report = Report::new().with(
            "Anomaly Details",
            vec!["first".to_string(), "second".to_string()],
        );

        let text = ReportGenerator::new().render(&report);
        assert!(text.contains("Anomaly Details     : \n    - first\n    - second"));
    }

    #[test]
    fn test_render_empty_report() {
        let text = ReportGenerator::new().render(&Report::new());
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_summary_lists() {
        let report = Report::new()
            .with("Mean Amount", 12.5)
            .with("Anomaly Details", vec!["odd one".to_string()]);

        let text = render_summary(&report);
        assert!(text.starts_with(&format!("\n{}\n", "*".repeat(50))));
        assert!(text.contains("***** BUDGET ANALYSIS SUMMARY *****"));
        assert!(text.contains("Mean Amount         : 12.5\n"));
        assert!(text.contains("Anomaly Details     :\n   - odd one\n"));
    }
}
