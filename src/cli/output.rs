//! Output formatting for run reports
//!
//! Human output is the single summary line printed after the per-tool lines.
//! JSON and YAML carry the full [`RunReport`] for scripting.

use anyhow::{Context, Result};

use crate::regen::{RunReport, RunSummary};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary line
    Human,
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
}

/// Output formatter for run reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize run report to YAML")
            }
        }
    }

    fn format_human(&self, report: &RunReport) -> String {
        let line = summary_line(&report.summary, report.policy.reports_updates());
        if report.outcomes.is_empty() {
            line
        } else {
            format!("\n{}", line)
        }
    }
}

/// `Summary: G generated, U updated, S skipped`, without the updated count
/// when the policy never updates.
pub fn summary_line(summary: &RunSummary, include_updated: bool) -> String {
    if include_updated {
        summary.to_string()
    } else {
        format!(
            "Summary: {} generated, {} skipped",
            summary.generated, summary.skipped
        )
    }
}
