//! Human-readable colored text formatter.

use crate::result::{CheckReport, CheckStatus, RawValue};
use colored::Colorize;

/// Formats check reports as ANSI-colored text.
///
/// Each report renders a header with its source, one line per audit with
/// its diagnostic indented below, and a `Result:` line.
pub fn format(reports: &[CheckReport]) -> String {
    let mut out = String::new();
    for report in reports {
        format_report(&mut out, report);
    }
    out
}

fn format_report(out: &mut String, report: &CheckReport) {
    out.push_str(&format!(
        "\n{}\n",
        format!("  Viewport Audit: {}  ", report.source)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Checked: {}\n\n", report.checked_at));

    if let Some(ref error) = report.error {
        out.push_str(&format!("  [{}] {}\n\n", "ERROR".red().bold(), error));
    }

    for named in &report.results {
        let icon = match named.result.raw_value {
            RawValue::Boolean(true) => "PASS".green().bold().to_string(),
            RawValue::Boolean(false) => "FAIL".red().bold().to_string(),
            RawValue::Indeterminate => " N/A".yellow().bold().to_string(),
        };
        out.push_str(&format!(
            "  [{icon}] {name:<20} {category}\n",
            name = named.audit,
            category = named.category.dimmed(),
        ));
        if let Some(ref debug) = named.result.debug_string {
            out.push_str(&format!("         > {}\n", debug.dimmed()));
        }
    }
    if !report.results.is_empty() {
        out.push('\n');
    }

    let status_str = match report.status {
        CheckStatus::Passed => "PASSED".green().bold().to_string(),
        CheckStatus::Warning => "WARNING".yellow().bold().to_string(),
        CheckStatus::Failed => "FAILED".red().bold().to_string(),
    };
    let (passed, failed, indeterminate) = report.count_by_outcome();
    out.push_str(&format!(
        "Result: {status_str}  |  {passed} passed, {failed} failed, {indeterminate} indeterminate\n",
    ));
}
