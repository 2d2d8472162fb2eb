//! Output formatting for check reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |

pub mod json;
pub mod pretty;

use crate::result::CheckReport;

/// Supported output formats.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Formats check reports in the requested [`OutputFormat`].
///
/// ```rust,no_run
/// use viewport_audit::output::{format_reports, OutputFormat};
/// # use viewport_audit::result::CheckReport;
/// # fn example(reports: &[CheckReport]) {
/// let json = format_reports(reports, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_reports(reports: &[CheckReport], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(reports),
        OutputFormat::Json => json::format(reports),
    }
}
