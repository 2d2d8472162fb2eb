//! JSON output formatter.

use crate::result::CheckReport;

/// Formats check reports as a pretty-printed JSON array.
///
/// # Panics
///
/// Panics if a report cannot be serialized (should not happen with valid data).
pub fn format(reports: &[CheckReport]) -> String {
    let mut out = serde_json::to_string_pretty(reports).expect("JSON serialization failed");
    out.push('\n');
    out
}
