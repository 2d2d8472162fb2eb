use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Primary outcome of an audit before any report-level scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue {
    Boolean(bool),
    /// The audit could not be evaluated because its input was undeterminable.
    /// Serialized as `-1`.
    Indeterminate,
}

impl RawValue {
    pub fn is_pass(&self) -> bool {
        matches!(self, RawValue::Boolean(true))
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Boolean(b) => serializer.serialize_bool(*b),
            RawValue::Indeterminate => serializer.serialize_i64(-1),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Boolean(b) => write!(f, "{b}"),
            RawValue::Indeterminate => write!(f, "-1"),
        }
    }
}

/// Result of evaluating one audit against one set of artifacts.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub raw_value: RawValue,
    /// Human-readable diagnostic; `None` when nothing noteworthy was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_string: Option<String>,
}

impl AuditResult {
    /// Builds a result, dropping an empty diagnostic.
    pub fn new(raw_value: RawValue, debug_string: impl Into<String>) -> Self {
        let debug_string = debug_string.into();
        AuditResult {
            raw_value,
            debug_string: if debug_string.is_empty() {
                None
            } else {
                Some(debug_string)
            },
        }
    }

    pub fn indeterminate(debug_string: &str) -> Self {
        AuditResult::new(RawValue::Indeterminate, debug_string)
    }
}

/// An [`AuditResult`] tagged with the audit that produced it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NamedResult {
    pub audit: String,
    pub category: String,
    #[serde(flatten)]
    pub result: AuditResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

/// Outcome of running the enabled audits against one artifacts source.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckReport {
    pub source: String,
    pub checked_at: String,
    pub status: CheckStatus,
    pub passed: bool,
    pub results: Vec<NamedResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    pub fn from_results(source: &str, results: Vec<NamedResult>, strict: bool) -> Self {
        let status = compute_status(&results, strict);
        CheckReport {
            source: source.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            status,
            passed: status != CheckStatus::Failed,
            results,
            error: None,
        }
    }

    /// Report for a source whose artifacts could not be loaded.
    pub fn errored(source: &str, error: &str) -> Self {
        CheckReport {
            source: source.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            status: CheckStatus::Failed,
            passed: false,
            results: vec![],
            error: Some(error.to_string()),
        }
    }

    /// Counts `(passed, failed, indeterminate)` results in a single pass.
    pub fn count_by_outcome(&self) -> (usize, usize, usize) {
        self.results
            .iter()
            .fold((0, 0, 0), |(p, f, i), r| match r.result.raw_value {
                RawValue::Boolean(true) => (p + 1, f, i),
                RawValue::Boolean(false) => (p, f + 1, i),
                RawValue::Indeterminate => (p, f, i + 1),
            })
    }
}

fn compute_status(results: &[NamedResult], strict: bool) -> CheckStatus {
    let (has_failure, has_diagnostic) =
        results
            .iter()
            .fold((false, false), |(fail, diag), r| {
                (
                    fail || !r.result.raw_value.is_pass(),
                    diag || r.result.debug_string.is_some(),
                )
            });

    if has_failure {
        CheckStatus::Failed
    } else if has_diagnostic {
        if strict {
            CheckStatus::Failed
        } else {
            CheckStatus::Warning
        }
    } else {
        CheckStatus::Passed
    }
}
