//! Mobile-friendly viewport audit.
//!
//! Passes when the page's `<meta name="viewport">` content declares a
//! truthy `width` or `initial-scale`. Unknown properties and invalid values
//! do not fail the audit on their own but are reported in the diagnostic.
//!
//! | Input | `rawValue` | `debugString` |
//! |-------|-----------|---------------|
//! | `width=device-width, initial-scale=1` | `true` | none |
//! | `user-scalable=no` | `false` | none |
//! | `wdth=300` | `false` | `Invalid properties found: wdth.` |
//! | artifact missing or not a string | `-1` | `Error in determining viewport` |

use crate::artifacts::{Artifacts, ViewportInput, VIEWPORT};
use crate::audits::{AuditDefinition, AuditMeta};
use crate::parser::{MetaViewportParser, ParsedViewportContent, ViewportContentParser};
use crate::result::{AuditResult, RawValue};

pub const META: AuditMeta = AuditMeta {
    category: "Mobile Friendly",
    name: "viewport",
    description: "HTML has a `<meta name=\"viewport\">` tag containing `width` or `initial-scale`",
    help_text: "Add a viewport meta tag to optimize your app for mobile screens. \
        [Learn more](https://developers.google.com/web/tools/lighthouse/audits/has-viewport-meta-tag).",
    required_artifacts: &[VIEWPORT],
};

/// Diagnostic reported when the `Viewport` artifact is undeterminable.
pub const MISSING_VIEWPORT_MESSAGE: &str = "Error in determining viewport";

pub fn definition() -> AuditDefinition {
    AuditDefinition {
        meta: META,
        evaluate: audit,
    }
}

/// Evaluates the viewport policy over a parser of the caller's choosing.
#[derive(Debug, Clone, Default)]
pub struct ViewportEvaluator<P = MetaViewportParser> {
    parser: P,
}

impl<P: ViewportContentParser> ViewportEvaluator<P> {
    pub fn new(parser: P) -> Self {
        ViewportEvaluator { parser }
    }

    /// Evaluates raw viewport content.
    ///
    /// [`ViewportInput::Missing`] yields [`RawValue::Indeterminate`] with
    /// [`MISSING_VIEWPORT_MESSAGE`]; this never fails.
    pub fn evaluate(&self, input: &ViewportInput) -> AuditResult {
        let content = match input {
            ViewportInput::Present(content) => content,
            ViewportInput::Missing => return AuditResult::indeterminate(MISSING_VIEWPORT_MESSAGE),
        };

        let parsed = self.parser.parse(content);
        let has_mobile_viewport =
            parsed.truthy("width").is_some() || parsed.truthy("initial-scale").is_some();

        AuditResult::new(RawValue::Boolean(has_mobile_viewport), diagnostic(&parsed))
    }
}

/// Evaluates `input` with the built-in [`MetaViewportParser`].
///
/// # Examples
///
/// ```
/// use viewport_audit::artifacts::ViewportInput;
/// use viewport_audit::audits::viewport::evaluate;
/// use viewport_audit::result::RawValue;
///
/// let result = evaluate(&ViewportInput::from("wdth=300"));
/// assert_eq!(result.raw_value, RawValue::Boolean(false));
/// assert_eq!(result.debug_string.as_deref(), Some("Invalid properties found: wdth."));
/// ```
pub fn evaluate(input: &ViewportInput) -> AuditResult {
    ViewportEvaluator::new(MetaViewportParser).evaluate(input)
}

/// Registry entry point: evaluates the `Viewport` artifact.
pub fn audit(artifacts: &Artifacts) -> AuditResult {
    evaluate(&artifacts.viewport())
}

fn diagnostic(parsed: &ParsedViewportContent) -> String {
    let mut out = String::new();

    if !parsed.unknown_properties.is_empty() {
        let names: Vec<&str> = parsed.unknown_properties.keys().map(String::as_str).collect();
        out.push_str(&format!("Invalid properties found: {}. ", names.join(", ")));
    }
    if !parsed.invalid_values.is_empty() {
        let pairs: Vec<String> = parsed
            .invalid_values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        out.push_str(&format!("Invalid values found: {}. ", pairs.join(", ")));
    }

    out.trim_end().to_string()
}
