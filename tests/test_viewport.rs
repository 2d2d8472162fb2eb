use viewport_audit::artifacts::{Artifacts, ViewportInput};
use viewport_audit::audits::viewport::{
    self, ViewportEvaluator, MISSING_VIEWPORT_MESSAGE,
};
use viewport_audit::parser::{ParsedViewportContent, ViewportContentParser, ViewportValue};
use viewport_audit::result::{AuditResult, RawValue};

fn evaluate(content: &str) -> AuditResult {
    viewport::evaluate(&ViewportInput::from(content))
}

// ---------------------------------------------------------------------------
// Passing pages
// ---------------------------------------------------------------------------

#[test]
fn width_and_initial_scale_pass_without_diagnostic() {
    let result = evaluate("width=device-width, initial-scale=1");
    assert_eq!(result.raw_value, RawValue::Boolean(true));
    assert_eq!(result.debug_string, None);
}

#[test]
fn width_alone_passes() {
    assert!(evaluate("width=320").raw_value.is_pass());
}

#[test]
fn initial_scale_alone_passes() {
    assert!(evaluate("initial-scale=1.0").raw_value.is_pass());
}

#[test]
fn zero_width_falls_back_to_initial_scale() {
    assert!(!evaluate("width=0").raw_value.is_pass());
    assert!(evaluate("width=0, initial-scale=1").raw_value.is_pass());
}

// ---------------------------------------------------------------------------
// Failing pages
// ---------------------------------------------------------------------------

#[test]
fn user_scalable_only_fails() {
    let result = evaluate("user-scalable=no");
    assert_eq!(result.raw_value, RawValue::Boolean(false));
    assert_eq!(result.debug_string, None);
}

#[test]
fn empty_content_fails() {
    let result = evaluate("");
    assert_eq!(result.raw_value, RawValue::Boolean(false));
    assert_eq!(result.debug_string, None);
}

#[test]
fn misspelled_width_fails_with_properties_diagnostic() {
    let result = evaluate("wdth=300");
    assert_eq!(result.raw_value, RawValue::Boolean(false));
    assert_eq!(
        result.debug_string.as_deref(),
        Some("Invalid properties found: wdth.")
    );
}

#[test]
fn invalid_width_value_fails_with_values_diagnostic() {
    let result = evaluate("width=wide");
    assert_eq!(result.raw_value, RawValue::Boolean(false));
    let debug = result.debug_string.unwrap();
    assert!(debug.contains("Invalid values found:"));
    assert!(debug.contains("width=wide"));
}

// ---------------------------------------------------------------------------
// Diagnostics on passing pages
// ---------------------------------------------------------------------------

#[test]
fn unknown_property_on_passing_page_is_reported() {
    let result = evaluate("width=device-width, minimal-ui=yes");
    assert!(result.raw_value.is_pass());
    assert!(result
        .debug_string
        .unwrap()
        .contains("Invalid properties found: minimal-ui"));
}

#[test]
fn both_diagnostics_are_joined_and_trimmed() {
    let result = evaluate("width=device-width, maximum-scale=big, foo=bar");
    assert_eq!(
        result.debug_string.as_deref(),
        Some("Invalid properties found: foo. Invalid values found: maximum-scale=big.")
    );
}

// ---------------------------------------------------------------------------
// Missing artifact
// ---------------------------------------------------------------------------

#[test]
fn missing_input_is_indeterminate() {
    let result = viewport::evaluate(&ViewportInput::Missing);
    assert_eq!(result.raw_value, RawValue::Indeterminate);
    assert_eq!(result.debug_string.as_deref(), Some(MISSING_VIEWPORT_MESSAGE));
}

#[test]
fn non_string_artifacts_are_indeterminate() {
    for json in [r#"{"Viewport": 42}"#, r#"{"Viewport": null}"#, r#"{}"#] {
        let artifacts = Artifacts::from_json(json).unwrap();
        let result = viewport::audit(&artifacts);
        assert_eq!(result.raw_value, RawValue::Indeterminate, "input: {json}");
    }
}

#[test]
fn indeterminate_serializes_as_minus_one() {
    let result = viewport::evaluate(&ViewportInput::Missing);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["rawValue"], -1);
    assert_eq!(json["debugString"], MISSING_VIEWPORT_MESSAGE);
}

#[test]
fn passing_result_omits_debug_string_in_json() {
    let json = serde_json::to_value(evaluate("width=device-width")).unwrap();
    assert_eq!(json["rawValue"], true);
    assert!(json.get("debugString").is_none());
}

// ---------------------------------------------------------------------------
// Injected parser
// ---------------------------------------------------------------------------

struct FixedParser(ParsedViewportContent);

impl ViewportContentParser for FixedParser {
    fn parse(&self, _content: &str) -> ParsedViewportContent {
        self.0.clone()
    }
}

#[test]
fn evaluator_uses_injected_parser() {
    let mut parsed = ParsedViewportContent::default();
    parsed
        .valid_properties
        .insert("initial-scale".to_string(), ViewportValue::Number(2.0));
    let evaluator = ViewportEvaluator::new(FixedParser(parsed));

    let result = evaluator.evaluate(&ViewportInput::from("anything"));
    assert!(result.raw_value.is_pass());
}

#[test]
fn evaluator_skips_parser_for_missing_input() {
    let evaluator = ViewportEvaluator::new(FixedParser(ParsedViewportContent::default()));
    let result = evaluator.evaluate(&ViewportInput::Missing);
    assert_eq!(result.raw_value, RawValue::Indeterminate);
}
