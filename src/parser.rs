//! Meta-viewport content parser.
//!
//! Splits the `content` attribute of a `<meta name="viewport">` tag into
//! recognized properties with valid values, recognized properties with
//! invalid values, and unknown properties. Parsing follows the CSS Device
//! Adaptation algorithm: properties are `name=value` pairs separated by `,`
//! or `;`, whitespace around `=` is ignored, and malformed fragments are
//! skipped rather than rejected. Parsing never fails.
//!
//! # Examples
//!
//! ```
//! use viewport_audit::parser::{MetaViewportParser, ViewportContentParser, ViewportValue};
//!
//! let parsed = MetaViewportParser.parse("width=device-width, initial-scale=1");
//! assert_eq!(parsed.valid_properties["initial-scale"], ViewportValue::Number(1.0));
//! assert!(parsed.unknown_properties.is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Property names recognized by the parser.
pub const KNOWN_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "initial-scale",
    "minimum-scale",
    "maximum-scale",
    "user-scalable",
    "shrink-to-fit",
];

/// Leading numeric prefix, with the same semantics as JavaScript `parseFloat`:
/// `"1.5abc"` yields `1.5`, `"abc"` yields nothing.
static RE_FLOAT_PREFIX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Keyword values accepted for any recognized property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportKeyword {
    Yes,
    No,
    DeviceWidth,
    DeviceHeight,
}

impl ViewportKeyword {
    fn from_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "yes" => Some(ViewportKeyword::Yes),
            "no" => Some(ViewportKeyword::No),
            "device-width" => Some(ViewportKeyword::DeviceWidth),
            "device-height" => Some(ViewportKeyword::DeviceHeight),
            _ => None,
        }
    }
}

impl fmt::Display for ViewportKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportKeyword::Yes => write!(f, "yes"),
            ViewportKeyword::No => write!(f, "no"),
            ViewportKeyword::DeviceWidth => write!(f, "device-width"),
            ViewportKeyword::DeviceHeight => write!(f, "device-height"),
        }
    }
}

/// A successfully parsed property value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ViewportValue {
    Number(f64),
    Keyword(ViewportKeyword),
}

impl ViewportValue {
    /// Returns `true` unless the value is the number zero (or NaN).
    ///
    /// `width=0` therefore does not count as a declared width, while any
    /// keyword such as `device-width` does.
    pub fn is_truthy(&self) -> bool {
        match self {
            ViewportValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ViewportValue::Keyword(_) => true,
        }
    }

    fn classify(raw: &str) -> Option<Self> {
        if let Some(n) = parse_float_prefix(raw) {
            return Some(ViewportValue::Number(n));
        }
        ViewportKeyword::from_value(raw).map(ViewportValue::Keyword)
    }
}

impl fmt::Display for ViewportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportValue::Number(n) => write!(f, "{n}"),
            ViewportValue::Keyword(k) => write!(f, "{k}"),
        }
    }
}

/// Result of parsing a meta-viewport content string.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedViewportContent {
    /// Recognized property name (lowercased) to its parsed value.
    pub valid_properties: BTreeMap<String, ViewportValue>,
    /// Recognized property name (lowercased) to the raw value that failed validation.
    pub invalid_values: BTreeMap<String, String>,
    /// Unrecognized property name to its raw value.
    pub unknown_properties: BTreeMap<String, String>,
}

impl ParsedViewportContent {
    /// Returns the value of `name` if it is valid and truthy.
    pub fn truthy(&self, name: &str) -> Option<&ViewportValue> {
        self.valid_properties.get(name).filter(|v| v.is_truthy())
    }

    fn set_property(&mut self, name: &str, raw_value: &str) {
        let lowered = name.to_ascii_lowercase();
        if !KNOWN_PROPERTIES.contains(&lowered.as_str()) {
            self.unknown_properties
                .insert(name.to_string(), raw_value.to_string());
            return;
        }

        match ViewportValue::classify(raw_value) {
            Some(value) => {
                self.valid_properties.insert(lowered, value);
            }
            None => {
                // A later invalid value clears an earlier valid one.
                self.valid_properties.remove(&lowered);
                self.invalid_values.insert(lowered, raw_value.to_string());
            }
        }
    }
}

/// Parses raw meta-viewport content into a [`ParsedViewportContent`].
///
/// Implementers must be [`Send`] + [`Sync`] so a single parser can serve
/// evaluations running in parallel.
pub trait ViewportContentParser: Send + Sync {
    fn parse(&self, content: &str) -> ParsedViewportContent;
}

/// Built-in parser implementing the CSS Device Adaptation algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaViewportParser;

impl ViewportContentParser for MetaViewportParser {
    fn parse(&self, content: &str) -> ParsedViewportContent {
        let bytes = content.as_bytes();
        let mut parsed = ParsedViewportContent::default();
        let mut i = 0;

        while i < bytes.len() {
            while i < bytes.len() && is_delimiter(bytes[i]) {
                i += 1;
            }
            if i < bytes.len() {
                i = parse_property(content, i, &mut parsed);
            }
        }

        parsed
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_separator(b: u8) -> bool {
    matches!(b, b',' | b';')
}

fn is_delimiter(b: u8) -> bool {
    is_whitespace(b) || is_separator(b) || b == b'='
}

/// Parses one `name=value` pair starting at byte `i` and returns the index
/// where scanning should resume.
///
/// All stop positions fall on ASCII delimiters or the end of input, so the
/// slices below are always on `char` boundaries.
fn parse_property(content: &str, mut i: usize, parsed: &mut ParsedViewportContent) -> usize {
    let bytes = content.as_bytes();

    let name_start = i;
    while i < bytes.len() && !is_delimiter(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() || is_separator(bytes[i]) {
        return i;
    }
    let name = &content[name_start..i];

    // Anything between the name and `=` is ignored.
    while i < bytes.len() && !is_separator(bytes[i]) && bytes[i] != b'=' {
        i += 1;
    }
    if i >= bytes.len() || is_separator(bytes[i]) {
        return i;
    }

    while i < bytes.len() && (is_whitespace(bytes[i]) || bytes[i] == b'=') {
        i += 1;
    }
    if i >= bytes.len() || is_separator(bytes[i]) {
        return i;
    }

    let value_start = i;
    while i < bytes.len() && !is_delimiter(bytes[i]) {
        i += 1;
    }
    parsed.set_property(name, &content[value_start..i]);
    i
}

/// Parses the longest numeric prefix of `raw`.
///
/// Returns `None` when `raw` does not start with a number.
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let m = RE_FLOAT_PREFIX.find(raw)?;
    let text = m.as_str();
    match text.trim_start_matches(['+', '-']) {
        "Infinity" if text.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => text.parse().ok(),
    }
}
