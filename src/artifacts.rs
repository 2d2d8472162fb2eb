//! Page artifacts consumed by audits.
//!
//! An upstream collection stage extracts named pieces of data from a page
//! (for example the `Viewport` meta-tag content) and hands them over as a
//! JSON object. [`Artifacts`] wraps that object; audits read the values they
//! declared in [`AuditMeta::required_artifacts`](crate::audits::AuditMeta::required_artifacts).
//!
//! # File format
//!
//! ```json
//! { "Viewport": "width=device-width, initial-scale=1" }
//! ```
//!
//! A collector that failed to determine a value may write `null`, a number,
//! or omit the key; all of these read as [`ViewportInput::Missing`].

use std::path::Path;

/// Name of the artifact holding the raw viewport meta-tag content.
pub const VIEWPORT: &str = "Viewport";

/// Named artifact values extracted from a single page.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Artifacts {
    values: serde_json::Map<String, serde_json::Value>,
}

impl Artifacts {
    /// Builds artifacts from a JSON object map.
    pub fn new(values: serde_json::Map<String, serde_json::Value>) -> Self {
        Artifacts { values }
    }

    /// Builds artifacts holding only a `Viewport` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewport_audit::artifacts::{Artifacts, ViewportInput};
    ///
    /// let artifacts = Artifacts::with_viewport("width=device-width");
    /// assert_eq!(
    ///     artifacts.viewport(),
    ///     ViewportInput::Present("width=device-width".to_string())
    /// );
    /// ```
    pub fn with_viewport(content: &str) -> Self {
        let mut values = serde_json::Map::new();
        values.insert(
            VIEWPORT.to_string(),
            serde_json::Value::String(content.to_string()),
        );
        Artifacts { values }
    }

    /// Loads artifacts from a JSON file whose root is an object.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the file cannot be read, is not valid
    /// JSON, or its root value is not an object.
    pub fn load(path: &Path) -> Result<Artifacts, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read artifacts {}: {}", path.display(), e))?;
        Self::from_json(&content)
            .map_err(|e| format!("Failed to parse artifacts {}: {}", path.display(), e))
    }

    /// Parses artifacts from a JSON string whose root is an object.
    pub fn from_json(content: &str) -> Result<Artifacts, String> {
        match serde_json::from_str::<serde_json::Value>(content).map_err(|e| e.to_string())? {
            serde_json::Value::Object(values) => Ok(Artifacts { values }),
            other => Err(format!("expected a JSON object, found {}", json_kind(&other))),
        }
    }

    /// Returns the raw value of a named artifact, if present.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    /// Returns the required artifact names that are absent.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.values.contains_key(*name))
            .collect()
    }

    /// Reads the `Viewport` artifact as a [`ViewportInput`].
    pub fn viewport(&self) -> ViewportInput {
        ViewportInput::from_artifact(self.get(VIEWPORT))
    }
}

/// The viewport meta-tag content handed to the viewport audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportInput {
    /// Raw `content` attribute of the viewport meta tag.
    Present(String),
    /// Extraction failed upstream: the artifact was absent or not a string.
    Missing,
}

impl ViewportInput {
    /// Only a JSON string counts as present content.
    pub fn from_artifact(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::String(s)) => ViewportInput::Present(s.clone()),
            _ => ViewportInput::Missing,
        }
    }
}

impl From<&str> for ViewportInput {
    fn from(content: &str) -> Self {
        ViewportInput::Present(content.to_string())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
