//! Audit descriptors and the audit registry.
//!
//! Every audit is a plain [`AuditDefinition`]: an immutable [`AuditMeta`]
//! record paired with an `evaluate` function pointer. The [`Registry`] maps
//! audit names to definitions so a runner can discover audits, check their
//! required artifacts, and evaluate them.
//!
//! | Audit | Category | Required artifacts |
//! |-------|----------|--------------------|
//! | [`viewport`] | Mobile Friendly | `Viewport` |

pub mod viewport;

use crate::artifacts::Artifacts;
use crate::result::AuditResult;
use std::collections::BTreeMap;
use std::fmt;

/// Static metadata describing an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    /// Report category the audit belongs to (e.g., `"Mobile Friendly"`).
    pub category: &'static str,
    /// Unique audit identifier (e.g., `"viewport"`).
    pub name: &'static str,
    /// One-line statement of what a passing page does.
    pub description: &'static str,
    /// Guidance on how to fix a failing page.
    pub help_text: &'static str,
    /// Artifact names the audit reads from [`Artifacts`].
    pub required_artifacts: &'static [&'static str],
}

/// An audit: its metadata and its evaluation entry point.
#[derive(Clone, Copy)]
pub struct AuditDefinition {
    pub meta: AuditMeta,
    pub evaluate: fn(&Artifacts) -> AuditResult,
}

impl fmt::Debug for AuditDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditDefinition")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

impl AuditDefinition {
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn run(&self, artifacts: &Artifacts) -> AuditResult {
        (self.evaluate)(artifacts)
    }
}

/// Name-keyed collection of audits. Iteration is in name order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    audits: BTreeMap<&'static str, AuditDefinition>,
}

impl Registry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Returns a registry holding every built-in audit.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewport_audit::artifacts::Artifacts;
    /// use viewport_audit::audits::Registry;
    ///
    /// let registry = Registry::builtin();
    /// let audit = registry.get("viewport").unwrap();
    /// let result = audit.run(&Artifacts::with_viewport("width=device-width"));
    /// assert!(result.raw_value.is_pass());
    /// ```
    pub fn builtin() -> Self {
        let mut registry = Registry::new();
        for definition in all_audits() {
            registry.audits.insert(definition.name(), definition);
        }
        registry
    }

    /// Adds an audit.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` if an audit with the same name is already registered.
    pub fn register(&mut self, definition: AuditDefinition) -> Result<(), String> {
        let name = definition.name();
        if self.audits.contains_key(name) {
            return Err(format!("Audit already registered: {name}"));
        }
        self.audits.insert(name, definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AuditDefinition> {
        self.audits.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuditDefinition> {
        self.audits.values()
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }
}

/// Returns every built-in [`AuditDefinition`].
pub fn all_audits() -> Vec<AuditDefinition> {
    vec![viewport::definition()]
}
