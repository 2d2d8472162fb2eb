//! Configuration loading.
//!
//! The default configuration file is `viewport-audit.toml` in the current
//! working directory. Every field has a default, so the file can be omitted.
//!
//! ```toml
//! [strict]
//! enabled = true      # diagnostics on passing audits fail the check
//!
//! [audits]
//! viewport = false    # skip the viewport audit
//! ```
//!
//! ```rust,no_run
//! use viewport_audit::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(config.is_audit_enabled("viewport"));
//! ```

use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "viewport-audit.toml";

/// Main configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// When strict mode is enabled, a passing audit that still reports a
    /// diagnostic fails the check.
    pub strict: StrictConfig,
    /// Per-audit on/off toggles.
    pub audits: AuditsConfig,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

/// Per-audit on/off toggles. Every audit defaults to enabled.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AuditsConfig {
    /// Mobile-friendly viewport meta tag.
    pub viewport: bool,
}

impl Default for AuditsConfig {
    fn default() -> Self {
        AuditsConfig { viewport: true }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if the named audit is enabled.
    ///
    /// Unknown audit names are considered enabled.
    ///
    /// ```
    /// use viewport_audit::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_audit_enabled("viewport"));
    /// assert!(config.is_audit_enabled("some-other-audit"));
    /// ```
    pub fn is_audit_enabled(&self, name: &str) -> bool {
        match name {
            "viewport" => self.audits.viewport,
            _ => true,
        }
    }
}
