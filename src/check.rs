//! Check orchestration.
//!
//! [`run_check`] evaluates every enabled audit in a [`Registry`] against one
//! set of [`Artifacts`]. [`check_path`] does the same for an artifacts file
//! or for every `*.json` file under a directory, evaluating files in
//! parallel via [rayon].

use crate::artifacts::Artifacts;
use crate::audits::Registry;
use crate::config::Config;
use crate::result::{CheckReport, NamedResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Runs every audit enabled in `config` against `artifacts`.
///
/// Results appear in registry (name) order.
///
/// # Examples
///
/// ```
/// use viewport_audit::artifacts::Artifacts;
/// use viewport_audit::audits::Registry;
/// use viewport_audit::check::run_check;
/// use viewport_audit::config::Config;
///
/// let artifacts = Artifacts::with_viewport("width=device-width, initial-scale=1");
/// let report = run_check("page", &artifacts, &Registry::builtin(), &Config::default());
/// assert!(report.passed);
/// ```
pub fn run_check(
    source: &str,
    artifacts: &Artifacts,
    registry: &Registry,
    config: &Config,
) -> CheckReport {
    let results = registry
        .iter()
        .filter(|audit| config.is_audit_enabled(audit.name()))
        .map(|audit| NamedResult {
            audit: audit.name().to_string(),
            category: audit.meta.category.to_string(),
            result: audit.run(artifacts),
        })
        .collect();

    CheckReport::from_results(source, results, config.strict.enabled)
}

/// Checks an artifacts file, or every `*.json` file under a directory.
///
/// Files that cannot be loaded produce an errored [`CheckReport`] rather
/// than aborting the other files. Reports are ordered by path.
pub fn check_path(path: &Path, registry: &Registry, config: &Config) -> Vec<CheckReport> {
    let files = if path.is_dir() {
        collect_files(path, &["json"])
    } else {
        vec![path.to_path_buf()]
    };

    files
        .par_iter()
        .map(|file| {
            let source = file.display().to_string();
            match Artifacts::load(file) {
                Ok(artifacts) => run_check(&source, &artifacts, registry, config),
                Err(e) => {
                    eprintln!("Warning: {e}");
                    CheckReport::errored(&source, &e)
                }
            }
        })
        .collect()
}

/// Recursively collects files matching the given extensions, sorted by path.
///
/// ```rust,no_run
/// use std::path::Path;
/// use viewport_audit::check::collect_files;
///
/// let artifact_files = collect_files(Path::new("./artifacts"), &["json"]);
/// ```
pub fn collect_files(path: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();
            if extensions.contains(&ext_str.as_str()) {
                files.push(path.to_path_buf());
            }
        }
    }
    files.sort();
    files
}
