//! # viewport-audit
//!
//! Mobile-friendliness audits over artifacts collected from a web page.
//!
//! The built-in `viewport` audit checks that the page's
//! `<meta name="viewport">` content declares `width` or `initial-scale`,
//! and reports unknown properties or invalid values it encounters.
//!
//! ## Quick start
//!
//! ```
//! use viewport_audit::artifacts::ViewportInput;
//! use viewport_audit::audits::viewport;
//! use viewport_audit::result::RawValue;
//!
//! let result = viewport::evaluate(&ViewportInput::from("width=device-width, initial-scale=1"));
//! assert_eq!(result.raw_value, RawValue::Boolean(true));
//! assert!(result.debug_string.is_none());
//!
//! let result = viewport::evaluate(&ViewportInput::Missing);
//! assert_eq!(result.raw_value, RawValue::Indeterminate);
//! ```
//!
//! ## Architecture
//!
//! 1. **[`artifacts`]**: named page artifacts loaded from JSON.
//! 2. **[`parser`]**: meta-viewport content parser behind the
//!    [`parser::ViewportContentParser`] trait.
//! 3. **[`audits`]**: audit metadata records and the name-keyed
//!    [`audits::Registry`].
//! 4. **[`check`]**: run enabled audits over one file or a directory of files.
//! 5. **[`result`]**: [`result::AuditResult`] and per-source [`result::CheckReport`].
//! 6. **[`config`]** and **[`output`]**: TOML configuration and report rendering.

pub mod artifacts;
pub mod audits;
pub mod check;
pub mod config;
pub mod output;
pub mod parser;
pub mod result;
