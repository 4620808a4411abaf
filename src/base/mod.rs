//! Foundation types for the scanner and query layers.
//!
//! This module provides:
//! - [`SourceUnit`] - a named block of source text to scan
//! - [`fold_name`] - case folding for table lookup keys
//! - [`LANGUAGE_ID`], [`is_supported_language`] - editor language-tag gate
//!
//! This module has NO dependencies on other crate modules.

use smol_str::SmolStr;

/// Language identifier editors report for documents in this dialect.
pub const LANGUAGE_ID: &str = "zscript";

/// True when an editor document's language tag selects this dialect.
///
/// The scan and query entry points are only meant to be invoked for
/// documents that pass this gate.
pub fn is_supported_language(tag: &str) -> bool {
    tag.eq_ignore_ascii_case(LANGUAGE_ID)
}

/// Case-folds an identifier for table lookups.
///
/// The dialect is case-insensitive; identifiers are ASCII in practice, so
/// ASCII folding matches how the engine itself compares names.
pub fn fold_name(name: &str) -> SmolStr {
    SmolStr::new(name.to_ascii_lowercase())
}

/// A named block of source text to be scanned: a file on disk or an
/// archive entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path or archive-entry name. Used for diagnostics only.
    pub name: String,
    /// Raw text, comments not yet stripped.
    pub text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
