//! Project-mode scanning with include-graph traversal.
//!
//! A project root is a directory of script files. Files may pull others in
//! with `#include "relative/path"`; traversal is depth-first and guarded by
//! a per-parse visited set of canonicalized paths, so mutually or
//! self-including files terminate.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::base::SourceUnit;
use crate::error::Error;
use crate::parser::scan_unit;
use crate::symbols::SignatureTable;

static INCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?mi)^\s*#include\s+"([^"]+)""#).unwrap());

/// File extensions treated as script sources during directory traversal.
const SCRIPT_EXTENSIONS: [&str; 2] = ["zs", "zsc"];

/// Scans every script under `root`, following `#include` directives.
///
/// Returns the total number of functions found. Unreadable or unresolvable
/// files are skipped with a warning; only an unreadable root itself is an
/// error.
pub fn scan_project(root: &Path, table: &mut SignatureTable) -> Result<usize, Error> {
    if !root.is_dir() {
        return Err(Error::ProjectRoot(root.to_path_buf()));
    }
    let mut files = Vec::new();
    collect_script_files(root, &mut files)?;

    let mut visited = FxHashSet::default();
    let mut total = 0usize;
    for file in files {
        total += scan_file(root, &file, table, &mut visited);
    }
    debug!(root = %root.display(), functions = total, "scanned project");
    Ok(total)
}

fn collect_script_files(dir: &Path, results: &mut Vec<PathBuf>) -> Result<(), Error> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_script_files(&path, results)?;
        } else if has_script_extension(&path) {
            results.push(path);
        }
    }
    Ok(())
}

fn has_script_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Scans one file, then its includes, each path at most once per pass.
fn scan_file(
    root: &Path,
    path: &Path,
    table: &mut SignatureTable,
    visited: &mut FxHashSet<PathBuf>,
) -> usize {
    let normalized = match path.canonicalize() {
        Ok(p) => p,
        Err(err) => {
            warn!(path = %path.display(), %err, "skipping unresolvable file");
            return 0;
        }
    };
    if !visited.insert(normalized.clone()) {
        trace!(path = %normalized.display(), "already visited in this pass");
        return 0;
    }
    let text = match std::fs::read_to_string(&normalized) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %normalized.display(), %err, "skipping unreadable file");
            return 0;
        }
    };

    let unit = SourceUnit::new(normalized.display().to_string(), text);
    let mut total = scan_unit(&unit, table);

    for caps in INCLUDE_RE.captures_iter(&unit.text) {
        let target = &caps[1];
        match resolve_include(root, &normalized, target) {
            Some(resolved) => total += scan_file(root, &resolved, table, visited),
            None => warn!(from = %normalized.display(), target, "unresolved include"),
        }
    }
    total
}

/// Include paths are written relative to the project root, the archive
/// convention for this dialect; paths relative to the including file are
/// accepted as a fallback.
fn resolve_include(root: &Path, from: &Path, target: &str) -> Option<PathBuf> {
    let from_root = root.join(target);
    if from_root.is_file() {
        return Some(from_root);
    }
    let sibling = from.parent()?.join(target);
    sibling.is_file().then_some(sibling)
}
