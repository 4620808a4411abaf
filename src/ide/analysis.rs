//! AnalysisHost — owned state for scanning and querying.
//!
//! The host owns the signature table and the set of project roots already
//! parsed, behind a single lock. Editor events can fire concurrently
//! (a document opens while an archive re-scan runs); the write lock
//! serializes the mutations so the table never holds an interleaved
//! partial overwrite.

use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::base::SourceUnit;
use crate::error::Error;
use crate::ide::completion::{CompletionItem, completions};
use crate::ide::signature_help::{SignatureHelp, active_parameter, find_call_context};
use crate::parser::scan_unit;
use crate::project::config::Settings;
use crate::project::{archive, includes};
use crate::symbols::{FunctionSignature, SignatureTable};

#[derive(Default)]
struct HostState {
    table: SignatureTable,
    parsed_roots: FxHashSet<PathBuf>,
}

/// Owns all mutable state for the scan and query layer.
///
/// Scans mutate under the write lock; queries read under the read lock
/// and return owned data, so callers never hold a lock across their own
/// work.
#[derive(Default)]
pub struct AnalysisHost {
    state: RwLock<HostState>,
}

impl AnalysisHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a single in-memory document into the table.
    /// Returns the number of functions found.
    pub fn scan_text(&self, name: &str, text: &str) -> usize {
        let unit = SourceUnit::new(name, text);
        scan_unit(&unit, &mut self.state.write().table)
    }

    /// Clears the table and repopulates it from every script entry in the
    /// archive. Entries that fail to read are skipped, keeping partial
    /// results.
    pub fn scan_archive(&self, path: &Path) -> Result<usize, Error> {
        let mut state = self.state.write();
        state.table.clear();
        archive::scan_archive(path, &mut state.table)
    }

    /// Reads the archive path from `settings` and scans it.
    pub fn scan_configured_archive(&self, settings: &Settings) -> Result<usize, Error> {
        self.scan_archive(settings.require_archive_path()?)
    }

    /// Scans a project root once per host lifetime, following includes.
    ///
    /// Project signatures are added on top of whatever the table already
    /// holds; repeated calls for the same canonical root are no-ops.
    pub fn scan_project(&self, root: &Path) -> Result<usize, Error> {
        if !root.is_dir() {
            return Err(Error::ProjectRoot(root.to_path_buf()));
        }
        let canonical = root.canonicalize()?;
        let mut state = self.state.write();
        if state.parsed_roots.contains(&canonical) {
            debug!(root = %canonical.display(), "project root already parsed");
            return Ok(0);
        }
        let found = includes::scan_project(&canonical, &mut state.table)?;
        state.parsed_roots.insert(canonical);
        Ok(found)
    }

    /// Drops the table and the parsed-roots set. The next scans start
    /// from nothing.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.table.clear();
        state.parsed_roots.clear();
    }

    /// Number of signatures currently stored.
    pub fn len(&self) -> usize {
        self.state.read().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().table.is_empty()
    }

    /// Case-insensitive signature lookup.
    pub fn lookup(&self, name: &str) -> Option<FunctionSignature> {
        self.state.read().table.lookup(name).cloned()
    }

    /// Completion items for every function matching the prefix.
    pub fn completions(&self, prefix: &str) -> Vec<CompletionItem> {
        completions(&self.state.read().table, prefix)
    }

    /// Signature help for the current line's text up to the cursor.
    ///
    /// Returns `None` when the cursor is not inside an open argument list
    /// or the function is unknown.
    pub fn signature_help(&self, line_to_cursor: &str) -> Option<SignatureHelp> {
        let (name, args_text) = find_call_context(line_to_cursor)?;
        let signature = self.state.read().table.lookup(name).cloned()?;
        let active = active_parameter(&signature, args_text);
        debug!(function = name, active, "providing signature help");
        Some(SignatureHelp {
            signature,
            active_parameter: active,
        })
    }
}
