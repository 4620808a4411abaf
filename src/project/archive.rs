//! Game-archive scanning.
//!
//! The dialect's built-in scripts ship inside a ZIP archive under a fixed
//! top-level `zscript/` directory. Every non-directory entry in there,
//! except plain-text auxiliary files, is read as text and fed through the
//! line scanner.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::base::SourceUnit;
use crate::error::Error;
use crate::parser::scan_unit;
use crate::symbols::SignatureTable;

/// Top-level archive directory containing script entries.
pub const SCRIPT_DIR: &str = "zscript/";

/// True for entries the scanner should process. The comparison is
/// case-insensitive: archives in the wild mix `zscript/` and `ZSCRIPT/`.
fn is_script_entry(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with(SCRIPT_DIR) && !lower.ends_with(".txt")
}

/// Scans every script entry in the archive at `path` into `table`.
///
/// Returns the total number of functions found. Individual entries that
/// cannot be read are skipped with a warning; signatures already stored
/// from earlier entries are kept.
pub fn scan_archive(path: &Path, table: &mut SignatureTable) -> Result<usize, Error> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut total = 0usize;
    let mut files_processed = 0usize;

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(index, %err, "skipping unreadable archive entry");
                continue;
            }
        };
        if entry.is_dir() || !is_script_entry(entry.name()) {
            continue;
        }
        let name = entry.name().to_string();
        let mut text = String::new();
        if let Err(err) = entry.read_to_string(&mut text) {
            warn!(entry = %name, %err, "skipping unreadable archive entry");
            continue;
        }
        total += scan_unit(&SourceUnit::new(name, text), table);
        files_processed += 1;
    }

    debug!(
        archive = %path.display(),
        files = files_processed,
        functions = total,
        "scanned archive"
    );
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_filter() {
        assert!(is_script_entry("zscript/actors/actor.zs"));
        assert!(is_script_entry("ZSCRIPT/base.zs"));
        assert!(is_script_entry("zscript/constants"));
        assert!(!is_script_entry("zscript/license.txt"));
        assert!(!is_script_entry("graphics/titlepic.png"));
        assert!(!is_script_entry("mapinfo/common.txt"));
    }

    #[test]
    fn test_missing_archive_reports_io_error() {
        let mut table = SignatureTable::new();
        let err = scan_archive(Path::new("/nonexistent/archive.pk3"), &mut table).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(table.is_empty());
    }
}
