//! Error types for archive, project, and settings operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading sources or servicing queries.
///
/// Grammar non-matches, unresolvable argument positions, and unbalanced
/// braces are not represented here: the scanner skips, the resolver falls
/// back to index 0, and brace depth is floored at zero.
#[derive(Debug, Error)]
pub enum Error {
    /// The archive path setting has not been configured.
    #[error("archive path is not configured; set `zscript.archivePath` in the editor settings")]
    MissingArchivePath,

    /// ZIP archive error.
    #[error("archive error: {0}")]
    Archive(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Editor settings could not be parsed.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Project root is missing or not a directory.
    #[error("project root not found: {}", .0.display())]
    ProjectRoot(PathBuf),
}

impl Error {
    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}
