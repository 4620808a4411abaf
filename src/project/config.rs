//! Editor-facing configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Settings key under which editors surface the archive location.
pub const ARCHIVE_PATH_SETTING: &str = "zscript.archivePath";

/// Configuration supplied by the host editor.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Path to the game archive containing the built-in scripts.
    #[serde(default)]
    pub archive_path: Option<PathBuf>,
}

impl Settings {
    /// Parses settings from the editor's JSON configuration blob.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured archive path, or a user-facing error when unset.
    pub fn require_archive_path(&self) -> Result<&Path, Error> {
        self.archive_path
            .as_deref()
            .ok_or(Error::MissingArchivePath)
    }
}
