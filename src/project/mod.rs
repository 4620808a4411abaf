//! Project management: archive scanning, include traversal, and settings.

pub mod archive;
pub mod config;
pub mod includes;

pub use archive::{SCRIPT_DIR, scan_archive};
pub use config::{ARCHIVE_PATH_SETTING, Settings};
pub use includes::scan_project;
