//! Local paths from TOML (`[paths]` section)

use serde::{Deserialize, Serialize};

/// Raw path configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// Scratch directory for downloads and extraction
    pub download_dir: String,
    /// Marker file holding the installed configuration version
    pub marker_file: String,
    /// Rewrite the marker after a successful configuration install
    pub record_installed_version: bool,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            download_dir: "./tmp".to_string(),
            marker_file: "version.txt".to_string(),
            record_installed_version: true,
        }
    }
}
