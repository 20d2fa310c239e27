//! Per-track layout from TOML (`[configuration]` and `[dictionary]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wanxiang_application::ArtifactLayout;

/// Raw artifact layout from TOML
///
/// Every field is optional; unset fields fall back to the built-in layout of
/// the track the section belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileArtifactConfig {
    /// Asset name to download from the release
    pub asset: Option<String>,
    /// Archive filename inside the download directory
    pub archive: Option<String>,
    /// Extraction directory inside the download directory
    pub extract_dir: Option<String>,
    /// Subdirectory of the archive to install (empty string for the root)
    pub content_dir: Option<String>,
    /// Merge target
    pub destination: Option<String>,
}

impl FileArtifactConfig {
    /// Overlay the configured fields on `base`.
    pub fn apply_to(&self, base: ArtifactLayout) -> ArtifactLayout {
        ArtifactLayout {
            asset_name: self.asset.clone().unwrap_or(base.asset_name),
            archive_name: self.archive.clone().unwrap_or(base.archive_name),
            extract_dir: self.extract_dir.clone().unwrap_or(base.extract_dir),
            content_subdir: match &self.content_dir {
                Some(dir) if dir.is_empty() => None,
                Some(dir) => Some(dir.clone()),
                None => base.content_subdir,
            },
            destination: self
                .destination
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(base.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_keep_base() {
        let layout = FileArtifactConfig::default().apply_to(ArtifactLayout::dictionary_default());
        assert_eq!(layout, ArtifactLayout::dictionary_default());
    }

    #[test]
    fn test_empty_content_dir_clears_subdir() {
        let file = FileArtifactConfig {
            content_dir: Some(String::new()),
            destination: Some("/opt/rime/dicts".to_string()),
            ..Default::default()
        };
        let layout = file.apply_to(ArtifactLayout::dictionary_default());
        assert_eq!(layout.content_subdir, None);
        assert_eq!(layout.destination, PathBuf::from("/opt/rime/dicts"));
        assert_eq!(layout.asset_name, "base-dicts.zip");
    }
}
