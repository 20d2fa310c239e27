//! Updater configuration: where each track downloads, extracts and installs.
//!
//! [`UpdaterConfig`] is built once at startup and handed to
//! [`RunUpdateUseCase`](crate::use_cases::run_update::RunUpdateUseCase).
//! Both tracks share the download directory, so their archive filenames and
//! extraction directories must be plain names that all differ from each other.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use wanxiang_domain::{ArtifactKind, NIGHTLY_TAG};

/// Invalid updater configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("{field} must be a plain name inside the download directory, got '{value}'")]
    NotAName { field: String, value: String },

    #[error("{field} both use '{value}'")]
    Collision { field: String, value: String },
}

/// Exactly one normal path component: no separators, `.`, `..` or roots.
fn is_plain_name(value: &str) -> bool {
    let mut components = Path::new(value).components();
    !value.contains(['/', '\\'])
        && matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
}

/// Per-track file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLayout {
    /// Asset to download from the selected release.
    pub asset_name: String,
    /// Filename of the downloaded archive inside the download directory.
    pub archive_name: String,
    /// Directory (inside the download directory) the archive expands into.
    pub extract_dir: String,
    /// Subdirectory of the expanded archive whose contents get installed.
    pub content_subdir: Option<String>,
    /// Merge target for the installed files.
    pub destination: PathBuf,
}

impl ArtifactLayout {
    pub fn configuration_default() -> Self {
        Self {
            asset_name: "rime-wanxiang-base.zip".to_string(),
            archive_name: "config.zip".to_string(),
            extract_dir: "config".to_string(),
            content_subdir: None,
            destination: PathBuf::from("."),
        }
    }

    pub fn dictionary_default() -> Self {
        Self {
            asset_name: "base-dicts.zip".to_string(),
            archive_name: "dict.zip".to_string(),
            extract_dir: "dict".to_string(),
            content_subdir: Some("base-dicts".to_string()),
            destination: PathBuf::from("./dicts"),
        }
    }
}

/// Updater configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Scratch directory for archives and extracted files; created on demand.
    pub download_dir: PathBuf,
    /// File holding the installed configuration version.
    pub marker_path: PathBuf,
    /// Rolling tag of the dictionary snapshot; excluded from config selection.
    pub rolling_tag: String,
    /// Rewrite the marker after a successful configuration install.
    pub record_installed_version: bool,
    pub configuration: ArtifactLayout,
    pub dictionary: ArtifactLayout,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("./tmp"),
            marker_path: PathBuf::from("version.txt"),
            rolling_tag: NIGHTLY_TAG.to_string(),
            record_installed_version: true,
            configuration: ArtifactLayout::configuration_default(),
            dictionary: ArtifactLayout::dictionary_default(),
        }
    }
}

impl UpdaterConfig {
    pub fn layout(&self, kind: ArtifactKind) -> &ArtifactLayout {
        match kind {
            ArtifactKind::Configuration => &self.configuration,
            ArtifactKind::Dictionary => &self.dictionary,
        }
    }

    /// Where the archive of `kind` is downloaded to.
    pub fn archive_path(&self, kind: ArtifactKind) -> PathBuf {
        self.download_dir.join(&self.layout(kind).archive_name)
    }

    /// Where the archive of `kind` is expanded.
    pub fn extract_path(&self, kind: ArtifactKind) -> PathBuf {
        self.download_dir.join(&self.layout(kind).extract_dir)
    }

    /// Directory whose contents are merged into the destination.
    pub fn install_source(&self, kind: ArtifactKind) -> PathBuf {
        let extracted = self.extract_path(kind);
        match &self.layout(kind).content_subdir {
            Some(sub) if !sub.is_empty() => extracted.join(sub),
            _ => extracted,
        }
    }

    pub fn destination(&self, kind: ArtifactKind) -> &Path {
        &self.layout(kind).destination
    }

    /// Check that every name is set and the tracks never share scratch files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("download_dir", self.download_dir.as_os_str().is_empty()),
            ("marker_path", self.marker_path.as_os_str().is_empty()),
            ("rolling_tag", self.rolling_tag.trim().is_empty()),
        ];
        for (field, empty) in required {
            if empty {
                return Err(ConfigError::Empty {
                    field: field.to_string(),
                });
            }
        }

        for kind in ArtifactKind::all() {
            let layout = self.layout(kind);
            let fields = [
                ("asset_name", &layout.asset_name),
                ("archive_name", &layout.archive_name),
                ("extract_dir", &layout.extract_dir),
            ];
            for (field, value) in fields {
                if value.trim().is_empty() {
                    return Err(ConfigError::Empty {
                        field: format!("{kind}.{field}"),
                    });
                }
            }
        }

        // Everything below is joined onto download_dir and may be deleted
        let mut scratch = Vec::new();
        for kind in ArtifactKind::all() {
            let layout = self.layout(kind);
            let mut names = vec![
                ("archive_name", layout.archive_name.as_str()),
                ("extract_dir", layout.extract_dir.as_str()),
            ];
            if let Some(sub) = layout.content_subdir.as_deref().filter(|s| !s.is_empty()) {
                names.push(("content_subdir", sub));
            }
            for (field, value) in names {
                if !is_plain_name(value) {
                    return Err(ConfigError::NotAName {
                        field: format!("{kind}.{field}"),
                        value: value.to_string(),
                    });
                }
            }
            scratch.push((format!("{kind}.archive_name"), &layout.archive_name));
            scratch.push((format!("{kind}.extract_dir"), &layout.extract_dir));
        }

        for (i, (field, value)) in scratch.iter().enumerate() {
            if let Some((other, _)) = scratch[i + 1..].iter().find(|(_, v)| v == value) {
                return Err(ConfigError::Collision {
                    field: format!("{field} and {other}"),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = UpdaterConfig::default();
        assert_eq!(
            config.archive_path(ArtifactKind::Configuration),
            PathBuf::from("./tmp/config.zip")
        );
        assert_eq!(
            config.install_source(ArtifactKind::Configuration),
            PathBuf::from("./tmp/config")
        );
        assert_eq!(
            config.install_source(ArtifactKind::Dictionary),
            PathBuf::from("./tmp/dict/base-dicts")
        );
        assert_eq!(
            config.destination(ArtifactKind::Dictionary),
            Path::new("./dicts")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_colliding_archives_rejected() {
        let mut config = UpdaterConfig::default();
        config.dictionary.archive_name = "config.zip".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Collision {
                field: "configuration.archive_name and dictionary.archive_name".to_string(),
                value: "config.zip".to_string()
            })
        );
    }

    #[test]
    fn test_archive_may_not_share_name_with_extract_dir() {
        let mut config = UpdaterConfig::default();
        config.configuration.archive_name = "dict".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Collision {
                field: "configuration.archive_name and dictionary.extract_dir".to_string(),
                value: "dict".to_string()
            })
        );

        let mut config = UpdaterConfig::default();
        config.dictionary.archive_name = "dict".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Collision { .. })
        ));
    }

    #[test]
    fn test_scratch_names_must_stay_inside_download_dir() {
        for bad in ["..", ".", "/home/user/rime", "../rime", "a/b", "a\\b"] {
            let mut config = UpdaterConfig::default();
            config.configuration.extract_dir = bad.to_string();
            assert_eq!(
                config.validate(),
                Err(ConfigError::NotAName {
                    field: "configuration.extract_dir".to_string(),
                    value: bad.to_string()
                }),
                "{bad}"
            );
        }

        let mut config = UpdaterConfig::default();
        config.dictionary.archive_name = "../dict.zip".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotAName { .. })
        ));

        let mut config = UpdaterConfig::default();
        config.dictionary.content_subdir = Some("..".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotAName { .. })
        ));
    }

    #[test]
    fn test_empty_asset_rejected() {
        let mut config = UpdaterConfig::default();
        config.dictionary.asset_name = " ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty {
                field: "dictionary.asset_name".to_string()
            })
        );
    }
}
