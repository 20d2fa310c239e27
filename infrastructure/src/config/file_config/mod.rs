//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types by
//! [`FileConfig::to_updater_config`] and [`FileConfig::behavior`].

mod artifact;
mod feed;
mod paths;
mod tools;

pub use artifact::FileArtifactConfig;
pub use feed::FileFeedConfig;
pub use paths::FilePathsConfig;
pub use tools::FileToolsConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wanxiang_application::{ArtifactLayout, BehaviorConfig, UpdaterConfig};

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run can proceed
    Warning,
    /// The run must not start
    Error,
}

/// A single problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Release feed location
    pub feed: FileFeedConfig,
    /// Local paths
    pub paths: FilePathsConfig,
    /// Configuration bundle layout
    pub configuration: FileArtifactConfig,
    /// Dictionary bundle layout
    pub dictionary: FileArtifactConfig,
    /// External tools
    pub tools: FileToolsConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let repository = self.feed.repository.trim();
        if repository.is_empty() {
            issues.push(ConfigIssue::error("feed.repository", "must not be empty"));
        } else if repository.split('/').filter(|s| !s.is_empty()).count() != 2 {
            issues.push(ConfigIssue::error(
                "feed.repository",
                format!("expected 'owner/name', got '{}'", repository),
            ));
        }

        if !self.feed.api_base.starts_with("http://") && !self.feed.api_base.starts_with("https://")
        {
            issues.push(ConfigIssue::error(
                "feed.api_base",
                format!("'{}' is not an http(s) URL", self.feed.api_base),
            ));
        }

        if self.feed.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                "feed.timeout_secs",
                "0 would fail every request; ignoring it",
            ));
        }

        for (field, value) in [
            ("tools.wget", &self.tools.wget),
            ("tools.seven_zip", &self.tools.seven_zip),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(field, "must not be empty"));
            }
        }

        if let Err(e) = self.to_updater_config().validate() {
            issues.push(ConfigIssue::error("layout", e.to_string()));
        }

        issues
    }

    /// Build the application-level updater configuration.
    pub fn to_updater_config(&self) -> UpdaterConfig {
        UpdaterConfig {
            download_dir: PathBuf::from(&self.paths.download_dir),
            marker_path: PathBuf::from(&self.paths.marker_file),
            rolling_tag: self.feed.rolling_tag.clone(),
            record_installed_version: self.paths.record_installed_version,
            configuration: self
                .configuration
                .apply_to(ArtifactLayout::configuration_default()),
            dictionary: self.dictionary.apply_to(ArtifactLayout::dictionary_default()),
        }
    }

    /// Adapter behavior; a zero timeout is treated as unset.
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.feed.timeout_secs.filter(|s| *s > 0))
    }
}
