//! Artifact kinds

use serde::{Deserialize, Serialize};

/// The two artifact bundles published on the release feed (Value Object).
///
/// Each kind is updated by its own track: configuration only when the feed
/// holds a newer version, dictionary unconditionally from the rolling tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Configuration,
    Dictionary,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Configuration => "configuration",
            ArtifactKind::Dictionary => "dictionary",
        }
    }

    /// Whether installs of this kind are gated on a version increase.
    pub fn is_version_gated(&self) -> bool {
        matches!(self, ArtifactKind::Configuration)
    }

    pub fn all() -> [ArtifactKind; 2] {
        [ArtifactKind::Configuration, ArtifactKind::Dictionary]
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_configuration_is_gated() {
        assert!(ArtifactKind::Configuration.is_version_gated());
        assert!(!ArtifactKind::Dictionary.is_version_gated());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArtifactKind::Dictionary).unwrap(),
            "\"dictionary\""
        );
    }
}
