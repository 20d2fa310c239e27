//! Release feed entities

use crate::core::error::DomainError;
use crate::version::VersionIdentifier;
use serde::{Deserialize, Serialize};

/// A named downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

impl AssetDescriptor {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}

/// One entry of the release feed (Entity).
///
/// The field names follow the feed's JSON shape, so a record deserializes
/// directly from `{ "tag_name": ..., "assets": [...] }`. Both fields are
/// required; a payload missing either is rejected at the feed boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    #[serde(rename = "tag_name")]
    pub tag: String,
    pub assets: Vec<AssetDescriptor>,
}

impl ReleaseRecord {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            assets: Vec::new(),
        }
    }

    pub fn with_asset(mut self, asset: AssetDescriptor) -> Self {
        self.assets.push(asset);
        self
    }

    /// The tag read as a version.
    pub fn version(&self) -> VersionIdentifier {
        VersionIdentifier::new(self.tag.as_str())
    }

    /// Locate a required asset by exact name.
    pub fn find_asset(&self, name: &str) -> Result<&AssetDescriptor, DomainError> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .ok_or_else(|| DomainError::MissingAsset {
                tag: self.tag.clone(),
                asset: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_shape() {
        let json = r#"{
            "tag_name": "v13.0.9",
            "name": "ignored",
            "assets": [
                { "name": "rime-wanxiang-base.zip", "browser_download_url": "https://example.com/base.zip", "size": 10 }
            ]
        }"#;
        let record: ReleaseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tag, "v13.0.9");
        assert_eq!(record.assets.len(), 1);
        assert_eq!(record.assets[0].download_url, "https://example.com/base.zip");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{ "tag_name": "v1.0.0" }"#;
        assert!(serde_json::from_str::<ReleaseRecord>(json).is_err());

        let json = r#"{ "tag_name": "v1.0.0", "assets": [{ "name": "a.zip" }] }"#;
        assert!(serde_json::from_str::<ReleaseRecord>(json).is_err());
    }

    #[test]
    fn test_find_asset() {
        let record = ReleaseRecord::new("v1.0.0")
            .with_asset(AssetDescriptor::new("a.zip", "https://example.com/a.zip"))
            .with_asset(AssetDescriptor::new("b.zip", "https://example.com/b.zip"));

        assert_eq!(
            record.find_asset("b.zip").unwrap().download_url,
            "https://example.com/b.zip"
        );
        assert_eq!(
            record.find_asset("c.zip"),
            Err(DomainError::MissingAsset {
                tag: "v1.0.0".to_string(),
                asset: "c.zip".to_string()
            })
        );
    }
}
