//! Release selection rules

use super::entities::ReleaseRecord;
use crate::core::error::DomainError;
use std::collections::HashMap;

/// Reserved rolling tag that always points at the latest dictionary snapshot.
pub const NIGHTLY_TAG: &str = "dict-nightly";

/// Picks which releases the update tracks install.
///
/// Configuration releases are every release except the rolling tag; the
/// dictionary track always installs the rolling tag itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSelector {
    rolling_tag: String,
}

impl ReleaseSelector {
    pub fn new(rolling_tag: impl Into<String>) -> Self {
        Self {
            rolling_tag: rolling_tag.into(),
        }
    }

    pub fn rolling_tag(&self) -> &str {
        &self.rolling_tag
    }

    /// Highest versioned release that is not the rolling tag.
    ///
    /// A single max-scan: a later release replaces the current pick only
    /// when it is strictly newer, so the first of several equal versions
    /// wins. Returns `None` when nothing qualifies.
    pub fn select_latest_config<'a>(
        &self,
        releases: &'a [ReleaseRecord],
    ) -> Option<&'a ReleaseRecord> {
        let mut best: Option<&ReleaseRecord> = None;
        for release in releases.iter().filter(|r| r.tag != self.rolling_tag) {
            match best {
                Some(current) if release.version() <= current.version() => {}
                _ => best = Some(release),
            }
        }
        best
    }

    /// Direct lookup of the rolling tag.
    pub fn select_nightly_dictionary<'a>(
        &self,
        releases_by_tag: &'a HashMap<String, ReleaseRecord>,
    ) -> Result<&'a ReleaseRecord, DomainError> {
        releases_by_tag
            .get(&self.rolling_tag)
            .ok_or_else(|| DomainError::NotFound(self.rolling_tag.clone()))
    }
}

impl Default for ReleaseSelector {
    fn default() -> Self {
        Self::new(NIGHTLY_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn releases(tags: &[&str]) -> Vec<ReleaseRecord> {
        tags.iter().map(|t| ReleaseRecord::new(*t)).collect()
    }

    #[test]
    fn test_latest_config_skips_nightly() {
        let list = releases(&["dict-nightly", "v1.0.0", "v1.2.0", "v1.1.5"]);
        let picked = ReleaseSelector::default().select_latest_config(&list);
        assert_eq!(picked.map(|r| r.tag.as_str()), Some("v1.2.0"));
    }

    #[test]
    fn test_only_nightly_yields_none() {
        let list = releases(&["dict-nightly"]);
        assert!(ReleaseSelector::default().select_latest_config(&list).is_none());
        assert!(ReleaseSelector::default().select_latest_config(&[]).is_none());
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let list = vec![
            ReleaseRecord::new("v1.2"),
            ReleaseRecord::new("v1.2.0"),
            ReleaseRecord::new("v1.1"),
        ];
        let picked = ReleaseSelector::default().select_latest_config(&list).unwrap();
        assert_eq!(picked.tag, "v1.2");
    }

    #[test]
    fn test_order_of_feed_does_not_matter() {
        let list = releases(&["v1.1.5", "v13.0.6", "v2.0", "v13.0.9", "dict-nightly"]);
        let picked = ReleaseSelector::default().select_latest_config(&list).unwrap();
        assert_eq!(picked.tag, "v13.0.9");
    }

    #[test]
    fn test_custom_rolling_tag() {
        let list = releases(&["nightly", "v1.0.0"]);
        let selector = ReleaseSelector::new("v1.0.0");
        assert_eq!(
            selector.select_latest_config(&list).map(|r| r.tag.as_str()),
            Some("nightly")
        );
    }

    #[test]
    fn test_select_nightly_dictionary() {
        let mut by_tag = HashMap::new();
        by_tag.insert("v1.0.0".to_string(), ReleaseRecord::new("v1.0.0"));

        let selector = ReleaseSelector::default();
        assert_eq!(
            selector.select_nightly_dictionary(&by_tag),
            Err(DomainError::NotFound("dict-nightly".to_string()))
        );

        by_tag.insert("dict-nightly".to_string(), ReleaseRecord::new("dict-nightly"));
        assert_eq!(
            selector.select_nightly_dictionary(&by_tag).unwrap().tag,
            "dict-nightly"
        );
    }
}
