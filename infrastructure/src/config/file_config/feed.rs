//! Feed configuration from TOML (`[feed]` section)

use crate::feed::{DEFAULT_API_BASE, DEFAULT_REPOSITORY};
use serde::{Deserialize, Serialize};
use wanxiang_domain::NIGHTLY_TAG;

/// Raw feed configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFeedConfig {
    /// REST API root
    pub api_base: String,
    /// `owner/name` of the repository publishing releases
    pub repository: String,
    /// Rolling tag of the dictionary snapshot
    pub rolling_tag: String,
    /// HTTP timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

impl Default for FileFeedConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            rolling_tag: NIGHTLY_TAG.to_string(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_partial_override() {
        let toml_str = r#"
[feed]
repository = "someone/fork"
timeout_secs = 20
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feed.repository, "someone/fork");
        assert_eq!(config.feed.timeout_secs, Some(20));
        assert_eq!(config.feed.api_base, DEFAULT_API_BASE);
        assert_eq!(config.feed.rolling_tag, "dict-nightly");
    }
}
