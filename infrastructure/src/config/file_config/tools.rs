//! External tool configuration from TOML (`[tools]` section)

use crate::installer::DownloadMethod;
use serde::{Deserialize, Serialize};

/// Raw tool configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// `wget` or `builtin`
    pub download: DownloadMethod,
    /// Download tool binary
    pub wget: String,
    /// Archive tool binary
    pub seven_zip: String,
}

impl Default for FileToolsConfig {
    fn default() -> Self {
        Self {
            download: DownloadMethod::Wget,
            wget: "wget".to_string(),
            seven_zip: "7z".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_download() {
        let toml_str = r#"
[tools]
download = "builtin"
seven_zip = "/usr/bin/7za"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tools.download, DownloadMethod::Builtin);
        assert_eq!(config.tools.seven_zip, "/usr/bin/7za");
        assert_eq!(config.tools.wget, "wget");
    }
}
