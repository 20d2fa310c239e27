//! Configuration file loading for wanxiang-update
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `WANXIANG_<SECTION>__<KEY>` (e.g. `WANXIANG_FEED__REPOSITORY`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./wanxiang-update.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wanxiang-update/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileArtifactConfig, FileConfig, FileFeedConfig, FilePathsConfig,
    FileToolsConfig, Severity,
};
pub use loader::ConfigLoader;
