//! Installer backed by external download and archive tools.
//!
//! Downloads run `wget <url> -O <dest>` unless the built-in HTTP client is
//! selected. Extraction runs `7z x <archive> -o<dir> -y`. Tool output is
//! forwarded to the log at debug level; a non-zero exit becomes
//! [`InstallerError::ToolInvocation`].

use super::download::{DOWNLOAD_CLIENT, download_to};
use super::merge::merge_dir;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};
use wanxiang_application::{ArtifactInstallerPort, BehaviorConfig, InstallerError};

const USER_AGENT: &str = concat!("wanxiang-update/", env!("CARGO_PKG_VERSION"));

/// How archives are downloaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMethod {
    /// Shell out to `wget`
    #[default]
    Wget,
    /// Stream the body with the built-in HTTP client
    Builtin,
}

/// Artifact installer that delegates to external binaries.
pub struct ExternalToolInstaller {
    download: DownloadMethod,
    wget: String,
    seven_zip: String,
    client: reqwest::Client,
}

impl ExternalToolInstaller {
    pub fn new(download: DownloadMethod, behavior: &BehaviorConfig) -> Result<Self, InstallerError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = behavior.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| InstallerError::ToolInvocation {
            tool: DOWNLOAD_CLIENT.to_string(),
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            download,
            wget: "wget".to_string(),
            seven_zip: "7z".to_string(),
            client,
        })
    }

    /// Override the download tool binary (name on `PATH` or a full path).
    pub fn with_wget(mut self, program: impl Into<String>) -> Self {
        self.wget = program.into();
        self
    }

    /// Override the archive tool binary (name on `PATH` or a full path).
    pub fn with_seven_zip(mut self, program: impl Into<String>) -> Self {
        self.seven_zip = program.into();
        self
    }

    /// Names of the external binaries this installer will need.
    pub fn required_tools(&self) -> Vec<&str> {
        match self.download {
            DownloadMethod::Wget => vec![self.wget.as_str(), self.seven_zip.as_str()],
            DownloadMethod::Builtin => vec![self.seven_zip.as_str()],
        }
    }

    /// Required binaries that cannot be found.
    pub fn missing_tools(&self) -> Vec<String> {
        self.required_tools()
            .into_iter()
            .filter(|tool| which::which(tool).is_err())
            .map(str::to_string)
            .collect()
    }

    fn ensure_tool(program: &str) -> Result<(), InstallerError> {
        which::which(program)
            .map(|_| ())
            .map_err(|_| InstallerError::ToolNotFound(program.to_string()))
    }

    async fn run_tool(&self, program: &str, args: Vec<OsString>) -> Result<(), InstallerError> {
        Self::ensure_tool(program)?;

        debug!("Running {} {:?}", program, args);
        let output = Command::new(program)
            .args(&args)
            .output()
            .await
            .map_err(|e| InstallerError::ToolInvocation {
                tool: program.to_string(),
                message: format!("Failed to spawn: {}", e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            debug!("{} stdout: {}", program, stdout.trim());
        }
        if !stderr.trim().is_empty() {
            debug!("{} stderr: {}", program, stderr.trim());
        }

        if !output.status.success() {
            let detail = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("")
                .trim();
            return Err(InstallerError::ToolInvocation {
                tool: program.to_string(),
                message: format!("{} {}", output.status, detail).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Arguments for `wget` writing `url` to `dest`.
pub(crate) fn wget_args(url: &str, dest: &Path) -> Vec<OsString> {
    vec![url.into(), "-O".into(), dest.as_os_str().to_owned()]
}

/// Arguments for `7z` expanding `archive` into `dest_dir`, answering yes to
/// overwrite prompts.
pub(crate) fn seven_zip_args(archive: &Path, dest_dir: &Path) -> Vec<OsString> {
    let mut output_flag = OsString::from("-o");
    output_flag.push(dest_dir.as_os_str());
    vec![
        "x".into(),
        archive.as_os_str().to_owned(),
        output_flag,
        "-y".into(),
    ]
}

#[async_trait]
impl ArtifactInstallerPort for ExternalToolInstaller {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), InstallerError> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| InstallerError::io(parent, e))?;
        }

        match self.download {
            DownloadMethod::Wget => self.run_tool(&self.wget, wget_args(url, dest)).await?,
            DownloadMethod::Builtin => download_to(&self.client, url, dest).await?,
        }
        info!("Fetched {}", dest.display());
        Ok(())
    }

    async fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<(), InstallerError> {
        // Leave the previous extraction alone when 7z cannot run anyway
        Self::ensure_tool(&self.seven_zip)?;
        if dest_dir.exists() {
            debug!("Clearing previous extraction at {}", dest_dir.display());
            tokio::fs::remove_dir_all(dest_dir)
                .await
                .map_err(|e| InstallerError::io(dest_dir, e))?;
        }
        self.run_tool(&self.seven_zip, seven_zip_args(archive, dest_dir))
            .await?;
        info!("Extracted {} into {}", archive.display(), dest_dir.display());
        Ok(())
    }

    async fn merge_copy(&self, src_dir: &Path, dest_dir: &Path) -> Result<usize, InstallerError> {
        let src = src_dir.to_path_buf();
        let dest = dest_dir.to_path_buf();
        tokio::task::spawn_blocking(move || merge_dir(&src, &dest).map_err(|e| InstallerError::io(&src, e)))
            .await
            .map_err(|e| InstallerError::io(src_dir, e))?
    }
}
