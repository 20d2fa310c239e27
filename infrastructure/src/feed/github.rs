//! GitHub releases feed using `reqwest`.
//!
//! Two read-only endpoints are used:
//!
//! - `GET {api}/repos/{owner}/{repo}/releases` - every release
//! - `GET {api}/repos/{owner}/{repo}/releases/tags/{tag}` - one release
//!
//! Bodies are decoded straight into [`ReleaseRecord`]; a payload missing
//! `tag_name`, `assets`, or an asset's `name`/`browser_download_url` is a
//! [`FeedError::MalformedResponse`].

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};
use wanxiang_application::{BehaviorConfig, FeedError, ReleaseFeedPort};
use wanxiang_domain::ReleaseRecord;

/// Public GitHub REST API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository publishing the configuration and dictionary bundles
pub const DEFAULT_REPOSITORY: &str = "amzxyz/rime_wanxiang";

/// GitHub rejects API requests without a User-Agent
const USER_AGENT: &str = concat!("wanxiang-update/", env!("CARGO_PKG_VERSION"));

/// Largest page size the releases endpoint accepts
const PAGE_SIZE: u32 = 100;

/// Release feed reading from the GitHub REST API.
pub struct GitHubReleaseFeed {
    client: reqwest::Client,
    api_base: String,
    repository: String,
}

impl GitHubReleaseFeed {
    /// Create a feed for `repository` (`owner/name`) under `api_base`.
    pub fn new(
        api_base: impl Into<String>,
        repository: impl Into<String>,
        behavior: &BehaviorConfig,
    ) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = behavior.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::Network(format!("Failed to build HTTP client: {}", e)))?;

        let api_base = api_base.into().trim_end_matches('/').to_string();
        let repository = repository.into().trim_matches('/').to_string();
        info!("Release feed: {}/repos/{}", api_base, repository);

        Ok(Self {
            client,
            api_base,
            repository,
        })
    }

    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/releases?per_page={}",
            self.api_base, self.repository, PAGE_SIZE
        )
    }

    pub fn release_by_tag_url(&self, tag: &str) -> String {
        format!(
            "{}/repos/{}/releases/tags/{}",
            self.api_base, self.repository, tag
        )
    }

    /// GET `url` and return the status and body text.
    async fn get(&self, url: &str) -> Result<(StatusCode, String), FeedError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FeedError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Network(format!("Failed to read response body: {}", e)))?;
        debug!("{} answered {} ({} bytes)", url, status.as_u16(), body.len());
        Ok((status, body))
    }
}

fn status_error(status: StatusCode, url: &str) -> FeedError {
    FeedError::Network(format!(
        "HTTP error: {} {} from {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
        url
    ))
}

/// Map a response status to a feed error.
///
/// `tag` is set for the by-tag lookup, where a 404 means the release does
/// not exist rather than that the feed is unreachable.
pub(crate) fn check_status(
    status: StatusCode,
    url: &str,
    tag: Option<&str>,
) -> Result<(), FeedError> {
    match tag {
        Some(tag) if status == StatusCode::NOT_FOUND => Err(FeedError::NotFound(tag.to_string())),
        _ if status.is_success() => Ok(()),
        _ => Err(status_error(status, url)),
    }
}

/// Decode the body of the "list all releases" endpoint.
pub(crate) fn parse_release_list(body: &str) -> Result<Vec<ReleaseRecord>, FeedError> {
    serde_json::from_str(body)
        .map_err(|e| FeedError::MalformedResponse(format!("release list: {}", e)))
}

/// Decode the body of the "release by tag" endpoint.
pub(crate) fn parse_release(body: &str) -> Result<ReleaseRecord, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::MalformedResponse(format!("release: {}", e)))
}

#[async_trait]
impl ReleaseFeedPort for GitHubReleaseFeed {
    async fn list_releases(&self) -> Result<Vec<ReleaseRecord>, FeedError> {
        let url = self.releases_url();
        let (status, body) = self.get(&url).await?;
        check_status(status, &url, None)?;
        let releases = parse_release_list(&body)?;
        info!("Feed lists {} releases", releases.len());
        Ok(releases)
    }

    async fn release_by_tag(&self, tag: &str) -> Result<ReleaseRecord, FeedError> {
        let url = self.release_by_tag_url(tag);
        let (status, body) = self.get(&url).await?;
        check_status(status, &url, Some(tag))?;
        parse_release(&body)
    }
}
