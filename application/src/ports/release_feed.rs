//! Release feed port
//!
//! Defines the interface for reading release metadata from the remote feed.

use async_trait::async_trait;
use thiserror::Error;
use wanxiang_domain::ReleaseRecord;

/// Errors that can occur while reading the release feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Feed unreachable, or it answered with a non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// The body could not be read as release records.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The requested tag does not exist on the feed.
    #[error("Release not found: {0}")]
    NotFound(String),
}

/// Read-only access to the release feed.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ReleaseFeedPort: Send + Sync {
    /// All published releases, in feed order.
    async fn list_releases(&self) -> Result<Vec<ReleaseRecord>, FeedError>;

    /// A single release looked up by its tag.
    async fn release_by_tag(&self, tag: &str) -> Result<ReleaseRecord, FeedError>;
}
