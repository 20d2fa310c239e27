//! Input, output and error types for [`RunUpdateUseCase`](super::RunUpdateUseCase).

use crate::config::ConfigError;
use crate::ports::artifact_installer::InstallerError;
use crate::ports::release_feed::FeedError;
use crate::ports::version_store::LocalStateError;
use thiserror::Error;
use wanxiang_domain::{ArtifactKind, DomainError, TrackOutcome, VersionIdentifier};

/// Errors that abort the whole run before any track is attempted.
#[derive(Error, Debug)]
pub enum RunUpdateError {
    /// Without a baseline version no update decision can be made.
    #[error("{0}")]
    LocalState(#[from] LocalStateError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Why a single track failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Installer(#[from] InstallerError),

    #[error(transparent)]
    LocalState(#[from] LocalStateError),
}

impl TrackError {
    /// Stable, machine-readable category name.
    pub fn category(&self) -> &'static str {
        match self {
            TrackError::Feed(FeedError::Network(_)) => "network",
            TrackError::Feed(FeedError::MalformedResponse(_)) => "malformed_response",
            TrackError::Feed(FeedError::NotFound(_)) => "not_found",
            TrackError::Domain(DomainError::MissingAsset { .. }) => "missing_asset",
            TrackError::Domain(_) => "not_found",
            TrackError::Installer(InstallerError::Io { .. }) => "io",
            TrackError::Installer(_) => "tool_invocation",
            TrackError::LocalState(_) => "local_state",
        }
    }
}

/// Which tracks to run and whether to touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunUpdateInput {
    pub run_configuration: bool,
    pub run_dictionary: bool,
    /// Resolve releases and decisions only; nothing is downloaded or written.
    pub dry_run: bool,
}

impl Default for RunUpdateInput {
    fn default() -> Self {
        Self {
            run_configuration: true,
            run_dictionary: true,
            dry_run: false,
        }
    }
}

impl RunUpdateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_configuration(mut self) -> Self {
        self.run_configuration = false;
        self
    }

    pub fn without_dictionary(mut self) -> Self {
        self.run_dictionary = false;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn enabled_tracks(&self) -> usize {
        usize::from(self.run_configuration) + usize::from(self.run_dictionary)
    }

    pub fn is_enabled(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Configuration => self.run_configuration,
            ArtifactKind::Dictionary => self.run_dictionary,
        }
    }
}

/// Result of one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackReport {
    pub kind: ArtifactKind,
    pub result: Result<TrackOutcome, TrackError>,
}

impl TrackReport {
    pub fn new(kind: ArtifactKind, result: Result<TrackOutcome, TrackError>) -> Self {
        Self { kind, result }
    }

    pub fn skipped(kind: ArtifactKind) -> Self {
        Self::new(kind, Ok(TrackOutcome::Skipped))
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&TrackError> {
        self.result.as_ref().err()
    }
}

/// Output of an update run.
#[derive(Debug, Clone)]
pub struct RunUpdateOutput {
    /// Installed configuration version read at startup (absent when the
    /// configuration track was disabled).
    pub local_version: Option<VersionIdentifier>,
    pub configuration: TrackReport,
    pub dictionary: TrackReport,
    pub dry_run: bool,
}

impl RunUpdateOutput {
    pub fn is_success(&self) -> bool {
        self.configuration.is_success() && self.dictionary.is_success()
    }

    pub fn reports(&self) -> [&TrackReport; 2] {
        [&self.configuration, &self.dictionary]
    }
}
