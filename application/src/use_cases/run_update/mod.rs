//! Run update use case
//!
//! [`RunUpdateUseCase`] drives both update tracks for a single run:
//!
//! 1. **Read baseline** - installed configuration version from the marker file
//! 2. **Fetch** - release list and rolling dictionary release, concurrently
//! 3. **Configuration track** - install the newest release only if it is
//!    strictly newer than the baseline, then record it
//! 4. **Dictionary track** - always install the rolling release
//!
//! A failing track is reported in its [`TrackReport`] and never stops the
//! other one. Only a missing baseline or an invalid configuration aborts the
//! run.

mod types;

pub use types::{RunUpdateError, RunUpdateInput, RunUpdateOutput, TrackError, TrackReport};

use crate::config::UpdaterConfig;
use crate::ports::artifact_installer::ArtifactInstallerPort;
use crate::ports::release_feed::{FeedError, ReleaseFeedPort};
use crate::ports::update_progress::{NoUpdateProgress, UpdateProgressNotifier};
use crate::ports::version_store::VersionStorePort;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wanxiang_domain::{
    ArtifactKind, AssetDescriptor, ReleaseRecord, ReleaseSelector, TrackOutcome, TrackState,
    UpdateDecision, VersionIdentifier,
};

/// Use case for checking the feed and installing newer artifacts.
pub struct RunUpdateUseCase {
    feed: Arc<dyn ReleaseFeedPort>,
    installer: Arc<dyn ArtifactInstallerPort>,
    store: Arc<dyn VersionStorePort>,
    config: UpdaterConfig,
    selector: ReleaseSelector,
}

impl RunUpdateUseCase {
    pub fn new(
        feed: Arc<dyn ReleaseFeedPort>,
        installer: Arc<dyn ArtifactInstallerPort>,
        store: Arc<dyn VersionStorePort>,
        config: UpdaterConfig,
    ) -> Self {
        let selector = ReleaseSelector::new(config.rolling_tag.clone());
        Self {
            feed,
            installer,
            store,
            config,
            selector,
        }
    }

    /// Executes the update run without progress reporting.
    pub async fn execute(&self, input: RunUpdateInput) -> Result<RunUpdateOutput, RunUpdateError> {
        self.execute_with_progress(input, &NoUpdateProgress).await
    }

    /// Executes the update run with progress notifications.
    ///
    /// # Errors
    ///
    /// - [`RunUpdateError::Config`] - scratch names collide or leave the download directory
    /// - [`RunUpdateError::LocalState`] - the marker file is missing or unreadable
    ///
    /// Track failures are not errors here; they are carried in the output.
    pub async fn execute_with_progress(
        &self,
        input: RunUpdateInput,
        progress: &dyn UpdateProgressNotifier,
    ) -> Result<RunUpdateOutput, RunUpdateError> {
        self.config.validate()?;

        let local_version = if input.run_configuration {
            let version = self.store.read()?;
            info!("Installed configuration version: {}", version);
            Some(version)
        } else {
            None
        };

        progress.on_run_start(input.enabled_tracks());
        for kind in ArtifactKind::all() {
            if input.is_enabled(kind) {
                progress.on_state_change(kind, TrackState::Idle);
                progress.on_state_change(kind, TrackState::Fetching);
            }
        }

        let rolling_tag = self.selector.rolling_tag();
        let list_future = async {
            if input.run_configuration || input.run_dictionary {
                Some(self.feed.list_releases().await)
            } else {
                None
            }
        };
        let pinned_future = async {
            if input.run_dictionary {
                Some(self.feed.release_by_tag(rolling_tag).await)
            } else {
                None
            }
        };
        let (releases, pinned) = tokio::join!(list_future, pinned_future);

        let configuration = match (&local_version, &releases) {
            (Some(local), Some(releases)) => {
                let result = self
                    .configuration_track(releases.clone(), local, input.dry_run, progress)
                    .await;
                self.finish(ArtifactKind::Configuration, result, progress)
            }
            _ => TrackReport::skipped(ArtifactKind::Configuration),
        };

        let dictionary = match pinned {
            Some(pinned) => {
                let result = self
                    .dictionary_track(pinned, releases, input.dry_run, progress)
                    .await;
                self.finish(ArtifactKind::Dictionary, result, progress)
            }
            None => TrackReport::skipped(ArtifactKind::Dictionary),
        };

        Ok(RunUpdateOutput {
            local_version,
            configuration,
            dictionary,
            dry_run: input.dry_run,
        })
    }

    fn finish(
        &self,
        kind: ArtifactKind,
        result: Result<TrackOutcome, TrackError>,
        progress: &dyn UpdateProgressNotifier,
    ) -> TrackReport {
        match &result {
            Ok(outcome) => progress.on_track_complete(kind, outcome),
            Err(e) => {
                warn!("{} track failed: {}", kind, e);
                progress.on_track_failed(kind, e);
            }
        }
        TrackReport::new(kind, result)
    }

    async fn configuration_track(
        &self,
        releases: Result<Vec<ReleaseRecord>, FeedError>,
        local: &VersionIdentifier,
        dry_run: bool,
        progress: &dyn UpdateProgressNotifier,
    ) -> Result<TrackOutcome, TrackError> {
        let kind = ArtifactKind::Configuration;
        let releases = releases?;
        progress.on_state_change(kind, TrackState::Comparing);

        let Some(latest) = self.selector.select_latest_config(&releases) else {
            info!("No configuration release on the feed");
            return Ok(TrackOutcome::NoRelease);
        };
        let remote = latest.version();

        if !UpdateDecision::evaluate(&remote, local).needs_update() {
            info!("Configuration is up to date (local {}, remote {})", local, remote);
            progress.on_state_change(kind, TrackState::UpToDate);
            return Ok(TrackOutcome::UpToDate {
                local: local.to_string(),
                remote: remote.to_string(),
            });
        }

        let asset = latest.find_asset(&self.config.configuration.asset_name)?;
        info!("Configuration update available: {} -> {}", local, remote);
        if dry_run {
            return Ok(TrackOutcome::Planned {
                tag: latest.tag.clone(),
            });
        }

        self.install(kind, asset, progress).await?;

        if self.config.record_installed_version {
            self.store.write(&remote)?;
            debug!("Recorded installed version {}", remote);
        }

        Ok(TrackOutcome::Installed {
            tag: latest.tag.clone(),
        })
    }

    async fn dictionary_track(
        &self,
        pinned: Result<ReleaseRecord, FeedError>,
        releases: Option<Result<Vec<ReleaseRecord>, FeedError>>,
        dry_run: bool,
        progress: &dyn UpdateProgressNotifier,
    ) -> Result<TrackOutcome, TrackError> {
        let kind = ArtifactKind::Dictionary;

        // A direct lookup miss may still be answered by the full listing.
        let mut by_tag = HashMap::new();
        match pinned {
            Ok(record) => {
                by_tag.insert(record.tag.clone(), record);
            }
            Err(FeedError::NotFound(tag)) => {
                debug!("Direct lookup of {} missed, searching the release list", tag);
                if let Some(Ok(releases)) = releases {
                    by_tag.extend(releases.into_iter().map(|r| (r.tag.clone(), r)));
                }
            }
            Err(e) => return Err(e.into()),
        }

        let release = self.selector.select_nightly_dictionary(&by_tag)?;
        let asset = release.find_asset(&self.config.dictionary.asset_name)?;
        if dry_run {
            return Ok(TrackOutcome::Planned {
                tag: release.tag.clone(),
            });
        }

        self.install(kind, asset, progress).await?;

        Ok(TrackOutcome::Installed {
            tag: release.tag.clone(),
        })
    }

    /// Download → extract → merge-copy, strictly in that order.
    async fn install(
        &self,
        kind: ArtifactKind,
        asset: &AssetDescriptor,
        progress: &dyn UpdateProgressNotifier,
    ) -> Result<(), TrackError> {
        let archive = self.config.archive_path(kind);
        progress.on_state_change(kind, TrackState::Downloading);
        info!("Downloading {} to {}", asset.name, archive.display());
        self.installer.fetch(&asset.download_url, &archive).await?;

        let extract_dir = self.config.extract_path(kind);
        progress.on_state_change(kind, TrackState::Extracting);
        self.installer.extract(&archive, &extract_dir).await?;

        let source = self.config.install_source(kind);
        let destination = self.config.destination(kind);
        progress.on_state_change(kind, TrackState::Installing);
        let copied = self.installer.merge_copy(&source, destination).await?;
        info!(
            "Installed {} {} files into {}",
            copied,
            kind,
            destination.display()
        );

        progress.on_state_change(kind, TrackState::Done);
        Ok(())
    }
}
