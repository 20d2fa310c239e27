//! Track state machine and outcomes

use super::artifact::ArtifactKind;
use serde::{Deserialize, Serialize};

/// Where a track currently is.
///
/// Configuration: Idle → Fetching → Comparing → {UpToDate | Downloading →
/// Extracting → Installing → Done}. Dictionary skips Comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackState {
    Idle,
    Fetching,
    Comparing,
    UpToDate,
    Downloading,
    Extracting,
    Installing,
    Done,
}

impl TrackState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackState::Idle => "idle",
            TrackState::Fetching => "fetching",
            TrackState::Comparing => "comparing",
            TrackState::UpToDate => "up to date",
            TrackState::Downloading => "downloading",
            TrackState::Extracting => "extracting",
            TrackState::Installing => "installing",
            TrackState::Done => "done",
        }
    }

    /// `UpToDate` and `Done` end a track; nothing follows them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackState::UpToDate | TrackState::Done)
    }

    /// Whether `next` is a legal successor for a track of `kind`.
    pub fn can_transition_to(&self, next: TrackState, kind: ArtifactKind) -> bool {
        use TrackState::*;
        match (self, next) {
            (Idle, Fetching) => true,
            (Fetching, Comparing) => kind.is_version_gated(),
            (Fetching, Downloading) => !kind.is_version_gated(),
            (Comparing, UpToDate) | (Comparing, Downloading) => kind.is_version_gated(),
            (Downloading, Extracting) | (Extracting, Installing) | (Installing, Done) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for TrackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a track finished when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackOutcome {
    /// The installed version is current; nothing was touched.
    UpToDate { local: String, remote: String },
    /// The feed has no release this track can use.
    NoRelease,
    /// Dry run: the release that would have been installed.
    Planned { tag: String },
    /// The release was downloaded, extracted and merged.
    Installed { tag: String },
    /// The track was disabled for this run.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_path() {
        let kind = ArtifactKind::Configuration;
        let path = [
            TrackState::Idle,
            TrackState::Fetching,
            TrackState::Comparing,
            TrackState::Downloading,
            TrackState::Extracting,
            TrackState::Installing,
            TrackState::Done,
        ];
        assert!(path.windows(2).all(|w| w[0].can_transition_to(w[1], kind)));
        assert!(TrackState::Comparing.can_transition_to(TrackState::UpToDate, kind));
    }

    #[test]
    fn test_dictionary_has_no_gate() {
        let kind = ArtifactKind::Dictionary;
        assert!(TrackState::Fetching.can_transition_to(TrackState::Downloading, kind));
        assert!(!TrackState::Fetching.can_transition_to(TrackState::Comparing, kind));
        assert!(!TrackState::Comparing.can_transition_to(TrackState::UpToDate, kind));
    }

    #[test]
    fn test_terminal_states() {
        assert!(TrackState::UpToDate.is_terminal());
        assert!(TrackState::Done.is_terminal());
        assert!(!TrackState::Installing.is_terminal());
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_value(TrackOutcome::Installed {
            tag: "v1.1.0".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "installed");
        assert_eq!(json["tag"], "v1.1.0");
    }
}
