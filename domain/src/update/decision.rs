//! Configuration update decision

use crate::version::VersionIdentifier;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of comparing the feed's latest configuration with the installed one.
///
/// Updates are monotonic: an equal or older remote version is never
/// reinstalled or downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateDecision {
    UpToDate,
    UpdateAvailable,
}

impl UpdateDecision {
    pub fn evaluate(remote: &VersionIdentifier, local: &VersionIdentifier) -> Self {
        match remote.cmp(local) {
            Ordering::Greater => UpdateDecision::UpdateAvailable,
            Ordering::Equal | Ordering::Less => UpdateDecision::UpToDate,
        }
    }

    pub fn needs_update(&self) -> bool {
        matches!(self, UpdateDecision::UpdateAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(remote: &str, local: &str) -> UpdateDecision {
        UpdateDecision::evaluate(&remote.into(), &local.into())
    }

    #[test]
    fn test_only_strictly_newer_updates() {
        assert_eq!(decide("v1.1.0", "v1.0.0"), UpdateDecision::UpdateAvailable);
        assert_eq!(decide("v1.2.0", "v1.2.0"), UpdateDecision::UpToDate);
        assert_eq!(decide("v1.2", "v1.2.0"), UpdateDecision::UpToDate);
        assert_eq!(decide("v1.0.0", "v1.2.0"), UpdateDecision::UpToDate);
    }

    #[test]
    fn test_needs_update() {
        assert!(UpdateDecision::UpdateAvailable.needs_update());
        assert!(!UpdateDecision::UpToDate.needs_update());
    }
}
