//! Version identifiers and dotted-numeric ordering.
//!
//! - [`VersionIdentifier`] - a parsed release tag such as `v13.0.9`
//! - [`compare_versions`] - the free-function form of the comparator

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// A single numeric component, stored as its digits without leading zeros.
///
/// Components are kept as text so that arbitrarily long numbers compare
/// correctly without overflowing a fixed-width integer. An empty string is
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Component(String);

impl Component {
    /// Parse one dot-separated part. Anything that is not a plain run of
    /// ASCII digits is treated as zero.
    fn parse(part: &str) -> Self {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Self::zero();
        }
        Self(part.trim_start_matches('0').to_string())
    }

    fn zero() -> Self {
        Self(String::new())
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        // Same representation, so a longer digit run is always larger.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A release tag interpreted as an ordered tuple of non-negative integers.
///
/// The raw tag is kept for display. Equality and ordering only look at the
/// numeric components, with missing trailing components read as zero, so
/// `v1.2` and `v1.2.0` are equal even though they print differently.
///
/// # Examples
///
/// ```
/// use wanxiang_domain::VersionIdentifier;
///
/// let remote: VersionIdentifier = "v13.0.9".parse().unwrap();
/// let local: VersionIdentifier = "v13.0.6".parse().unwrap();
/// assert!(remote > local);
/// assert_eq!(VersionIdentifier::new("v1.2"), VersionIdentifier::new("1.2.0"));
/// ```
#[derive(Debug, Clone)]
pub struct VersionIdentifier {
    raw: String,
    components: Vec<Component>,
}

impl VersionIdentifier {
    /// Parse a tag. Parsing never fails; malformed parts become zero.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let components = strip_marker(raw.trim())
            .split('.')
            .map(Component::parse)
            .collect();
        Self { raw, components }
    }

    /// The tag exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn component(&self, index: usize) -> Component {
        self.components
            .get(index)
            .cloned()
            .unwrap_or_else(Component::zero)
    }
}

/// Remove a single leading non-numeric marker character (`v13.0.9` → `13.0.9`).
fn strip_marker(tag: &str) -> &str {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if !first.is_ascii_digit() => chars.as_str(),
        _ => tag,
    }
}

impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionIdentifier {}

impl std::fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for VersionIdentifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for VersionIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for VersionIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for VersionIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// Compare two version tags.
///
/// Returns `Greater` when `v1` is newer than `v2`.
pub fn compare_versions(v1: &str, v2: &str) -> Ordering {
    VersionIdentifier::new(v1).cmp(&VersionIdentifier::new(v2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "v13.0.9", "v13.0.6", "v1.2", "v1.2.0", "v1.2.0.1", "v2.0", "v1.9.9", "1.10", "v1.9",
        "", "v", "dict-nightly", "v1.x.3", "v007.1", "w7.1",
    ];

    #[test]
    fn test_documented_orderings() {
        assert_eq!(compare_versions("v13.0.9", "v13.0.6"), Ordering::Greater);
        assert_eq!(compare_versions("v1.2", "v1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("v2.0", "v1.9.9"), Ordering::Greater);
    }

    #[test]
    fn test_zero_padding_with_different_lengths() {
        assert_eq!(compare_versions("v1.2", "v1.2.0.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("v1.2", "v1.2.0.1"), Ordering::Less);
        assert_eq!(compare_versions("v1.2.0.1", "v1.2"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_not_lexical() {
        assert_eq!(compare_versions("v1.10", "v1.9"), Ordering::Greater);
        assert_eq!(compare_versions("v007.1", "v7.1"), Ordering::Equal);
    }

    #[test]
    fn test_marker_is_optional_and_any_letter() {
        assert_eq!(compare_versions("1.2.3", "v1.2.3"), Ordering::Equal);
        assert_eq!(compare_versions("w7.1", "v7.1"), Ordering::Equal);
    }

    #[test]
    fn test_garbage_components_read_as_zero() {
        assert_eq!(compare_versions("v1.x.3", "v1.0.3"), Ordering::Equal);
        assert_eq!(compare_versions("v1.2rc1", "v1.0"), Ordering::Equal);
        assert_eq!(compare_versions("dict-nightly", "v0"), Ordering::Equal);
    }

    #[test]
    fn test_components_longer_than_u64() {
        let big = "v1.184467440737095516160";
        let bigger = "v1.184467440737095516161";
        assert_eq!(compare_versions(bigger, big), Ordering::Greater);
        assert_eq!(compare_versions(big, "v1.18446744073709551615"), Ordering::Greater);
    }

    #[test]
    fn test_reflexive_and_antisymmetric() {
        for a in SAMPLES {
            assert_eq!(compare_versions(a, a), Ordering::Equal, "{a}");
            for b in SAMPLES {
                assert_eq!(
                    compare_versions(a, b),
                    compare_versions(b, a).reverse(),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_transitive_over_samples() {
        for a in SAMPLES {
            for b in SAMPLES {
                for c in SAMPLES {
                    if compare_versions(a, b).is_le() && compare_versions(b, c).is_le() {
                        assert!(compare_versions(a, c).is_le(), "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_keeps_raw_tag() {
        let v = VersionIdentifier::new("v1.2");
        assert_eq!(v.to_string(), "v1.2");
        assert_eq!(v, VersionIdentifier::new("v1.2.0"));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let v: VersionIdentifier = serde_json::from_str("\"v3.1.4\"").unwrap();
        assert_eq!(v.as_str(), "v3.1.4");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"v3.1.4\"");
    }
}
