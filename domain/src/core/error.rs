//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("Expected asset '{asset}' not found in release {tag}")]
    MissingAsset { tag: String, asset: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_display() {
        let error = DomainError::MissingAsset {
            tag: "v1.0.0".to_string(),
            asset: "base.zip".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Expected asset 'base.zip' not found in release v1.0.0"
        );
    }

    #[test]
    fn test_not_found_names_the_tag() {
        let error = DomainError::NotFound("dict-nightly".to_string());
        assert_eq!(error.to_string(), "Release not found: dict-nightly");
    }
}
